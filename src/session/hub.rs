//! Session Hub
//!
//! Tracks every connected dashboard page and owns each page's filter state.
//! Sessions never share state; the dataset itself lives in `AppState`.

use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, RwLock};
use uuid::Uuid;

use super::messages::ServerMessage;
use crate::view::{ControlId, FilterState, InputEvent};

/// Unique identifier for a dashboard session
pub type SessionId = String;

/// Manages all dashboard sessions
pub struct SessionHub {
    /// Active sessions: SessionId → SessionHandle
    sessions: Arc<RwLock<HashMap<SessionId, SessionHandle>>>,
    /// Configuration
    config: HubConfig,
}

/// Configuration for the session hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Maximum number of concurrent sessions
    pub max_sessions: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self { max_sessions: 1000 }
    }
}

/// Per-session state
pub struct SessionHandle {
    /// Channel sender for this session's socket
    pub sender: mpsc::UnboundedSender<ServerMessage>,
    /// Current filter inputs of this session
    pub filter: FilterState,
}

impl SessionHub {
    pub fn new(config: HubConfig) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            config,
        }
    }

    /// Register a new session with its initial filter state
    ///
    /// Returns the session ID on success, or an error if the session
    /// limit has been reached.
    pub async fn register(
        &self,
        sender: mpsc::UnboundedSender<ServerMessage>,
        filter: FilterState,
    ) -> Result<SessionId, SessionError> {
        let mut sessions = self.sessions.write().await;
        if sessions.len() >= self.config.max_sessions {
            return Err(SessionError::TooManySessions);
        }

        let id = Uuid::new_v4().to_string();
        sessions.insert(id.clone(), SessionHandle { sender, filter });

        tracing::info!(session_id = %id, active = sessions.len(), "Session opened");
        Ok(id)
    }

    /// Drop a session and its filter state
    pub async fn unregister(&self, id: &str) {
        if self.sessions.write().await.remove(id).is_some() {
            tracing::info!(session_id = %id, "Session closed");
        }
    }

    /// Apply an input event to one session's filter state
    ///
    /// Returns the changed control and a snapshot of the updated state.
    pub async fn apply(
        &self,
        id: &str,
        event: InputEvent,
    ) -> Result<(ControlId, FilterState), SessionError> {
        let mut sessions = self.sessions.write().await;
        let handle = sessions.get_mut(id).ok_or(SessionError::SessionNotFound)?;

        let changed = handle.filter.apply(event);
        tracing::debug!(
            session_id = %id,
            control = %changed,
            site = %handle.filter.site,
            low = handle.filter.payload_range.low,
            high = handle.filter.payload_range.high,
            "Filter updated"
        );

        Ok((changed, handle.filter.clone()))
    }

    /// Current filter state of a session
    pub async fn filter_state(&self, id: &str) -> Option<FilterState> {
        self.sessions
            .read()
            .await
            .get(id)
            .map(|handle| handle.filter.clone())
    }

    /// Send a message to a specific session
    pub async fn send_to(&self, id: &str, message: ServerMessage) -> Result<(), SessionError> {
        let sessions = self.sessions.read().await;
        let handle = sessions.get(id).ok_or(SessionError::SessionNotFound)?;

        handle
            .sender
            .send(message)
            .map_err(|_| SessionError::SendFailed)
    }

    /// Number of active sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

/// Errors that can occur in session handling
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Too many sessions")]
    TooManySessions,

    #[error("Session not found")]
    SessionNotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to send message")]
    SendFailed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{PayloadRange, SiteSelection};

    fn initial() -> FilterState {
        FilterState {
            site: SiteSelection::All,
            payload_range: PayloadRange::new(0.0, 9600.0),
        }
    }

    #[tokio::test]
    async fn test_register_and_unregister() {
        let hub = SessionHub::new(HubConfig::default());
        let (tx, _rx) = mpsc::unbounded_channel();

        let id = hub.register(tx, initial()).await.unwrap();
        assert_eq!(hub.session_count().await, 1);
        assert_eq!(hub.filter_state(&id).await, Some(initial()));

        hub.unregister(&id).await;
        assert_eq!(hub.session_count().await, 0);
        assert_eq!(hub.filter_state(&id).await, None);
    }

    #[tokio::test]
    async fn test_max_sessions() {
        let hub = SessionHub::new(HubConfig { max_sessions: 2 });

        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();
        let (tx3, _rx3) = mpsc::unbounded_channel();

        assert!(hub.register(tx1, initial()).await.is_ok());
        assert!(hub.register(tx2, initial()).await.is_ok());
        assert!(matches!(
            hub.register(tx3, initial()).await,
            Err(SessionError::TooManySessions)
        ));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let hub = SessionHub::new(HubConfig::default());
        let (tx1, _rx1) = mpsc::unbounded_channel();
        let (tx2, _rx2) = mpsc::unbounded_channel();

        let first = hub.register(tx1, initial()).await.unwrap();
        let second = hub.register(tx2, initial()).await.unwrap();

        let (changed, state) = hub
            .apply(
                &first,
                InputEvent::SiteDropdown(SiteSelection::from("KSC LC-39A")),
            )
            .await
            .unwrap();
        assert_eq!(changed, ControlId::SiteDropdown);
        assert_eq!(state.site, SiteSelection::from("KSC LC-39A"));

        hub.apply(
            &second,
            InputEvent::PayloadSlider(PayloadRange::new(1000.0, 2000.0)),
        )
        .await
        .unwrap();

        let first_state = hub.filter_state(&first).await.unwrap();
        let second_state = hub.filter_state(&second).await.unwrap();
        assert_eq!(first_state.payload_range, PayloadRange::new(0.0, 9600.0));
        assert_eq!(second_state.site, SiteSelection::All);
    }

    #[tokio::test]
    async fn test_apply_unknown_session() {
        let hub = SessionHub::new(HubConfig::default());
        let result = hub
            .apply("missing", InputEvent::SiteDropdown(SiteSelection::All))
            .await;
        assert!(matches!(result, Err(SessionError::SessionNotFound)));
    }

    #[tokio::test]
    async fn test_send_to() {
        let hub = SessionHub::new(HubConfig::default());
        let (tx, mut rx) = mpsc::unbounded_channel();

        let id = hub.register(tx, initial()).await.unwrap();
        hub.send_to(&id, ServerMessage::Pong).await.unwrap();

        assert!(matches!(rx.recv().await, Some(ServerMessage::Pong)));
    }
}
