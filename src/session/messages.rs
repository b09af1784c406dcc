//! WebSocket Message Types
//!
//! Messages exchanged between the dashboard page and its server session.

use serde::{Deserialize, Serialize};

use super::hub::SessionError;
use crate::view::{ControlId, InputEvent, OutputUpdate, PayloadRange, SiteSelection};

/// Messages sent from the page to the server
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// An input control changed value
    Input {
        /// Element id of the control (`site-dropdown`, `payload-slider`)
        id: ControlId,
        /// New control value: a site name or `[low, high]`
        value: InputValue,
    },
    /// Ping for keepalive
    Ping,
}

/// Raw control value as sent by the page
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InputValue {
    Site(String),
    Range(PayloadRange),
}

/// Pair a control id with its value, rejecting mismatched shapes
pub fn parse_input(id: ControlId, value: InputValue) -> Result<InputEvent, SessionError> {
    match (id, value) {
        (ControlId::SiteDropdown, InputValue::Site(site)) => {
            Ok(InputEvent::SiteDropdown(SiteSelection::from(site)))
        }
        (ControlId::PayloadSlider, InputValue::Range(range)) => {
            Ok(InputEvent::PayloadSlider(range))
        }
        (id, value) => Err(SessionError::InvalidInput(format!(
            "value {:?} does not fit control '{}'",
            value, id
        ))),
    }
}

/// Messages sent from the server to the page
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Session established
    Connected {
        /// Unique session identifier
        session_id: String,
    },
    /// Replacement figures for output regions
    Update {
        outputs: Vec<OutputUpdate>,
    },
    /// Pong response to ping
    Pong,
    /// Error message
    Error {
        /// Error description
        message: String,
    },
}
