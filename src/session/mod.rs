//! Dashboard Sessions
//!
//! Each browser page holds a WebSocket to `/ws`. The server keeps that
//! page's filter state and pushes recomputed charts whenever an input
//! control changes.
//!
//! ## Protocol
//!
//! ```javascript
//! const ws = new WebSocket('ws://localhost:8050/ws');
//!
//! ws.onopen = () => {
//!   ws.send(JSON.stringify({type: 'input', id: 'site-dropdown', value: 'KSC LC-39A'}));
//!   ws.send(JSON.stringify({type: 'input', id: 'payload-slider', value: [2000, 8000]}));
//! };
//!
//! ws.onmessage = (event) => {
//!   const msg = JSON.parse(event.data);
//!   if (msg.type === 'update') {
//!     msg.outputs.forEach(o => Plotly.react(o.id, o.figure.data, o.figure.layout));
//!   }
//! };
//! ```

mod handler;
mod hub;
mod messages;

pub use handler::websocket_handler;
pub use hub::{HubConfig, SessionError, SessionHub, SessionId};
pub use messages::{parse_input, ClientMessage, InputValue, ServerMessage};
