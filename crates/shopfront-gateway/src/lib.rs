//! Interaction gateway: binds the navigation state machine to host-delivered
//! control events.
//!
//! This crate is the only place that talks to the host messaging interface
//! and the only place that mutates stored sessions. Core logic stays pure
//! in `shopfront-core`; the gateway validates incoming events (ownership,
//! expiry, staleness), applies transitions, and pushes re-rendered
//! documents back to the host as in-place message updates.

mod action;
mod gateway;
mod host;

pub use action::{ActionCode, ActionCodeError};
pub use gateway::{InteractionEvent, InteractionGateway, Outcome, Rejection};
pub use host::ChatHost;
