//! Per-message navigation sessions.
//!
//! A session is the mutable navigation state of exactly one live
//! interactive message, owned by exactly one viewer. All mutation goes
//! through the gateway; this module only defines the record and its
//! in-memory store.

mod model;
mod store;

pub use model::Session;
pub use store::SessionStore;
