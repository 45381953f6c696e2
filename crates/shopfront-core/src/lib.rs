//! Core logic for Shopfront: page partitioning, render projection, the
//! navigation state machine, and per-message session state.
//!
//! Everything in this crate is synchronous and side-effect free apart from
//! the [`session::SessionStore`], which is the single owned home of mutable
//! navigation state. Host I/O lives in `shopfront-gateway`.

pub mod config;
pub mod error;
pub mod nav;
pub mod pagination;
pub mod render;
pub mod session;

pub use error::{Result, ShopfrontError};
