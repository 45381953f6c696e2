//! Shared value types for the Shopfront workspace.
//!
//! These are plain immutable records with serde derives. Anything with
//! behavior (partitioning, projection, navigation) lives in
//! `shopfront-core`; this crate only defines the data the rest of the
//! workspace exchanges.

mod catalog;
mod document;
mod item;
mod page;

pub use catalog::{Catalog, CatalogError};
pub use document::{CategoryOption, ControlDescriptor, DocumentEntry, VisualDocument};
pub use item::Item;
pub use page::Page;
