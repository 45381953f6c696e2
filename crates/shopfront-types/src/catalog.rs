use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::item::Item;

/// Validation errors raised when constructing a [`Catalog`].
///
/// Construction is the only place catalog data can be rejected; once a
/// `Catalog` exists, every view derived from it is valid.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogError {
    /// A catalog must contain at least one item.
    #[error("catalog '{title}' has no items")]
    Empty { title: String },

    /// Item ids must be unique within one catalog.
    #[error("duplicate item id '{id}' in catalog '{title}'")]
    DuplicateItemId { title: String, id: String },
}

/// The full set of sellable items plus shop metadata.
///
/// A catalog exclusively owns its items. It is immutable after
/// construction; pages and rendered documents are derived views, never
/// stored back into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    /// Shop title, shown in every page header.
    pub title: String,
    /// Currency symbol appended to formatted prices.
    pub currency: String,
    /// Optional shop description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional footer text appended to the page position indicator.
    #[serde(default)]
    pub footer: Option<String>,
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, validating the item list.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Empty`] for a zero-item catalog and
    /// [`CatalogError::DuplicateItemId`] when two items share an id.
    pub fn new(
        title: impl Into<String>,
        currency: impl Into<String>,
        items: Vec<Item>,
    ) -> Result<Self, CatalogError> {
        let title = title.into();
        if items.is_empty() {
            return Err(CatalogError::Empty { title });
        }
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItemId {
                    title,
                    id: item.id.clone(),
                });
            }
        }
        Ok(Self {
            title,
            currency: currency.into(),
            description: None,
            footer: None,
            items,
        })
    }

    /// Sets the shop description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the footer text.
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    /// All items in catalog order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Looks up an item by id.
    pub fn item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct category tags in order of first appearance.
    ///
    /// Items without a tag do not contribute; they are only reachable
    /// through the unfiltered view.
    pub fn category_tags(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.items
            .iter()
            .filter_map(|item| item.category.as_deref())
            .filter(|tag| seen.insert(*tag))
            .collect()
    }
}
