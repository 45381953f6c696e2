use serde::{Deserialize, Serialize};

/// A bounded window of catalog items shown at once.
///
/// Pages reference items by id rather than owning copies; they are
/// recomputed from (catalog, filter, page size) and never stored
/// independently, so a page is always consistent with its catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// 0-based position within the page sequence for the active filter.
    pub index: usize,
    /// Item ids in catalog order. May be empty for the synthetic page
    /// produced when a filter matches nothing.
    pub item_ids: Vec<String>,
}

impl Page {
    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.item_ids.len()
    }

    /// True for the synthetic empty page.
    pub fn is_empty(&self) -> bool {
        self.item_ids.is_empty()
    }
}
