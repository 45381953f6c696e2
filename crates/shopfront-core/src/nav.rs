//! Navigation state machine.
//!
//! The state is the pair (category filter, page index); transitions are
//! total, pure functions of (state, action, catalog, page size). Invalid
//! requests clamp rather than error, so the machine can never deadlock or
//! leave the valid index range.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use shopfront_types::Catalog;

use crate::pagination;

/// A navigation event, already translated from the host's raw control
/// activation into a typed action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NavAction {
    /// Advance one page, clamped to the last page.
    NextPage,
    /// Go back one page, clamped to the first page.
    PrevPage,
    /// Switch the category filter; `None` shows all items. Always resets
    /// to the first page under the new filter.
    SetFilter {
        #[serde(default)]
        tag: Option<String>,
    },
    /// No state change; forces a re-render after an external catalog
    /// update.
    Refresh,
}

/// Current navigation position of one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavState {
    /// Active category filter; `None` means all items.
    pub filter: Option<String>,
    /// 0-based page index, always below the page count for `filter`.
    pub page_index: usize,
}

impl Default for NavState {
    fn default() -> Self {
        Self::initial(None)
    }
}

impl NavState {
    /// Initial state: first page under the given filter.
    pub fn initial(filter: Option<String>) -> Self {
        Self {
            filter,
            page_index: 0,
        }
    }

    /// Applies one action, producing the next state.
    ///
    /// Total: every action yields a valid state. The index is re-clamped
    /// against the current catalog even for `Refresh`, so the invariant
    /// `page_index < page_count(filter)` survives external catalog
    /// changes.
    pub fn apply(&self, action: &NavAction, catalog: &Catalog, page_size: NonZeroUsize) -> Self {
        match action {
            NavAction::NextPage => {
                let last = pagination::page_count(catalog, self.filter.as_deref(), page_size) - 1;
                Self {
                    filter: self.filter.clone(),
                    page_index: (self.page_index + 1).min(last),
                }
            }
            NavAction::PrevPage => Self {
                filter: self.filter.clone(),
                page_index: self.page_index.saturating_sub(1),
            },
            NavAction::SetFilter { tag } => Self::initial(tag.clone()),
            NavAction::Refresh => {
                let last = pagination::page_count(catalog, self.filter.as_deref(), page_size) - 1;
                Self {
                    filter: self.filter.clone(),
                    page_index: self.page_index.min(last),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_types::Item;

    fn size(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(
            "Shop",
            "G",
            vec![
                Item::new("a", "A", "d", 1).with_category("cereal"),
                Item::new("b", "B", "d", 2).with_category("cereal"),
                Item::new("c", "C", "d", 3).with_category("snack"),
                Item::new("d", "D", "d", 4),
                Item::new("e", "E", "d", 5),
            ],
        )
        .unwrap()
    }

    #[test]
    fn next_page_walks_forward_and_clamps_on_last() {
        let catalog = catalog();
        let mut state = NavState::default();
        state = state.apply(&NavAction::NextPage, &catalog, size(2));
        assert_eq!(state.page_index, 1);
        state = state.apply(&NavAction::NextPage, &catalog, size(2));
        assert_eq!(state.page_index, 2);
        let clamped = state.apply(&NavAction::NextPage, &catalog, size(2));
        assert_eq!(clamped, state);
    }

    #[test]
    fn prev_page_on_first_page_is_identity() {
        let catalog = catalog();
        let state = NavState::default();
        assert_eq!(state.apply(&NavAction::PrevPage, &catalog, size(2)), state);
    }

    #[test]
    fn set_filter_resets_page_index() {
        let catalog = catalog();
        let state = NavState {
            filter: None,
            page_index: 2,
        };
        let filtered = state.apply(
            &NavAction::SetFilter {
                tag: Some("cereal".to_string()),
            },
            &catalog,
            size(2),
        );
        assert_eq!(filtered.filter.as_deref(), Some("cereal"));
        assert_eq!(filtered.page_index, 0);

        let back_to_all = filtered.apply(&NavAction::SetFilter { tag: None }, &catalog, size(2));
        assert_eq!(back_to_all.filter, None);
        assert_eq!(back_to_all.page_index, 0);
    }

    #[test]
    fn filter_round_trip_with_large_page_size() {
        let catalog = Catalog::new(
            "Shop",
            "G",
            vec![
                Item::new("a", "A", "d", 1).with_category("cereal"),
                Item::new("b", "B", "d", 2).with_category("cereal"),
                Item::new("c", "C", "d", 3).with_category("snack"),
            ],
        )
        .unwrap();
        let state = NavState::default().apply(
            &NavAction::SetFilter {
                tag: Some("cereal".to_string()),
            },
            &catalog,
            size(10),
        );
        let filtered = pagination::partition(&catalog, state.filter.as_deref(), size(10));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].len(), 2);

        let all = state.apply(&NavAction::SetFilter { tag: None }, &catalog, size(10));
        assert_eq!(all.page_index, 0);
        let pages = pagination::partition(&catalog, all.filter.as_deref(), size(10));
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].len(), 3);
    }

    #[test]
    fn refresh_preserves_state_on_unchanged_catalog() {
        let catalog = catalog();
        let state = NavState {
            filter: None,
            page_index: 1,
        };
        assert_eq!(state.apply(&NavAction::Refresh, &catalog, size(2)), state);
    }

    #[test]
    fn refresh_reclamps_after_catalog_shrank() {
        let shrunk = Catalog::new("Shop", "G", vec![Item::new("a", "A", "d", 1)]).unwrap();
        let state = NavState {
            filter: None,
            page_index: 2,
        };
        let next = state.apply(&NavAction::Refresh, &shrunk, size(2));
        assert_eq!(next.page_index, 0);
    }
}
