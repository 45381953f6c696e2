//! Page partitioner.
//!
//! Slices a catalog into fixed-size pages, optionally filtered by category
//! tag. Partitioning is a pure function of (catalog, filter, page size):
//! the returned iterator is lazy and can be regenerated at any time with
//! identical results, so pages are never cached or stored.

use std::num::NonZeroUsize;

use shopfront_types::{Catalog, Item, Page};

/// Lazy iterator over the pages of a catalog under one filter.
///
/// A filter that matches nothing yields exactly one synthetic empty page,
/// never zero pages, so a page index of 0 is always valid.
pub struct Pages<'a> {
    items: std::slice::Iter<'a, Item>,
    filter: Option<&'a str>,
    page_size: NonZeroUsize,
    next_index: usize,
}

impl<'a> Pages<'a> {
    fn matches(filter: Option<&str>, item: &Item) -> bool {
        match filter {
            None => true,
            Some(tag) => item.category.as_deref() == Some(tag),
        }
    }
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page;

    fn next(&mut self) -> Option<Page> {
        let mut item_ids = Vec::with_capacity(self.page_size.get());
        for item in self.items.by_ref() {
            if Self::matches(self.filter, item) {
                item_ids.push(item.id.clone());
                if item_ids.len() == self.page_size.get() {
                    break;
                }
            }
        }
        if item_ids.is_empty() && self.next_index > 0 {
            return None;
        }
        let index = self.next_index;
        self.next_index += 1;
        Some(Page { index, item_ids })
    }
}

/// Returns the lazy page sequence for `catalog` under `filter`.
///
/// Catalog order is preserved; the last page may be shorter than
/// `page_size`.
pub fn pages<'a>(
    catalog: &'a Catalog,
    filter: Option<&'a str>,
    page_size: NonZeroUsize,
) -> Pages<'a> {
    Pages {
        items: catalog.items().iter(),
        filter,
        page_size,
        next_index: 0,
    }
}

/// Collects the full page sequence.
pub fn partition(
    catalog: &Catalog,
    filter: Option<&str>,
    page_size: NonZeroUsize,
) -> Vec<Page> {
    pages(catalog, filter, page_size).collect()
}

/// Number of pages under `filter`. Always at least 1.
pub fn page_count(catalog: &Catalog, filter: Option<&str>, page_size: NonZeroUsize) -> usize {
    let matching = catalog
        .items()
        .iter()
        .filter(|item| Pages::matches(filter, item))
        .count();
    matching.div_ceil(page_size.get()).max(1)
}

/// The page at `index`, or `None` past the end of the sequence.
pub fn page_at(
    catalog: &Catalog,
    filter: Option<&str>,
    page_size: NonZeroUsize,
    index: usize,
) -> Option<Page> {
    pages(catalog, filter, page_size).nth(index)
}
