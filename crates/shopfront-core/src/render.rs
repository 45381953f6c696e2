//! Render projector.
//!
//! Maps a (catalog, page, position) view to a [`VisualDocument`] and the
//! matching [`ControlDescriptor`]. Pure and deterministic: identical inputs
//! produce byte-identical output, so the gateway simply re-projects on
//! every transition.

use shopfront_types::{
    Catalog, CategoryOption, ControlDescriptor, DocumentEntry, Page, VisualDocument,
};

/// Everything the projector needs to know about the current position.
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub page: &'a Page,
    /// Total pages under the active filter. At least 1.
    pub page_count: usize,
    /// Active category filter.
    pub filter: Option<&'a str>,
    /// Session generation stamped into the control descriptor.
    pub generation: u64,
}

/// Label used for the unfiltered view in headers and the selector.
const ALL_ITEMS_LABEL: &str = "All items";

/// Projects one page of a catalog into its visual document and control
/// states.
pub fn project(catalog: &Catalog, view: &PageView<'_>) -> (VisualDocument, ControlDescriptor) {
    let page_title = view.filter.unwrap_or(ALL_ITEMS_LABEL);
    let entries = view
        .page
        .item_ids
        .iter()
        .filter_map(|id| catalog.item(id))
        .map(|item| {
            let name = match &item.icon {
                Some(icon) => format!("{icon} {}", item.name),
                None => item.name.clone(),
            };
            let mut body = format!("*{}*", item.description);
            for field in &item.fields {
                body.push_str("\n> ");
                body.push_str(field);
            }
            DocumentEntry {
                heading: format!("{name} | `{}` {}", format_price(item.price), catalog.currency),
                body,
            }
        })
        .collect();

    let position = format!("page {} of {}", view.page.index + 1, view.page_count);
    let footer = match &catalog.footer {
        Some(text) => format!("{position} | {text}"),
        None => position,
    };

    let document = VisualDocument {
        title: format!("{page_title} | {}", catalog.title),
        description: catalog.description.clone(),
        entries,
        footer,
    };

    let mut categories = vec![CategoryOption {
        label: ALL_ITEMS_LABEL.to_string(),
        tag: None,
        selected: view.filter.is_none(),
    }];
    categories.extend(catalog.category_tags().into_iter().map(|tag| CategoryOption {
        label: tag.to_string(),
        tag: Some(tag.to_string()),
        selected: view.filter == Some(tag),
    }));

    let controls = ControlDescriptor {
        prev_enabled: view.page.index > 0,
        next_enabled: view.page.index + 1 < view.page_count,
        categories,
        generation: view.generation,
    };

    (document, controls)
}

/// Formats a price with thousands separators: 1234567 -> "1,234,567".
fn format_price(price: u64) -> String {
    let digits = price.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::pagination;
    use shopfront_types::Item;

    fn catalog() -> Catalog {
        Catalog::new(
            "General Store",
            "gold",
            vec![
                Item::new("a", "Oatmeal", "Hearty breakfast", 1250)
                    .with_category("cereal")
                    .with_icon("🥣")
                    .with_field("Restores 5 stamina"),
                Item::new("b", "Granola", "Crunchy", 900).with_category("cereal"),
                Item::new("c", "Pretzel", "Salty", 300).with_category("snack"),
            ],
        )
        .unwrap()
        .with_footer("No refunds")
    }

    fn view<'a>(page: &'a Page, page_count: usize, filter: Option<&'a str>) -> PageView<'a> {
        PageView {
            page,
            page_count,
            filter,
            generation: 0,
        }
    }

    #[test]
    fn price_formatting_inserts_thousands_separators() {
        assert_eq!(format_price(0), "0");
        assert_eq!(format_price(999), "999");
        assert_eq!(format_price(1000), "1,000");
        assert_eq!(format_price(1234567), "1,234,567");
    }

    #[test]
    fn projection_is_deterministic() {
        let catalog = catalog();
        let size = NonZeroUsize::new(2).unwrap();
        let page = pagination::page_at(&catalog, None, size, 0).unwrap();
        let first = project(&catalog, &view(&page, 2, None));
        let second = project(&catalog, &view(&page, 2, None));
        assert_eq!(first, second);
    }

    #[test]
    fn document_layout_for_first_page() {
        let catalog = catalog();
        let size = NonZeroUsize::new(2).unwrap();
        let page = pagination::page_at(&catalog, None, size, 0).unwrap();
        let (doc, controls) = project(&catalog, &view(&page, 2, None));

        assert_eq!(doc.title, "All items | General Store");
        assert_eq!(doc.entries.len(), 2);
        assert_eq!(doc.entries[0].heading, "🥣 Oatmeal | `1,250` gold");
        assert_eq!(
            doc.entries[0].body,
            "*Hearty breakfast*\n> Restores 5 stamina"
        );
        assert_eq!(doc.entries[1].heading, "Granola | `900` gold");
        assert_eq!(doc.footer, "page 1 of 2 | No refunds");

        assert!(!controls.prev_enabled);
        assert!(controls.next_enabled);
    }

    #[test]
    fn controls_disable_at_both_boundaries() {
        let catalog = catalog();
        let size = NonZeroUsize::new(2).unwrap();
        let last = pagination::page_at(&catalog, None, size, 1).unwrap();
        let (_, controls) = project(&catalog, &view(&last, 2, None));
        assert!(controls.prev_enabled);
        assert!(!controls.next_enabled);

        let only = pagination::page_at(&catalog, Some("snack"), size, 0).unwrap();
        let (_, controls) = project(&catalog, &view(&only, 1, Some("snack")));
        assert!(!controls.prev_enabled);
        assert!(!controls.next_enabled);
    }

    #[test]
    fn category_selector_lists_all_tags_with_selection() {
        let catalog = catalog();
        let size = NonZeroUsize::new(2).unwrap();
        let page = pagination::page_at(&catalog, Some("cereal"), size, 0).unwrap();
        let (_, controls) = project(&catalog, &view(&page, 1, Some("cereal")));

        let labels: Vec<&str> = controls
            .categories
            .iter()
            .map(|option| option.label.as_str())
            .collect();
        assert_eq!(labels, vec!["All items", "cereal", "snack"]);
        assert!(!controls.categories[0].selected);
        assert!(controls.categories[1].selected);
        assert!(!controls.categories[2].selected);
    }

    #[test]
    fn empty_page_renders_zero_entries_with_controls_disabled() {
        let catalog = catalog();
        let size = NonZeroUsize::new(2).unwrap();
        let page = pagination::page_at(&catalog, Some("weapons"), size, 0).unwrap();
        assert!(page.is_empty());
        let (doc, controls) = project(&catalog, &view(&page, 1, Some("weapons")));
        assert!(doc.entries.is_empty());
        assert_eq!(doc.footer, "page 1 of 1 | No refunds");
        assert!(!controls.prev_enabled);
        assert!(!controls.next_enabled);
    }
}
