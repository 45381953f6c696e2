use serde::{Deserialize, Serialize};

/// The rendered representation of one catalog page, independent of the
/// transport the host uses to display it.
///
/// A document is a pure projection of (catalog, page, position): the same
/// inputs always produce a byte-identical document, which is what lets the
/// gateway regenerate it on every transition instead of patching the
/// previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualDocument {
    /// Header line: page title combined with the catalog title.
    pub title: String,
    /// Optional descriptive text under the header.
    #[serde(default)]
    pub description: Option<String>,
    /// One entry per item on the page, in catalog order.
    pub entries: Vec<DocumentEntry>,
    /// Footer: page position indicator plus optional catalog footer.
    pub footer: String,
}

/// One item rendered into heading and body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentEntry {
    /// Item name, icon, and formatted price.
    pub heading: String,
    /// Item description and quoted detail lines.
    pub body: String,
}

/// Enabled/disabled state of the navigation controls for the current page.
///
/// Boundary disabling is a correctness requirement: a control that would
/// produce an invalid transition is never offered to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlDescriptor {
    /// False on the first page.
    pub prev_enabled: bool,
    /// False on the last page.
    pub next_enabled: bool,
    /// Category selector entries: every distinct tag plus the "all" option.
    pub categories: Vec<CategoryOption>,
    /// Session generation the controls were rendered for. The host embeds
    /// this in control action codes so stale activations can be detected.
    pub generation: u64,
}

/// One entry of the category selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryOption {
    /// Label shown to the viewer.
    pub label: String,
    /// Tag applied when selected; `None` is the "all" option.
    pub tag: Option<String>,
    /// True for the currently active filter.
    pub selected: bool,
}
