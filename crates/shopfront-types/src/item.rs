use serde::{Deserialize, Serialize};

/// A single sellable item in a catalog.
///
/// Items are immutable after creation and have no identity outside the
/// catalog that owns them: `id` is only required to be unique within one
/// [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Identifier, unique within the owning catalog.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Short description rendered beneath the name.
    pub description: String,
    /// Price in the catalog's currency. Non-negative by construction.
    pub price: u64,
    /// Category tag. `None` means the item only appears in unfiltered views.
    #[serde(default)]
    pub category: Option<String>,
    /// Optional icon (emoji or short glyph) prefixed to the display name.
    #[serde(default)]
    pub icon: Option<String>,
    /// Extra detail lines rendered as quoted text under the description.
    #[serde(default)]
    pub fields: Vec<String>,
}

impl Item {
    /// Creates an item with the required attributes only.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            category: None,
            icon: None,
            fields: Vec::new(),
        }
    }

    /// Sets the category tag.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the icon.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Appends a detail line.
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_fields_default_when_absent() {
        let item: Item = serde_json::from_str(
            r#"{"id": "a", "name": "Oatmeal", "description": "Hearty", "price": 120}"#,
        )
        .unwrap();
        assert_eq!(item, Item::new("a", "Oatmeal", "Hearty", 120));
    }

    #[test]
    fn builder_setters_fill_optional_attributes() {
        let item = Item::new("a", "Oatmeal", "Hearty", 120)
            .with_category("cereal")
            .with_icon("🥣")
            .with_field("Restores 5 stamina");
        assert_eq!(item.category.as_deref(), Some("cereal"));
        assert_eq!(item.icon.as_deref(), Some("🥣"));
        assert_eq!(item.fields, vec!["Restores 5 stamina"]);
    }
}
