//! Settings section and item type definitions

use serde::{Deserialize, Serialize};

/// A single settings entry, unique within its section by title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsItem {
    /// Display title, also the lookup key inside the section
    pub title: String,
    /// Short description
    pub description: String,
}

impl SettingsItem {
    #[must_use]
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// A grouped category of settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSection {
    /// Section id (unique across the catalog)
    pub id: String,
    /// Display title
    pub title: String,
    /// Short description
    pub description: String,
    /// Icon glyph
    pub icon: String,
    /// Items in display order
    pub items: Vec<SettingsItem>,
}

impl SettingsSection {
    /// Find an item by exact title
    #[must_use]
    pub fn item(&self, title: &str) -> Option<&SettingsItem> {
        self.items.iter().find(|item| item.title == title)
    }

    /// Whether the section owns an item with the given title
    #[must_use]
    pub fn contains(&self, title: &str) -> bool {
        self.item(title).is_some()
    }
}
