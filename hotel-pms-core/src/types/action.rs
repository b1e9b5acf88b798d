//! Resolver output type

use serde::{Deserialize, Serialize};

/// What a front-end should do after a settings item is selected
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum SettingsAction {
    /// Go to a dedicated settings sub-page
    Navigate { path: String },

    /// Open the generic detail dialog for the selected pair
    #[serde(rename_all = "camelCase")]
    OpenDialog {
        section_id: String,
        item_title: String,
    },
}

impl SettingsAction {
    /// Build a fallback dialog action
    #[must_use]
    pub fn open_dialog(section_id: impl Into<String>, item_title: impl Into<String>) -> Self {
        Self::OpenDialog {
            section_id: section_id.into(),
            item_title: item_title.into(),
        }
    }

    /// Build a navigation action
    #[must_use]
    pub fn navigate(path: impl Into<String>) -> Self {
        Self::Navigate { path: path.into() }
    }

    #[must_use]
    pub fn is_navigate(&self) -> bool {
        matches!(self, Self::Navigate { .. })
    }

    /// Navigation target, if any
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Navigate { path } => Some(path),
            Self::OpenDialog { .. } => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn navigate_serializes_with_tag() {
        let action = SettingsAction::navigate("/settings/general");
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "action": "navigate", "path": "/settings/general" })
        );
    }

    #[test]
    fn open_dialog_serializes_camel_case() {
        let action = SettingsAction::open_dialog("rooms", "Housekeeping");
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "action": "openDialog",
                "sectionId": "rooms",
                "itemTitle": "Housekeeping"
            })
        );
    }

    #[test]
    fn path_only_for_navigate() {
        assert_eq!(
            SettingsAction::navigate("/settings/amenities").path(),
            Some("/settings/amenities")
        );
        assert_eq!(SettingsAction::open_dialog("a", "b").path(), None);
    }
}
