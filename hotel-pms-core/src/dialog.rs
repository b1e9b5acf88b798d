//! Fallback dialog state machine
//!
//! ```text
//! Closed --open(section, item)--> Open(section, item)
//! Open   --close-->               Closed
//! ```
//!
//! Navigation actions never pass through this state.

/// Dialog state for one settings view session
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DialogState {
    #[default]
    Closed,
    Open {
        section_id: String,
        item_title: String,
    },
}

impl DialogState {
    /// Open the dialog for a pair. Opening while open replaces the selection.
    pub fn open(&mut self, section_id: impl Into<String>, item_title: impl Into<String>) {
        let section_id = section_id.into();
        let item_title = item_title.into();
        log::debug!("Settings dialog opened for ({section_id}, {item_title})");
        *self = Self::Open {
            section_id,
            item_title,
        };
    }

    /// Close the dialog. No-op when already closed.
    pub fn close(&mut self) {
        if self.is_open() {
            log::debug!("Settings dialog closed");
        }
        *self = Self::Closed;
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Selected `(section_id, item_title)` while open
    #[must_use]
    pub fn selection(&self) -> Option<(&str, &str)> {
        match self {
            Self::Closed => None,
            Self::Open {
                section_id,
                item_title,
            } => Some((section_id, item_title)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let dialog = DialogState::default();
        assert_eq!(dialog, DialogState::Closed);
        assert!(!dialog.is_open());
        assert_eq!(dialog.selection(), None);
    }

    #[test]
    fn open_then_close() {
        let mut dialog = DialogState::default();

        dialog.open("rooms", "Housekeeping");
        assert_eq!(
            dialog,
            DialogState::Open {
                section_id: "rooms".to_string(),
                item_title: "Housekeeping".to_string(),
            }
        );
        assert_eq!(dialog.selection(), Some(("rooms", "Housekeeping")));

        dialog.close();
        assert_eq!(dialog, DialogState::Closed);
    }

    #[test]
    fn reopen_replaces_selection() {
        let mut dialog = DialogState::default();
        dialog.open("rooms", "Housekeeping");
        dialog.open("notifications", "SMS Alerts");
        assert_eq!(dialog.selection(), Some(("notifications", "SMS Alerts")));
    }

    #[test]
    fn close_when_closed_is_noop() {
        let mut dialog = DialogState::default();
        dialog.close();
        assert_eq!(dialog, DialogState::Closed);
    }
}
