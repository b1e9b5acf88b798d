//! Settings route table
//!
//! Exact-match lookup of `(section_id, item_title)` pairs. Keys are unique, so
//! declaration order never changes which entry matches.

mod builtin;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{CoreError, CoreResult};
use crate::types::{Destination, RouteEntry};

static BUILTIN_TABLE: LazyLock<RouteTable> = LazyLock::new(|| {
    let (table, defects) = RouteTable::build(builtin::BUILTIN_ROUTES);
    for defect in &defects {
        log::error!("Built-in route table defect: {defect}");
    }
    log::debug!("Built-in route table loaded with {} entries", table.len());
    table
});

/// Static route table
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    /// Entries in declaration order
    entries: Vec<RouteEntry>,
    /// section id -> item title -> index into `entries`
    index: HashMap<&'static str, HashMap<&'static str, usize>>,
}

impl RouteTable {
    /// Build a table, rejecting duplicate keys and non-absolute paths
    pub fn from_entries(entries: &[RouteEntry]) -> CoreResult<Self> {
        let (table, mut defects) = Self::build(entries);
        if defects.is_empty() {
            Ok(table)
        } else {
            Err(defects.remove(0))
        }
    }

    /// The process-wide built-in table, built on first use
    pub fn builtin() -> &'static RouteTable {
        &BUILTIN_TABLE
    }

    /// Every defect in the built-in entries; [`Self::builtin`] only logs them
    pub fn builtin_defects() -> Vec<CoreError> {
        Self::build(builtin::BUILTIN_ROUTES).1
    }

    /// Keeps the first entry of every key and reports every defect found.
    fn build(entries: &[RouteEntry]) -> (Self, Vec<CoreError>) {
        let mut table = Self::default();
        let mut defects = Vec::new();

        for entry in entries {
            if let Some(path) = entry.path() {
                if !path.starts_with('/') {
                    defects.push(CoreError::InvalidRoutePath {
                        section_id: entry.section_id.to_string(),
                        item_title: entry.item_title.to_string(),
                        path: path.to_string(),
                    });
                    continue;
                }
            }

            let items = table.index.entry(entry.section_id).or_default();
            if items.contains_key(entry.item_title) {
                defects.push(CoreError::DuplicateRoute {
                    section_id: entry.section_id.to_string(),
                    item_title: entry.item_title.to_string(),
                });
                continue;
            }

            items.insert(entry.item_title, table.entries.len());
            table.entries.push(*entry);
        }

        (table, defects)
    }

    /// Find the entry for an exact pair
    pub fn lookup(&self, section_id: &str, item_title: &str) -> Option<&RouteEntry> {
        self.index
            .get(section_id)
            .and_then(|items| items.get(item_title))
            .and_then(|&i| self.entries.get(i))
    }

    /// Destination for a pair; absent keys have no dedicated page
    pub fn destination(&self, section_id: &str, item_title: &str) -> Destination {
        self.lookup(section_id, item_title)
            .map_or(Destination::NoDedicatedPage, |entry| entry.destination)
    }

    /// Entries in declaration order
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Paths of all dedicated pages, in declaration order
    pub fn routed_paths(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().filter_map(RouteEntry::path)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn builtin_keys_are_unique() {
        let defects = RouteTable::builtin_defects();
        assert!(defects.is_empty(), "defects: {defects:?}");

        let mut seen = HashSet::new();
        for entry in builtin::BUILTIN_ROUTES {
            assert!(
                seen.insert((entry.section_id, entry.item_title)),
                "duplicate key ({}, {})",
                entry.section_id,
                entry.item_title
            );
        }
    }

    #[test]
    fn builtin_table_keeps_every_entry() {
        assert_eq!(RouteTable::builtin().len(), builtin::BUILTIN_ROUTES.len());
    }

    #[test]
    fn duplicate_key_is_rejected() {
        let entries = [
            RouteEntry::page("security", "User Roles", "/settings/user-roles"),
            RouteEntry::page("security", "User Roles", "/settings/roles"),
        ];

        let err = RouteTable::from_entries(&entries).unwrap_err();
        assert_eq!(
            err,
            CoreError::DuplicateRoute {
                section_id: "security".to_string(),
                item_title: "User Roles".to_string(),
            }
        );
    }

    #[test]
    fn duplicate_key_with_dialog_entry_is_rejected() {
        let entries = [
            RouteEntry::dialog("rooms", "Housekeeping"),
            RouteEntry::page("rooms", "Housekeeping", "/settings/housekeeping"),
        ];
        assert!(matches!(
            RouteTable::from_entries(&entries),
            Err(CoreError::DuplicateRoute { .. })
        ));
    }

    #[test]
    fn relative_path_is_rejected() {
        let entries = [RouteEntry::page("general", "Localization", "settings/localization")];
        assert!(matches!(
            RouteTable::from_entries(&entries),
            Err(CoreError::InvalidRoutePath { .. })
        ));
    }

    #[test]
    fn same_title_in_different_sections_is_allowed() {
        let entries = [
            RouteEntry::page("booking", "Overview", "/settings/booking"),
            RouteEntry::page("rooms", "Overview", "/settings/rooms"),
        ];
        let table = RouteTable::from_entries(&entries).unwrap();

        assert_eq!(
            table.destination("booking", "Overview"),
            Destination::Page("/settings/booking")
        );
        assert_eq!(
            table.destination("rooms", "Overview"),
            Destination::Page("/settings/rooms")
        );
    }

    #[test]
    fn lookup_is_exact() {
        let table = RouteTable::builtin();
        assert!(table.lookup("security", "User Roles").is_some());
        assert!(table.lookup("security", "user roles").is_none());
        assert!(table.lookup("Security", "User Roles").is_none());
        assert!(table.lookup("security", "User").is_none());
        assert!(table.lookup("security", "User Roles ").is_none());
    }

    #[test]
    fn routed_paths_skip_dialog_entries() {
        let entries = [
            RouteEntry::page("general", "Hotel Information", "/settings/general"),
            RouteEntry::dialog("general", "Branding"),
        ];
        let table = RouteTable::from_entries(&entries).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.routed_paths().collect::<Vec<_>>(), vec!["/settings/general"]);
    }
}
