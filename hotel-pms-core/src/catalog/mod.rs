//! Settings catalog
//!
//! Sections and items are configuration loaded at startup. Nothing here is
//! created at runtime.

mod builtin;

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult};
use crate::routing::RouteTable;
use crate::types::{SettingsItem, SettingsSection};

/// Ordered list of settings sections
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SettingsCatalog {
    sections: Vec<SettingsSection>,
}

impl SettingsCatalog {
    #[must_use]
    pub fn new(sections: Vec<SettingsSection>) -> Self {
        Self { sections }
    }

    /// Catalog shipped with the application
    #[must_use]
    pub fn builtin() -> Self {
        let sections = builtin::BUILTIN_SECTIONS
            .iter()
            .map(|(id, title, description, icon, items)| SettingsSection {
                id: (*id).to_string(),
                title: (*title).to_string(),
                description: (*description).to_string(),
                icon: (*icon).to_string(),
                items: items
                    .iter()
                    .map(|(title, description)| SettingsItem::new(*title, *description))
                    .collect(),
            })
            .collect();

        Self { sections }
    }

    pub fn sections(&self) -> &[SettingsSection] {
        &self.sections
    }

    pub fn section(&self, id: &str) -> Option<&SettingsSection> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn item(&self, section_id: &str, item_title: &str) -> Option<&SettingsItem> {
        self.section(section_id)
            .and_then(|section| section.item(item_title))
    }

    /// Total number of items across all sections
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|section| section.items.len()).sum()
    }

    /// Collect every configuration defect between the catalog and a route table
    pub fn audit(&self, routes: &RouteTable) -> Vec<CoreError> {
        let mut defects = Vec::new();
        let mut section_ids = HashSet::new();

        for section in &self.sections {
            if !section_ids.insert(section.id.as_str()) {
                defects.push(CoreError::DuplicateSection(section.id.clone()));
            }

            let mut titles = HashSet::new();
            for item in &section.items {
                if !titles.insert(item.title.as_str()) {
                    defects.push(CoreError::DuplicateItem {
                        section_id: section.id.clone(),
                        item_title: item.title.clone(),
                    });
                }
            }
        }

        for entry in routes.entries() {
            let known = self
                .section(entry.section_id)
                .is_some_and(|section| section.contains(entry.item_title));
            if !known {
                defects.push(CoreError::OrphanRoute {
                    section_id: entry.section_id.to_string(),
                    item_title: entry.item_title.to_string(),
                });
            }
        }

        defects
    }

    /// Like [`Self::audit`], but stops at the first defect
    pub fn validate(&self, routes: &RouteTable) -> CoreResult<()> {
        match self.audit(routes).into_iter().next() {
            Some(defect) => Err(defect),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::RouteEntry;

    fn section(id: &str, titles: &[&str]) -> SettingsSection {
        SettingsSection {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            icon: String::new(),
            items: titles.iter().map(|t| SettingsItem::new(*t, "")).collect(),
        }
    }

    #[test]
    fn builtin_catalog_matches_builtin_routes() {
        let catalog = SettingsCatalog::builtin();
        assert_eq!(catalog.validate(RouteTable::builtin()), Ok(()));
    }

    #[test]
    fn builtin_catalog_has_expected_sections() {
        let catalog = SettingsCatalog::builtin();
        let ids: Vec<&str> = catalog.sections().iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["general", "booking", "rooms", "security", "notifications", "integrations"]
        );
        assert_eq!(catalog.item_count(), 16);
    }

    #[test]
    fn item_lookup_is_scoped_to_section() {
        let catalog = SettingsCatalog::builtin();
        assert!(catalog.item("rooms", "Housekeeping").is_some());
        assert!(catalog.item("security", "Housekeeping").is_none());
        assert!(catalog.item("unknown", "Housekeeping").is_none());
    }

    #[test]
    fn audit_reports_duplicate_section_and_item() {
        let catalog = SettingsCatalog::new(vec![
            section("general", &["A", "A"]),
            section("general", &["B"]),
        ]);

        let defects = catalog.audit(&RouteTable::default());
        assert_eq!(
            defects,
            vec![
                CoreError::DuplicateItem {
                    section_id: "general".to_string(),
                    item_title: "A".to_string(),
                },
                CoreError::DuplicateSection("general".to_string()),
            ]
        );
    }

    #[test]
    fn audit_reports_orphan_route() {
        let catalog = SettingsCatalog::new(vec![section("booking", &["Booking Rules"])]);
        let routes = RouteTable::from_entries(&[
            RouteEntry::page("booking", "Booking Rules", "/settings/booking-rules"),
            RouteEntry::page("booking", "Deposits", "/settings/deposits"),
        ])
        .unwrap();

        assert_eq!(
            catalog.validate(&routes),
            Err(CoreError::OrphanRoute {
                section_id: "booking".to_string(),
                item_title: "Deposits".to_string(),
            })
        );
    }

    #[test]
    fn audit_matches_route_titles_exactly() {
        let catalog = SettingsCatalog::new(vec![section("security", &["User Roles"])]);
        assert!(catalog.sections()[0].contains("User Roles"));
        assert!(!catalog.sections()[0].contains("user roles"));

        let routes = RouteTable::from_entries(&[
            RouteEntry::page("security", "user roles", "/settings/user-roles"),
            RouteEntry::page("reports", "User Roles", "/settings/reports"),
        ])
        .unwrap();

        assert_eq!(
            catalog.audit(&routes),
            vec![
                CoreError::OrphanRoute {
                    section_id: "security".to_string(),
                    item_title: "user roles".to_string(),
                },
                CoreError::OrphanRoute {
                    section_id: "reports".to_string(),
                    item_title: "User Roles".to_string(),
                },
            ]
        );
    }
}
