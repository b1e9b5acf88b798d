//! Settings route resolver
//!
//! Decides whether a selected settings item opens a dedicated page or the
//! generic fallback dialog (stateless service). Resolution is total: any pair
//! without a dedicated page, including unknown sections and items, resolves to
//! [`SettingsAction::OpenDialog`].

use crate::routing::RouteTable;
use crate::types::{Destination, SettingsAction};

/// Settings route resolver (stateless)
#[derive(Debug, Clone, Copy)]
pub struct SettingsResolver<'a> {
    routes: &'a RouteTable,
}

impl SettingsResolver<'static> {
    /// Resolver over the built-in route table
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(RouteTable::builtin())
    }
}

impl Default for SettingsResolver<'static> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> SettingsResolver<'a> {
    #[must_use]
    pub fn new(routes: &'a RouteTable) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &'a RouteTable {
        self.routes
    }

    /// Resolve a `(section_id, item_title)` pair to an action
    pub fn resolve(&self, section_id: &str, item_title: &str) -> SettingsAction {
        let action = match self.routes.destination(section_id, item_title) {
            Destination::Page(path) => SettingsAction::navigate(path),
            Destination::NoDedicatedPage => SettingsAction::open_dialog(section_id, item_title),
        };
        log::debug!("Resolved ({section_id}, {item_title}) -> {action:?}");
        action
    }
}

/// Resolve against the built-in route table
pub fn resolve(section_id: &str, item_title: &str) -> SettingsAction {
    SettingsResolver::builtin().resolve(section_id, item_title)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::RouteEntry;

    #[test]
    fn security_user_roles_navigates() {
        assert_eq!(
            resolve("security", "User Roles"),
            SettingsAction::navigate("/settings/user-roles")
        );
    }

    #[test]
    fn general_hotel_information_navigates() {
        assert_eq!(
            resolve("general", "Hotel Information"),
            SettingsAction::navigate("/settings/general")
        );
    }

    #[test]
    fn unknown_item_opens_dialog() {
        assert_eq!(
            resolve("booking", "Unknown Item"),
            SettingsAction::open_dialog("booking", "Unknown Item")
        );
    }

    #[test]
    fn unknown_section_opens_dialog() {
        assert_eq!(
            resolve("spa", "Treatments"),
            SettingsAction::open_dialog("spa", "Treatments")
        );
    }

    #[test]
    fn explicit_no_page_entry_opens_dialog() {
        assert_eq!(
            resolve("rooms", "Housekeeping"),
            SettingsAction::open_dialog("rooms", "Housekeeping")
        );
    }

    #[test]
    fn empty_input_opens_dialog() {
        assert_eq!(resolve("", ""), SettingsAction::open_dialog("", ""));
    }

    #[test]
    fn custom_table_is_used() {
        let routes = RouteTable::from_entries(&[RouteEntry::page(
            "booking",
            "Unknown Item",
            "/settings/unknown",
        )])
        .unwrap();
        let resolver = SettingsResolver::new(&routes);

        assert_eq!(
            resolver.resolve("booking", "Unknown Item"),
            SettingsAction::navigate("/settings/unknown")
        );
        assert_eq!(
            resolver.resolve("security", "User Roles"),
            SettingsAction::open_dialog("security", "User Roles")
        );
    }
}
