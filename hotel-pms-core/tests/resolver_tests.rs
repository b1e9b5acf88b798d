#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for settings route resolution against the built-in
//! catalog and route table.

use hotel_pms_core::{
    resolve, Destination, DialogState, RouteTable, SettingsAction, SettingsCatalog,
    SettingsResolver,
};
use proptest::prelude::*;

// ===== Table coverage =====

#[test]
fn every_routed_entry_navigates_to_its_path() {
    let table = RouteTable::builtin();
    for entry in table.entries() {
        let action = resolve(entry.section_id, entry.item_title);
        match entry.destination {
            Destination::Page(path) => assert_eq!(action, SettingsAction::navigate(path)),
            Destination::NoDedicatedPage => assert_eq!(
                action,
                SettingsAction::open_dialog(entry.section_id, entry.item_title)
            ),
        }
    }
}

#[test]
fn every_catalog_item_resolves() {
    let catalog = SettingsCatalog::builtin();
    let table = RouteTable::builtin();

    for section in catalog.sections() {
        for item in &section.items {
            let action = resolve(&section.id, &item.title);
            match table.lookup(&section.id, &item.title).and_then(|e| e.path()) {
                Some(path) => assert_eq!(action, SettingsAction::navigate(path)),
                None => assert_eq!(
                    action,
                    SettingsAction::open_dialog(section.id.as_str(), item.title.as_str())
                ),
            }
        }
    }
}

#[test]
fn builtin_configuration_has_no_defects() {
    let defects = SettingsCatalog::builtin().audit(RouteTable::builtin());
    assert!(defects.is_empty(), "defects: {defects:?}");
}

#[test]
fn some_catalog_items_use_the_fallback_dialog() {
    let catalog = SettingsCatalog::builtin();
    let fallback: Vec<(&str, &str)> = catalog
        .sections()
        .iter()
        .flat_map(|s| s.items.iter().map(move |i| (s.id.as_str(), i.title.as_str())))
        .filter(|(s, i)| !resolve(s, i).is_navigate())
        .collect();

    assert!(fallback.contains(&("rooms", "Housekeeping")));
    assert!(fallback.contains(&("security", "Two-Factor Authentication")));
}

// ===== Scenarios =====

#[test]
fn scenario_resolve_then_dialog_round_trip() {
    let resolver = SettingsResolver::builtin();
    let mut dialog = DialogState::default();

    match resolver.resolve("rooms", "Housekeeping") {
        SettingsAction::OpenDialog {
            section_id,
            item_title,
        } => dialog.open(section_id, item_title),
        other => panic!("expected dialog, got {other:?}"),
    }
    assert_eq!(dialog.selection(), Some(("rooms", "Housekeeping")));

    dialog.close();
    assert!(!dialog.is_open());
}

#[test]
fn navigation_leaves_dialog_closed() {
    let resolver = SettingsResolver::builtin();
    let mut dialog = DialogState::default();

    if let SettingsAction::OpenDialog {
        section_id,
        item_title,
    } = resolver.resolve("security", "User Roles")
    {
        dialog.open(section_id, item_title);
    }
    assert_eq!(dialog, DialogState::Closed);
}

// ===== Properties =====

proptest! {
    #[test]
    fn unmapped_pairs_open_dialog(section in "[a-z]{0,12}", item in "\\PC{0,24}") {
        prop_assume!(RouteTable::builtin().lookup(&section, &item).is_none());
        prop_assert_eq!(
            resolve(&section, &item),
            SettingsAction::open_dialog(section.as_str(), item.as_str())
        );
    }

    #[test]
    fn resolve_is_idempotent(section in "\\PC{0,12}", item in "\\PC{0,24}") {
        prop_assert_eq!(resolve(&section, &item), resolve(&section, &item));
    }

    #[test]
    fn known_sections_with_random_items_never_panic(
        index in 0usize..6,
        item in "\\PC{0,24}",
    ) {
        let catalog = SettingsCatalog::builtin();
        let section = &catalog.sections()[index];
        let action = resolve(&section.id, &item);
        if let Some(path) = action.path() {
            prop_assert!(path.starts_with("/settings/"));
        }
    }
}
