//! Service layer

mod settings_resolver_service;

pub use settings_resolver_service::{resolve, SettingsResolver};
