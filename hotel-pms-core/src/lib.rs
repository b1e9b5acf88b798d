//! Hotel PMS Core Library
//!
//! Provides the settings navigation logic shared by the Hotel PMS front-ends:
//! - Settings catalog (sections and their items)
//! - Route table mapping `(section id, item title)` to a dedicated settings page
//! - Settings route resolver (total lookup with a fallback dialog)
//! - Dialog state machine for the fallback dialog
//!
//! The crate is synchronous and platform-independent. Front-ends own the
//! router and dialog rendering; this crate only decides which one to use.

pub mod catalog;
pub mod dialog;
pub mod error;
pub mod routing;
pub mod services;
pub mod types;

// Re-export common types
pub use catalog::SettingsCatalog;
pub use dialog::DialogState;
pub use error::{CoreError, CoreResult};
pub use routing::RouteTable;
pub use services::{resolve, SettingsResolver};
pub use types::{Destination, RouteEntry, SettingsAction, SettingsItem, SettingsSection};
