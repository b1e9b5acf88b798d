//! Type definitions

mod action;
mod route;
mod section;

pub use action::SettingsAction;
pub use route::{Destination, RouteEntry};
pub use section::{SettingsItem, SettingsSection};
