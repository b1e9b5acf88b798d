//! Unified error type definition
//!
//! Resolution itself never fails. Every variant here describes a defect in
//! the static settings configuration (catalog or route table).

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// Two sections share the same id
    #[error("Duplicate section id: {0}")]
    DuplicateSection(String),

    /// Two items inside one section share the same title
    #[error("Duplicate item '{item_title}' in section '{section_id}'")]
    DuplicateItem {
        section_id: String,
        item_title: String,
    },

    /// Two route entries share the same (section id, item title) key
    #[error("Duplicate route for ({section_id}, {item_title})")]
    DuplicateRoute {
        section_id: String,
        item_title: String,
    },

    /// Route entry whose key does not match any catalog item
    #[error("Route ({section_id}, {item_title}) does not match any catalog item")]
    OrphanRoute {
        section_id: String,
        item_title: String,
    },

    /// Route path is not an absolute path
    #[error("Invalid route path '{path}' for ({section_id}, {item_title})")]
    InvalidRoutePath {
        section_id: String,
        item_title: String,
        path: String,
    },
}

impl CoreError {
    /// Short machine-readable code, matching the serialized `code` tag.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::DuplicateSection(_) => "DuplicateSection",
            Self::DuplicateItem { .. } => "DuplicateItem",
            Self::DuplicateRoute { .. } => "DuplicateRoute",
            Self::OrphanRoute { .. } => "OrphanRoute",
            Self::InvalidRoutePath { .. } => "InvalidRoutePath",
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_key() {
        let err = CoreError::DuplicateRoute {
            section_id: "security".to_string(),
            item_title: "User Roles".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate route for (security, User Roles)"
        );
    }

    #[test]
    fn serialized_code_matches_code() {
        let err = CoreError::DuplicateSection("general".to_string());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], err.code());
        assert_eq!(json["details"], "general");
    }
}
