//! Route table entry types

/// Where a settings item leads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    /// Dedicated settings page at this path
    Page(&'static str),
    /// No dedicated page, the fallback dialog is used
    NoDedicatedPage,
}

/// One static route table entry, keyed by `(section_id, item_title)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteEntry {
    pub section_id: &'static str,
    pub item_title: &'static str,
    pub destination: Destination,
}

impl RouteEntry {
    /// Entry leading to a dedicated page
    #[must_use]
    pub const fn page(section_id: &'static str, item_title: &'static str, path: &'static str) -> Self {
        Self {
            section_id,
            item_title,
            destination: Destination::Page(path),
        }
    }

    /// Entry explicitly marked as having no dedicated page
    #[must_use]
    pub const fn dialog(section_id: &'static str, item_title: &'static str) -> Self {
        Self {
            section_id,
            item_title,
            destination: Destination::NoDedicatedPage,
        }
    }

    /// Path of the dedicated page, if any
    #[must_use]
    pub fn path(&self) -> Option<&'static str> {
        match self.destination {
            Destination::Page(path) => Some(path),
            Destination::NoDedicatedPage => None,
        }
    }
}
