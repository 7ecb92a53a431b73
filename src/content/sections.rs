//! Page sections and the section registry.

/// One scrollable region of the page, addressed by a stable anchor id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Stable anchor identifier used for in-page navigation
    pub id: &'static str,
    /// Label shown in the navigation bar
    pub display_name: &'static str,
}

/// Ordered list of the page's sections.
///
/// Identifiers are unique; every anchor the navigation layer references must
/// resolve through this registry.
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    /// Builds the registry with the page's four sections in display order.
    #[must_use]
    pub fn load() -> Self {
        Self {
            sections: vec![
                Section {
                    id: "home",
                    display_name: "HOME",
                },
                Section {
                    id: "about",
                    display_name: "ABOUT",
                },
                Section {
                    id: "services",
                    display_name: "SERVICES",
                },
                Section {
                    id: "contact",
                    display_name: "CONTACT",
                },
            ],
        }
    }

    /// Returns the sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Looks up a section by its anchor id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Returns true if the anchor id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::load()
    }
}
