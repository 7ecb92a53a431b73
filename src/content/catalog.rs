//! The service catalog: the vehicle collections shown in the gallery.

/// One entry in a record's technical-specification grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecEntry {
    /// Small glyph rendered before the label
    pub icon: &'static str,
    pub label: &'static str,
    pub value: &'static str,
}

/// One vehicle offering, shown as a gallery card and in the detail modal.
///
/// Records are defined at startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRecord {
    /// Unique catalog id
    pub id: u32,
    pub title: &'static str,
    pub short_description: &'static str,
    pub full_description: &'static str,
    pub price: &'static str,
    pub badge: &'static str,
    /// Large glyph shown on the gallery card
    pub icon_glyph: &'static str,
    /// Ordered list of headline features
    pub features: Vec<&'static str>,
    /// Ordered spec grid entries
    pub specs: Vec<SpecEntry>,
    /// Reference to the card's background image (informational only in a
    /// terminal; kept so a future graphical surface can resolve it)
    pub background_image_ref: &'static str,
}

/// The immutable, ordered collection of service records.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    records: Vec<ServiceRecord>,
}

impl ServiceCatalog {
    /// Builds the catalog with the showroom's three collections.
    #[must_use]
    pub fn load() -> Self {
        Self {
            records: vec![
                ServiceRecord {
                    id: 1,
                    title: "Hypercar Collection",
                    short_description: "Own the pinnacle of automotive engineering with our exclusive hypercar portfolio.",
                    full_description: "Our hypercar collection represents the absolute zenith of automotive achievement. Each masterpiece combines Formula 1 technology with road-going practicality, featuring carbon fiber monocoques, hybrid powertrains producing 1000+ HP, and active aerodynamics. Limited to production runs of less than 500 units worldwide, these are investments as much as they are vehicles.",
                    price: "From $2,500,000",
                    badge: "Limited Edition",
                    icon_glyph: "🚀",
                    features: vec![
                        "Carbon Fiber Monocoque",
                        "Hybrid Powertrain",
                        "Active Aerodynamics",
                        "F1-Derived Technology",
                    ],
                    specs: vec![
                        SpecEntry { icon: "◎", label: "0-60 MPH", value: "2.3s" },
                        SpecEntry { icon: "◷", label: "Top Speed", value: "250+ MPH" },
                        SpecEntry { icon: "▣", label: "Power", value: "1000+ HP" },
                        SpecEntry { icon: "❧", label: "Carbon Footprint", value: "Neutral" },
                    ],
                    background_image_ref: "unsplash/photo-1492144534655-ae79c964c9d7",
                },
                ServiceRecord {
                    id: 2,
                    title: "Track Weapons",
                    short_description: "Circuit-bred machines designed for maximum performance and driver engagement.",
                    full_description: "These are not merely sports cars - they are street-legal race cars engineered to dominate track days while remaining compliant for road use. Featuring sequential transmissions, motorsport-derived suspension, and aerodynamic packages generating over 1000kg of downforce. Each vehicle comes with an exclusive driver training program at world-famous circuits.",
                    price: "From $350,000",
                    badge: "Track Ready",
                    icon_glyph: "🏁",
                    features: vec![
                        "Sequential Transmission",
                        "Race-Derived Suspension",
                        "1000kg+ Downforce",
                        "Driver Training Program",
                    ],
                    specs: vec![
                        SpecEntry { icon: "◎", label: "0-60 MPH", value: "2.8s" },
                        SpecEntry { icon: "◷", label: "Nürburgring Time", value: "Under 7:00" },
                        SpecEntry { icon: "▣", label: "Power-to-Weight", value: "500HP/Tonne" },
                        SpecEntry { icon: "❧", label: "Lap Consistency", value: "99.9%" },
                    ],
                    background_image_ref: "unsplash/photo-1580654712603-eb43273aff33",
                },
                ServiceRecord {
                    id: 3,
                    title: "EV Hyper GT",
                    short_description: "The future of grand touring - silent, sustainable, and staggeringly fast.",
                    full_description: "Our Electric Hyper GT collection redefines what's possible with electrification. Combining four-figure torque outputs with 400+ mile ranges, these vehicles feature revolutionary battery technology that charges in under 15 minutes. The interiors showcase sustainable luxury with vegan leather alternatives and reclaimed materials, without compromising on the 200+ MPH performance expected from our brand.",
                    price: "From $450,000",
                    badge: "Carbon Neutral",
                    icon_glyph: "⚡",
                    features: vec![
                        "15min Charging",
                        "2000+ Nm Torque",
                        "Sustainable Materials",
                        "AI Copilot",
                    ],
                    specs: vec![
                        SpecEntry { icon: "◎", label: "0-60 MPH", value: "1.9s" },
                        SpecEntry { icon: "◷", label: "Range", value: "450 Miles" },
                        SpecEntry { icon: "▣", label: "Torque", value: "2000+ Nm" },
                        SpecEntry { icon: "❧", label: "Carbon Offset", value: "100%" },
                    ],
                    background_image_ref: "unsplash/photo-1485291571150-772bcfc10da5",
                },
            ],
        }
    }

    /// Returns the records in gallery order.
    #[must_use]
    pub fn records(&self) -> &[ServiceRecord] {
        &self.records
    }

    /// Returns the record at a gallery position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ServiceRecord> {
        self.records.get(index)
    }

    /// Looks up a record by catalog id.
    #[must_use]
    pub fn by_id(&self, id: u32) -> Option<&ServiceRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_three_records() {
        let catalog = ServiceCatalog::load();
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_catalog_ids_unique() {
        let catalog = ServiceCatalog::load();
        let mut ids: Vec<_> = catalog.records().iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_lookup_by_id() {
        let catalog = ServiceCatalog::load();
        assert_eq!(catalog.by_id(2).unwrap().title, "Track Weapons");
        assert!(catalog.by_id(99).is_none());
    }

    #[test]
    fn test_records_are_complete() {
        let catalog = ServiceCatalog::load();
        for record in catalog.records() {
            assert!(!record.title.is_empty());
            assert!(!record.short_description.is_empty());
            assert!(!record.full_description.is_empty());
            assert!(record.price.starts_with("From $"));
            assert!(!record.badge.is_empty());
            assert_eq!(record.specs.len(), 4);
            assert_eq!(record.features.len(), 4);
        }
    }
}
