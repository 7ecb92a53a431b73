//! Copy blocks for the hero, about, contact, and footer areas.

/// Hero banner copy.
pub struct HeroCopy {
    pub tagline: &'static str,
    pub headline_top: &'static str,
    pub headline_accent: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

/// Returns the hero banner copy.
#[must_use]
pub fn hero() -> HeroCopy {
    HeroCopy {
        tagline: "LUXURY REDEFINED",
        headline_top: "ENGINEERED FOR",
        headline_accent: "THE EXTRAORDINARY",
        subtitle: "Exclusive supercars from Ferrari, Lamborghini, and BMW. \
                   Limited editions with unmatched performance.",
        cta: "EXPLORE COLLECTION",
    }
}

/// One statistic tile in the about section.
pub struct StatTile {
    pub value: &'static str,
    pub label: &'static str,
    /// Highlighted tiles get the accent treatment
    pub highlight: bool,
}

/// About section heading, split for two-tone styling.
pub const ABOUT_HEADING: (&str, &str, &str) = ("Crafting ", "Dream", " Machines");

/// About section subtitle.
pub const ABOUT_SUBTITLE: &str = "Automotive Excellence";

/// Returns the about section body paragraphs.
#[must_use]
pub fn about_paragraphs() -> [&'static str; 3] {
    [
        "Since 1998, EliteMotors has redefined luxury automotive experiences, \
         curating the world's most exclusive supercars for discerning \
         collectors and enthusiasts.",
        "Our showrooms in Monaco, Dubai, and Beverly Hills showcase rare \
         Ferraris, limited-edition Lamborghinis, and bespoke BMW M models \
         unavailable anywhere else.",
        "We don't just sell cars - we deliver automotive masterpieces with \
         white-glove concierge service.",
    ]
}

/// Returns the about section statistic tiles.
#[must_use]
pub fn about_stats() -> [StatTile; 4] {
    [
        StatTile {
            value: "25+",
            label: "Years",
            highlight: true,
        },
        StatTile {
            value: "1.2s",
            label: "0-60mph",
            highlight: false,
        },
        StatTile {
            value: "500+",
            label: "Supercars",
            highlight: false,
        },
        StatTile {
            value: "VIP",
            label: "Clients",
            highlight: true,
        },
    ]
}

/// Services section heading pieces.
pub const SERVICES_KICKER: &str = "Exclusive Portfolio";
pub const SERVICES_HEADING: (&str, &str) = ("Performance", " Perfected");
pub const SERVICES_SUBTITLE: &str = "Each vehicle in our collection undergoes a 500-point \
     certification process to ensure it meets our exacting standards of excellence.";

/// One way of reaching the dealership.
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
}

/// Contact section heading and subtitle.
pub const CONTACT_HEADING: &str = "Get In Touch";
pub const CONTACT_SUBTITLE: &str = "Ready to find your dream car? Contact our expert team for \
     personalized assistance and exclusive offers.";

/// Returns the dealership's contact channels.
#[must_use]
pub fn contact_channels() -> [ContactChannel; 3] {
    [
        ContactChannel {
            label: "Phone",
            value: "+1 (555) 123-4567",
        },
        ContactChannel {
            label: "Email",
            value: "info@elitemotors.com",
        },
        ContactChannel {
            label: "Address",
            value: "123 Luxury Drive, Auto City, AC 12345",
        },
    ]
}

/// Returns the "Why Choose EliteMotors?" feature list.
#[must_use]
pub fn why_choose() -> [&'static str; 4] {
    [
        "Exclusive luxury vehicle collection",
        "Expert consultation and service",
        "Competitive financing options",
        "Comprehensive warranty coverage",
    ]
}

/// Confirmation shown after a successful (simulated) inquiry delivery.
pub const DELIVERY_THANKS: &str = "Thank you for your message! We'll get back to you soon.";

/// Footer brand line.
pub const FOOTER_LINE: &str = "EliteMotors - Automotive excellence since 1998";
