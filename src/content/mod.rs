//! Static page content.
//!
//! Everything the showroom displays is immutable configuration data defined
//! at compile time: the section registry, the service catalog, and the copy
//! blocks for the hero, about, contact, and footer areas. The UI treats all
//! of it as read-only input.

pub mod catalog;
pub mod copy;
pub mod sections;

pub use catalog::{ServiceCatalog, ServiceRecord, SpecEntry};
pub use sections::{Section, SectionRegistry};
