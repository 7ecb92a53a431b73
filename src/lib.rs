//! EliteAuto Showroom Library
//!
//! This library provides core functionality for the EliteAuto showroom
//! application, including the static content catalog, the contact inquiry
//! delivery pipeline, and the terminal UI.

// Module declarations
pub mod config;
pub mod constants;
pub mod content;
pub mod inquiry;
pub mod tui;
