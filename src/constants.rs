//! Application-wide constants.

/// Human-readable application name.
pub const APP_NAME: &str = "EliteAuto";

/// Binary name as invoked from the shell.
pub const APP_BINARY_NAME: &str = "eliteauto";

/// Brand mark shown in the navigation bar, split for two-tone styling.
pub const BRAND_PRIMARY: &str = "ELITE";
pub const BRAND_ACCENT: &str = "AUTO";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "EliteAuto";
