//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Application name
pub const APP_NAME: &str = "EcoCycle TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// One-tap quantity descriptions offered on the wizard details step.
pub const QUICK_QUANTITY_TAGS: [&str; 6] = [
    "approx. 1-3 kg",
    "approx. 5 kg",
    "1-2 bags",
    "3-5 bags",
    "small amount",
    "large amount",
];

/// Maximum length of the wizard remark field.
pub const REMARK_MAX_LEN: usize = 200;

/// Placeholder photo attached to orders created from the wizard.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/200/200";
