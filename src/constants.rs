// ABOUTME: Fixed catalog name sets, classification keywords, and nutrition thresholds
// ABOUTME: Central place for planning-domain constants shared by selector and aggregator
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Constants Module
//!
//! Planning-domain constants: the fixed name sets that constrain weekly
//! selection, the keyword markers used for vegetarian classification, and the
//! per-serving nutrition predicate thresholds.

/// Selection constraints over the recipe catalog
pub mod planning {
    /// Number of days in every weekly menu (Monday through Friday)
    pub const WEEKLY_MENU_DAYS: usize = 5;

    /// Main dishes that must never appear alone and are always paired
    /// with a side dish (served "over" a base).
    pub const SIDE_REQUIRED_NAMES: &[&str] = &[
        "Carne Asada",
        "Bistec a la Plancha",
        "Pescado a la Plancha",
        "Pollo Rostizado",
    ];

    /// Names permanently excluded from planning (building blocks only,
    /// never a standalone day).
    pub const EXCLUDED_NAMES: &[&str] = &["Salsa Roja Base", "Salsa Verde Base"];
}

/// Ingredient classification keywords
pub mod classification {
    /// Meat/poultry/fish markers for vegetarian classification. Matched
    /// case-insensitively against merged ingredient lines; accented and
    /// accent-less spellings are both listed.
    pub const MEAT_KEYWORDS: &[&str] = &[
        "pollo",
        "carne",
        "res",
        "cerdo",
        "puerco",
        "bistec",
        "tocino",
        "jamon",
        "jamón",
        "chorizo",
        "pavo",
        "pescado",
        "atun",
        "atún",
        "camaron",
        "camarón",
        "mariscos",
        "salmon",
        "salmón",
    ];
}

/// Per-serving nutrition predicate thresholds
pub mod nutrition {
    /// Calories below this count as low-calorie
    pub const LOW_CALORIE_MAX: u32 = 300;

    /// Protein (grams) above this counts as high-protein
    pub const HIGH_PROTEIN_MIN: f64 = 20.0;

    /// Sodium (mg) below this counts as low-sodium
    pub const LOW_SODIUM_MAX: u32 = 140;
}

/// Service identification
pub mod service_names {
    /// Default service name for structured logging
    pub const MENU_PLANNER: &str = "menu-planner";
}
