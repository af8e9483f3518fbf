//! # Bike Categories and Static Defaults
//!
//! The authoritative static configuration table for the calculator:
//! per-category defaults (travel, stroke, base sag, progression, leverage
//! ratio, bike mass, rear bias), gear coupling coefficients, and
//! skill-level bias modifiers.
//!
//! Defaults pre-populate a fresh [`SpringSetup`](crate::setup::SpringSetup)
//! and act as the fallback when no database record matches. They never
//! override user-entered values.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::categories::BikeCategory;
//!
//! let defaults = BikeCategory::Enduro.defaults();
//! assert_eq!(defaults.stroke_mm, 60.0);
//! assert_eq!(defaults.bias_pct, 67.0);
//! ```

use serde::{Deserialize, Serialize};

/// Extra default bike mass applied when the e-bike flag is set (motor,
/// battery, reinforced frame)
pub const EBIKE_WEIGHT_PENALTY_KG: f64 = 8.5;

/// Canonical metric shock stroke options (mm)
pub const COMMON_STROKES_MM: [f64; 9] = [45.0, 50.0, 55.0, 57.5, 60.0, 62.5, 65.0, 70.0, 75.0];

/// Bike category, ordered by rear wheel travel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BikeCategory {
    /// Downcountry (110–120 mm)
    Downcountry,
    /// Trail (120–140 mm)
    Trail,
    /// All-Mountain (140–150 mm)
    #[serde(rename = "All-Mountain")]
    AllMountain,
    /// Enduro (150–170 mm)
    Enduro,
    /// Long Travel Enduro (170–180 mm)
    #[serde(rename = "Long Travel Enduro")]
    LongTravelEnduro,
    /// Enduro, race focus (160–170 mm)
    #[serde(rename = "Enduro (Race focus)")]
    EnduroRace,
    /// Downhill (180–210 mm)
    #[serde(rename = "Downhill (DH)")]
    Downhill,
}

/// Per-category defaults used to pre-populate inputs and as the fallback
/// when no database record matches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryDefaults {
    /// Rear wheel travel (mm)
    pub travel_mm: f64,
    /// Shock stroke (mm)
    pub stroke_mm: f64,
    /// Base target sag (%)
    pub base_sag_pct: f64,
    /// Leverage ratio progression (%)
    pub progression_pct: f64,
    /// Starting leverage ratio (travel:stroke at top-out)
    pub lr_start: f64,
    /// Default bike mass (kg), before any e-bike penalty
    pub bike_mass_kg: f64,
    /// Default rear weight bias (%)
    pub bias_pct: f64,
    /// Travel bracket descriptor for display (e.g. "150–170 mm")
    pub travel_desc: &'static str,
}

impl BikeCategory {
    /// All categories for UI selection
    pub const ALL: [BikeCategory; 7] = [
        BikeCategory::Downcountry,
        BikeCategory::Trail,
        BikeCategory::AllMountain,
        BikeCategory::Enduro,
        BikeCategory::LongTravelEnduro,
        BikeCategory::EnduroRace,
        BikeCategory::Downhill,
    ];

    /// Get the static defaults for this category
    pub fn defaults(&self) -> CategoryDefaults {
        match self {
            BikeCategory::Downcountry => CategoryDefaults {
                travel_mm: 115.0,
                stroke_mm: 45.0,
                base_sag_pct: 28.0,
                progression_pct: 15.0,
                lr_start: 2.82,
                bike_mass_kg: 12.0,
                bias_pct: 60.0,
                travel_desc: "110–120 mm",
            },
            BikeCategory::Trail => CategoryDefaults {
                travel_mm: 130.0,
                stroke_mm: 50.0,
                base_sag_pct: 30.0,
                progression_pct: 19.0,
                lr_start: 2.90,
                bike_mass_kg: 13.5,
                bias_pct: 63.0,
                travel_desc: "120–140 mm",
            },
            BikeCategory::AllMountain => CategoryDefaults {
                travel_mm: 145.0,
                stroke_mm: 55.0,
                base_sag_pct: 31.0,
                progression_pct: 21.0,
                lr_start: 2.92,
                bike_mass_kg: 14.5,
                bias_pct: 65.0,
                travel_desc: "140–150 mm",
            },
            BikeCategory::Enduro => CategoryDefaults {
                travel_mm: 160.0,
                stroke_mm: 60.0,
                base_sag_pct: 33.0,
                progression_pct: 23.0,
                lr_start: 3.02,
                bike_mass_kg: 15.1,
                bias_pct: 67.0,
                travel_desc: "150–170 mm",
            },
            BikeCategory::LongTravelEnduro => CategoryDefaults {
                travel_mm: 175.0,
                stroke_mm: 65.0,
                base_sag_pct: 34.0,
                progression_pct: 27.0,
                lr_start: 3.16,
                bike_mass_kg: 16.5,
                bias_pct: 69.0,
                travel_desc: "170–180 mm",
            },
            BikeCategory::EnduroRace => CategoryDefaults {
                travel_mm: 165.0,
                stroke_mm: 62.5,
                base_sag_pct: 32.0,
                progression_pct: 26.0,
                lr_start: 3.13,
                bike_mass_kg: 15.8,
                bias_pct: 68.0,
                travel_desc: "160–170 mm",
            },
            BikeCategory::Downhill => CategoryDefaults {
                travel_mm: 200.0,
                stroke_mm: 72.5,
                base_sag_pct: 35.0,
                progression_pct: 28.0,
                lr_start: 3.28,
                bike_mass_kg: 17.5,
                bias_pct: 72.0,
                travel_desc: "180–210 mm",
            },
        }
    }

    /// Gear coupling coefficient: the fraction of gear mass effectively
    /// subjected to suspension motion. Gear carried on the rider (pack,
    /// bottle, tools) only partially follows the sprung mass; how much
    /// depends on riding position, which tracks category.
    pub fn coupling_coeff(&self) -> f64 {
        match self {
            BikeCategory::Downcountry => 0.80,
            BikeCategory::Trail => 0.75,
            BikeCategory::AllMountain => 0.70,
            BikeCategory::Enduro => 0.72,
            BikeCategory::LongTravelEnduro => 0.90,
            BikeCategory::EnduroRace => 0.78,
            BikeCategory::Downhill => 0.95,
        }
    }

    /// Default bike mass (kg), with the e-bike penalty applied when set
    pub fn default_bike_mass_kg(&self, is_ebike: bool) -> f64 {
        let base = self.defaults().bike_mass_kg;
        if is_ebike {
            base + EBIKE_WEIGHT_PENALTY_KG
        } else {
            base
        }
    }

    /// Infer a category from rear wheel travel, using the same brackets the
    /// database lookup uses for verified records.
    pub fn from_travel(travel_mm: f64) -> BikeCategory {
        if travel_mm < 125.0 {
            BikeCategory::Downcountry
        } else if travel_mm < 140.0 {
            BikeCategory::Trail
        } else if travel_mm < 155.0 {
            BikeCategory::AllMountain
        } else if travel_mm < 170.0 {
            BikeCategory::Enduro
        } else if travel_mm < 185.0 {
            BikeCategory::LongTravelEnduro
        } else {
            BikeCategory::Downhill
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            BikeCategory::Downcountry => "Downcountry",
            BikeCategory::Trail => "Trail",
            BikeCategory::AllMountain => "All-Mountain",
            BikeCategory::Enduro => "Enduro",
            BikeCategory::LongTravelEnduro => "Long Travel Enduro",
            BikeCategory::EnduroRace => "Enduro (Race focus)",
            BikeCategory::Downhill => "Downhill (DH)",
        }
    }
}

impl std::fmt::Display for BikeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Rider skill level. Skill shifts the suggested rear bias: newer riders
/// sit heavier over the rear wheel, racers weight the front harder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillLevel {
    /// Just starting
    #[serde(rename = "Just starting")]
    JustStarting,
    /// Beginner
    Beginner,
    /// Intermediate
    Intermediate,
    /// Advanced
    Advanced,
    /// Racer
    Racer,
}

impl SkillLevel {
    /// All skill levels for UI selection
    pub const ALL: [SkillLevel; 5] = [
        SkillLevel::JustStarting,
        SkillLevel::Beginner,
        SkillLevel::Intermediate,
        SkillLevel::Advanced,
        SkillLevel::Racer,
    ];

    /// Rear bias adjustment in percentage points
    pub fn bias_modifier_pct(&self) -> f64 {
        match self {
            SkillLevel::JustStarting => 4.0,
            SkillLevel::Beginner => 2.0,
            SkillLevel::Intermediate => 0.0,
            SkillLevel::Advanced => -1.0,
            SkillLevel::Racer => -2.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SkillLevel::JustStarting => "Just starting",
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Racer => "Racer",
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Suggested rear weight bias for a category/skill pairing: the category
/// default shifted by the skill modifier.
pub fn suggested_rear_bias_pct(category: BikeCategory, skill: SkillLevel) -> f64 {
    category.defaults().bias_pct + skill.bias_modifier_pct()
}
