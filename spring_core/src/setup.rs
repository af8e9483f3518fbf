//! # Setup Data Structures
//!
//! Immutable input records for a single calculation. The form layer
//! constructs a fresh [`SpringSetup`] on every input change and hands it to
//! [`calculate`](crate::calculations::spring_rate::calculate); "reset" means
//! constructing a fresh default setup, not mutating ambient state.
//!
//! All masses are canonical kilograms and all lengths canonical
//! millimeters — unit handling lives entirely in
//! [`units`](crate::units), never here.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::setup::SpringSetup;
//! use spring_core::categories::BikeCategory;
//!
//! let mut setup = SpringSetup::for_category(BikeCategory::Enduro);
//! setup.rider.mass_kg = 68.0;
//! assert!(setup.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use crate::categories::{BikeCategory, SkillLevel};
use crate::errors::{CalcError, CalcResult};

/// Rider inputs.
///
/// Validation bounds are plausibility checks for form feedback, not
/// physical constraints of the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiderProfile {
    /// Skill level (shifts the suggested rear bias)
    pub skill: SkillLevel,

    /// Rider mass without gear (kg)
    pub mass_kg: f64,

    /// Gear mass: pack, bottle, tools, protection (kg)
    pub gear_mass_kg: f64,
}

impl RiderProfile {
    /// Validate rider inputs against plausible human ranges.
    pub fn validate(&self) -> CalcResult<()> {
        if !(30.0..=150.0).contains(&self.mass_kg) {
            return Err(CalcError::invalid_input(
                "rider.mass_kg",
                self.mass_kg.to_string(),
                "Rider mass must be between 30 and 150 kg",
            ));
        }
        if !(0.0..=25.0).contains(&self.gear_mass_kg) {
            return Err(CalcError::invalid_input(
                "rider.gear_mass_kg",
                self.gear_mass_kg.to_string(),
                "Gear mass must be between 0 and 25 kg",
            ));
        }
        Ok(())
    }
}

/// Bike chassis inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChassisProfile {
    /// Bike category
    pub category: BikeCategory,

    /// Complete bike mass (kg)
    pub bike_mass_kg: f64,

    /// Unsprung mass: rear wheel, tire, and the moving share of the
    /// swingarm (kg)
    pub unsprung_mass_kg: f64,

    /// E-bike flag (affects default bike mass pre-population)
    pub is_ebike: bool,

    /// Rear weight bias: fraction of sprung mass carried by the rear wheel
    /// in the attack position (%)
    pub rear_bias_pct: f64,
}

impl ChassisProfile {
    /// Validate chassis inputs.
    pub fn validate(&self) -> CalcResult<()> {
        if !(8.0..=40.0).contains(&self.bike_mass_kg) {
            return Err(CalcError::invalid_input(
                "chassis.bike_mass_kg",
                self.bike_mass_kg.to_string(),
                "Bike mass must be between 8 and 40 kg",
            ));
        }
        if !(1.0..=8.0).contains(&self.unsprung_mass_kg) {
            return Err(CalcError::invalid_input(
                "chassis.unsprung_mass_kg",
                self.unsprung_mass_kg.to_string(),
                "Unsprung mass must be between 1 and 8 kg",
            ));
        }
        if !(50.0..=85.0).contains(&self.rear_bias_pct) {
            return Err(CalcError::invalid_input(
                "chassis.rear_bias_pct",
                self.rear_bias_pct.to_string(),
                "Rear bias must be between 50 and 85 %",
            ));
        }
        Ok(())
    }
}

/// Suspension kinematics inputs.
///
/// In advanced mode the user (or a verified database record) supplies the
/// starting leverage ratio and progression; otherwise the leverage ratio is
/// the plain travel:stroke quotient and progression is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KinematicsProfile {
    /// Rear wheel travel (mm)
    pub travel_mm: f64,

    /// Shock stroke (mm)
    pub stroke_mm: f64,

    /// Leverage ratio at top-out (travel:stroke)
    pub lr_start: f64,

    /// Progression: percentage drop in leverage ratio from top-out to
    /// bottom-out
    pub progression_pct: f64,

    /// Advanced mode: use lr_start/progression instead of the plain
    /// travel:stroke quotient
    pub advanced_mode: bool,
}

impl KinematicsProfile {
    /// Leverage ratio at bottom-out
    pub fn lr_end(&self) -> f64 {
        self.lr_start * (1.0 - self.progression_pct / 100.0)
    }

    /// Effective leverage ratio at a given target sag fraction.
    ///
    /// Linearly interpolates the leverage ratio over the fraction of stroke
    /// actually used, approximating the load-weighted average for a roughly
    /// linear leverage curve. This is the documented heuristic the whole
    /// pipeline is calibrated around; do not extend it without a kinematics
    /// review.
    ///
    /// Outside advanced mode this is the plain travel:stroke quotient.
    /// Returns 0.0 for a non-positive stroke; the engine treats that as
    /// not computable.
    pub fn effective_lr(&self, target_sag_pct: f64) -> f64 {
        if self.stroke_mm <= 0.0 {
            return 0.0;
        }
        if self.advanced_mode {
            self.lr_start - (self.lr_start - self.lr_end()) * (target_sag_pct / 100.0)
        } else {
            self.travel_mm / self.stroke_mm
        }
    }

    /// Validate kinematics inputs.
    pub fn validate(&self) -> CalcResult<()> {
        if !(80.0..=250.0).contains(&self.travel_mm) {
            return Err(CalcError::invalid_input(
                "kinematics.travel_mm",
                self.travel_mm.to_string(),
                "Travel must be between 80 and 250 mm",
            ));
        }
        if !(30.0..=90.0).contains(&self.stroke_mm) {
            return Err(CalcError::invalid_input(
                "kinematics.stroke_mm",
                self.stroke_mm.to_string(),
                "Stroke must be between 30 and 90 mm",
            ));
        }
        if self.advanced_mode {
            if !(1.8..=3.5).contains(&self.lr_start) {
                return Err(CalcError::invalid_input(
                    "kinematics.lr_start",
                    self.lr_start.to_string(),
                    "Starting leverage ratio must be between 1.8 and 3.5",
                ));
            }
            if !(0.0..=40.0).contains(&self.progression_pct) {
                return Err(CalcError::invalid_input(
                    "kinematics.progression_pct",
                    self.progression_pct.to_string(),
                    "Progression must be between 0 and 40 %",
                ));
            }
        }
        Ok(())
    }
}

/// Coil spring construction type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpringType {
    /// Standard steel linear spring
    #[serde(rename = "Standard Linear")]
    StandardLinear,
    /// Lightweight (thin-wire or titanium) linear spring
    #[serde(rename = "Lightweight Linear")]
    LightweightLinear,
    /// Sprindex adjustable-rate spring
    Sprindex,
    /// Progressive-wound spring
    #[serde(rename = "Progressive Spring")]
    Progressive,
}

impl SpringType {
    /// All spring types for UI selection
    pub const ALL: [SpringType; 4] = [
        SpringType::StandardLinear,
        SpringType::LightweightLinear,
        SpringType::Sprindex,
        SpringType::Progressive,
    ];

    /// Baseline-rate correction factor. A progressive spring's built-in
    /// ramp-up lowers the linear baseline it replaces.
    pub fn correction_factor(&self) -> f64 {
        match self {
            SpringType::Progressive => 0.97,
            _ => 1.0,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            SpringType::StandardLinear => "Standard Linear",
            SpringType::LightweightLinear => "Lightweight Linear",
            SpringType::Sprindex => "Sprindex",
            SpringType::Progressive => "Progressive Spring",
        }
    }
}

impl std::fmt::Display for SpringType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Root input container for one calculation.
///
/// Constructed fresh from form values on every change; carries no identity
/// beyond a single invocation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpringSetup {
    /// Rider inputs
    pub rider: RiderProfile,
    /// Chassis inputs
    pub chassis: ChassisProfile,
    /// Kinematics inputs
    pub kinematics: KinematicsProfile,
    /// Target sag (%)
    pub target_sag_pct: f64,
    /// Spring construction type
    pub spring_type: SpringType,
}

impl SpringSetup {
    /// Build a fresh setup pre-populated from category defaults. This is
    /// the "reset form" operation.
    pub fn for_category(category: BikeCategory) -> Self {
        let d = category.defaults();
        SpringSetup {
            rider: RiderProfile {
                skill: SkillLevel::Intermediate,
                mass_kg: 75.0,
                gear_mass_kg: 4.0,
            },
            chassis: ChassisProfile {
                category,
                bike_mass_kg: d.bike_mass_kg,
                unsprung_mass_kg: 3.5,
                is_ebike: false,
                rear_bias_pct: d.bias_pct,
            },
            kinematics: KinematicsProfile {
                travel_mm: d.travel_mm,
                stroke_mm: d.stroke_mm,
                lr_start: d.lr_start,
                progression_pct: d.progression_pct,
                advanced_mode: false,
            },
            target_sag_pct: d.base_sag_pct,
            spring_type: SpringType::StandardLinear,
        }
    }

    /// Validate the complete setup.
    pub fn validate(&self) -> CalcResult<()> {
        self.rider.validate()?;
        self.chassis.validate()?;
        self.kinematics.validate()?;
        if !(20.0..=40.0).contains(&self.target_sag_pct) {
            return Err(CalcError::invalid_input(
                "target_sag_pct",
                self.target_sag_pct.to_string(),
                "Target sag must be between 20 and 40 %",
            ));
        }
        Ok(())
    }
}

impl Default for SpringSetup {
    fn default() -> Self {
        SpringSetup::for_category(BikeCategory::Trail)
    }
}
