//! # Unit Types
//!
//! Type-safe wrappers and converters for the unit systems riders actually
//! use. These provide compile-time safety against unit confusion while
//! remaining lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - The calculator uses a small, fixed set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Canonical Units
//!
//! The calculation core operates in one canonical system regardless of the
//! caller's display preference:
//! - Mass: kilograms (kg)
//! - Length: millimeters (mm)
//!
//! Spring rates are expressed in lbs/in because that is the manufacturing
//! convention for coil shock springs.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::units::{Kilograms, Pounds, Millimeters, Inches};
//!
//! let rider = Pounds(165.0);
//! let rider_kg: Kilograms = rider.into();
//! assert!((rider_kg.0 - 74.84268).abs() < 1e-9);
//!
//! let stroke = Millimeters(63.5);
//! let stroke_in: Inches = stroke.into();
//! assert!((stroke_in.0 - 2.5).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::errors::{CalcError, CalcResult};

// ============================================================================
// Conversion Constants
// ============================================================================

/// 1 lb = 0.453592 kg
pub const LB_TO_KG: f64 = 0.453592;

/// 1 kg = 2.20462 lb (manufacturing-convention constant, not 1/LB_TO_KG)
pub const KG_TO_LB: f64 = 2.20462;

/// 1 stone = 6.35029 kg
pub const STONE_TO_KG: f64 = 6.35029;

/// 1 in = 25.4 mm
pub const IN_TO_MM: f64 = 25.4;

/// 1 mm = 1/25.4 in
pub const MM_TO_IN: f64 = 1.0 / 25.4;

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 * LB_TO_KG)
    }
}

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 / LB_TO_KG)
    }
}

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in inches
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl From<Inches> for Millimeters {
    fn from(inches: Inches) -> Self {
        Millimeters(inches.0 * IN_TO_MM)
    }
}

impl From<Millimeters> for Inches {
    fn from(mm: Millimeters) -> Self {
        Inches(mm.0 / IN_TO_MM)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Kilograms);
impl_arithmetic!(Pounds);
impl_arithmetic!(Millimeters);
impl_arithmetic!(Inches);

// ============================================================================
// Input-Side Converters
// ============================================================================

/// Mass units accepted from the form layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    /// Kilograms
    Kilograms,
    /// Pounds
    Pounds,
    /// Stone (UK convention; fractional part carries the remaining pounds
    /// via [`stone_and_pounds_to_kg`])
    Stone,
}

/// Length units accepted from the form layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnit {
    /// Millimeters
    Millimeters,
    /// Inches
    Inches,
}

/// Convert a user-entered mass to canonical kilograms.
///
/// Rejects negative values; zero is allowed (an empty gear field is valid).
pub fn mass_to_kg(value: f64, unit: MassUnit) -> CalcResult<Kilograms> {
    if value < 0.0 {
        return Err(CalcError::invalid_input(
            "mass",
            value.to_string(),
            "Mass cannot be negative",
        ));
    }
    let kg = match unit {
        MassUnit::Kilograms => value,
        MassUnit::Pounds => value * LB_TO_KG,
        MassUnit::Stone => value * STONE_TO_KG,
    };
    Ok(Kilograms(kg))
}

/// Convert a stone-and-pounds pair (the usual UK rider-weight entry) to
/// canonical kilograms.
pub fn stone_and_pounds_to_kg(stone: f64, pounds: f64) -> CalcResult<Kilograms> {
    if stone < 0.0 || pounds < 0.0 {
        return Err(CalcError::invalid_input(
            "mass",
            format!("{stone} st {pounds} lb"),
            "Mass cannot be negative",
        ));
    }
    Ok(Kilograms(stone * STONE_TO_KG + pounds * LB_TO_KG))
}

/// Convert a user-entered length to canonical millimeters.
pub fn length_to_mm(value: f64, unit: LengthUnit) -> CalcResult<Millimeters> {
    if value < 0.0 {
        return Err(CalcError::invalid_input(
            "length",
            value.to_string(),
            "Length cannot be negative",
        ));
    }
    let mm = match unit {
        LengthUnit::Millimeters => value,
        LengthUnit::Inches => value * IN_TO_MM,
    };
    Ok(Millimeters(mm))
}
