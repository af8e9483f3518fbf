//! # spring_core - Coil Spring Rate Calculation Engine
//!
//! `spring_core` computes rear coil shock spring rate recommendations for
//! mountain bikes from rider, chassis, and suspension-kinematics inputs.
//! It is the pure computational core behind a form or API endpoint: no UI,
//! no persistence, no I/O beyond the optional CSV bike database.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions over immutable setup records
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Form-Friendly Errors**: Degenerate mid-edit inputs produce flagged
//!   not-computable results instead of errors, so a reactive form can
//!   re-invoke the calculation on every keystroke
//! - **Canonical Units**: The core operates in kg and mm; display-unit
//!   handling lives entirely in [`units`]
//!
//! ## Quick Start
//!
//! ```rust
//! use spring_core::setup::SpringSetup;
//! use spring_core::categories::BikeCategory;
//! use spring_core::calculations::spring_rate::calculate;
//!
//! let mut setup = SpringSetup::for_category(BikeCategory::Enduro);
//! setup.rider.mass_kg = 68.0;
//!
//! let result = calculate(&setup);
//! assert!(result.computable);
//! println!("{} lbs/in", result.recommended_rate_lbs_per_in);
//! ```
//!
//! ## Modules
//!
//! - [`setup`] - Immutable input records (rider, chassis, kinematics)
//! - [`calculations`] - Spring rate pipeline and compatibility advisor
//! - [`categories`] - Bike category defaults and coupling coefficients
//! - [`hardware`] - Sprindex adjustable-spring catalog lookup
//! - [`database`] - Optional CSV-backed per-model kinematics
//! - [`units`] - Type-safe unit wrappers and converters
//! - [`errors`] - Structured error types
//! - [`report`] - Plain-text report rendering

pub mod calculations;
pub mod categories;
pub mod database;
pub mod errors;
pub mod hardware;
pub mod report;
pub mod setup;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::spring_rate::{calculate, CalculationResult};
pub use calculations::compatibility::analyze_spring_compatibility;
pub use errors::{CalcError, CalcResult};
pub use setup::{SpringSetup, SpringType};
pub use categories::BikeCategory;
