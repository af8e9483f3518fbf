//! # Calculations
//!
//! The calculation engines of spring_core:
//!
//! - [`spring_rate`] - the core spring rate pipeline: rear static load,
//!   effective leverage ratio, raw/recommended rate, alternative-rate
//!   table, and preload fine tuning
//! - [`compatibility`] - linear vs progressive spring compatibility
//!   advisor driven by frame progression
//!
//! All engines are pure functions over immutable setup records: identical
//! inputs always produce identical outputs, and degenerate inputs produce
//! flagged sentinel results instead of errors (see
//! [`errors`](crate::errors)).

pub mod compatibility;
pub mod spring_rate;

pub use compatibility::{analyze_spring_compatibility, CompatibilityReport, CompatStatus};
pub use spring_rate::{
    calculate, AlternativeRate, CalculationResult, Feel, PreloadRow, PreloadStatus,
};
