//! # Spring Rate Calculation
//!
//! The core pipeline: canonical-unit inputs in, recommended coil spring
//! rate and tuning tables out.
//!
//! ## Pipeline
//!
//! ```text
//! effective rider mass = rider + gear x coupling(category)
//! system mass          = effective rider + bike
//! sprung mass          = system - unsprung
//! rear static load     = sprung x bias%          (then kg -> lbs)
//! effective LR         = lr_start - (lr_start - lr_end) x sag%   (advanced)
//!                      = travel / stroke                          (basic)
//! raw rate [lbs/in]    = rear load x effective LR / sag deflection [in]
//! ```
//!
//! Rear bias is applied to the sprung mass only: unsprung components are
//! not supported by the spring, so they never enter the load the spring
//! must carry.
//!
//! A Progressive spring's built-in ramp-up lowers the required linear
//! baseline; its fixed 0.97 correction is applied to the raw rate.
//!
//! ## Degenerate inputs
//!
//! The form layer re-runs this on every keystroke, so a mid-edit zero
//! stroke or a load that works out non-positive yields a flagged
//! not-computable [`CalculationResult`] rather than an error or a bogus
//! number.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::setup::SpringSetup;
//! use spring_core::categories::BikeCategory;
//! use spring_core::calculations::spring_rate::calculate;
//!
//! let setup = SpringSetup::for_category(BikeCategory::Enduro);
//! let result = calculate(&setup);
//! assert!(result.computable);
//! assert_eq!(result.recommended_rate_lbs_per_in % 5, 0);
//! ```

use serde::{Deserialize, Serialize};

use crate::hardware::{lookup_sprindex, HardwareMatch};
use crate::setup::{SpringSetup, SpringType};
use crate::units::{KG_TO_LB, MM_TO_IN};

/// Coil springs are manufactured in 25 lbs/in increments
pub const RATE_INCREMENT_LBS: u32 = 25;

/// Alternative-rate table offsets around the recommended rate (lbs/in)
pub const ALTERNATIVE_OFFSETS_LBS: [i32; 5] = [-50, -25, 0, 25, 50];

/// Spring compression per preload collar turn (mm)
pub const PRELOAD_MM_PER_TURN: f64 = 1.0;

/// Preload turn values evaluated in the fine-tuning table
pub const PRELOAD_TURNS: [f64; 6] = [0.5, 1.0, 1.5, 2.0, 2.5, 3.0];

/// Qualitative feel of an alternative rate relative to the recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Feel {
    /// Softer than recommended: more sag, more traction
    Plush,
    /// The recommended rate
    Target,
    /// Firmer than recommended: less sag, more support
    Supportive,
}

impl std::fmt::Display for Feel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Feel::Plush => "Plush",
            Feel::Target => "Target",
            Feel::Supportive => "Supportive",
        };
        write!(f, "{s}")
    }
}

/// One row of the alternative-rate table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRate {
    /// Spring rate (lbs/in)
    pub rate_lbs: u32,
    /// Resulting sag at this rate (%)
    pub sag_pct: f64,
    /// Feel relative to the recommended rate
    pub feel: Feel,
}

/// Status of a preload setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreloadStatus {
    /// Within the safe 1.0 to <3.0 turn window
    #[serde(rename = "OK")]
    Ok,
    /// Too little or too much preload
    Caution,
}

/// One row of the preload fine-tuning table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreloadRow {
    /// Preload collar turns
    pub turns: f64,
    /// Residual sag at this preload (%)
    pub sag_pct: f64,
    /// Whether this preload is within the safe window
    pub status: PreloadStatus,
}

/// Complete output of one spring rate calculation.
///
/// When `computable` is false every numeric field is zero and the tables
/// are empty; the form layer should render a guidance message, never the
/// numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Whether the inputs admitted a valid calculation
    pub computable: bool,

    /// Effective leverage ratio at target sag
    pub effective_lr: f64,

    /// Sprung mass: rider + coupled gear + bike - unsprung (kg)
    pub sprung_mass_kg: f64,

    /// Rear static load (kg)
    pub rear_load_kg: f64,

    /// Rear static load (lbs)
    pub rear_load_lbs: f64,

    /// Raw calculated spring rate before rounding (lbs/in)
    pub raw_rate_lbs_per_in: f64,

    /// Recommended rate: raw rate rounded to the 25 lbs/in manufacturing
    /// increment, or the Sprindex-snapped value on a perfect hardware fit
    pub recommended_rate_lbs_per_in: u32,

    /// Neighboring rate/sag tradeoffs around the recommendation
    pub alternatives: Vec<AlternativeRate>,

    /// Preload fine-tuning table at the recommended rate
    pub preload_table: Vec<PreloadRow>,

    /// Sprindex catalog match (only populated for the Sprindex spring type)
    pub hardware: Option<HardwareMatch>,
}

impl CalculationResult {
    /// The sentinel result for degenerate inputs.
    pub fn not_computable() -> Self {
        CalculationResult {
            computable: false,
            effective_lr: 0.0,
            sprung_mass_kg: 0.0,
            rear_load_kg: 0.0,
            rear_load_lbs: 0.0,
            raw_rate_lbs_per_in: 0.0,
            recommended_rate_lbs_per_in: 0,
            alternatives: Vec::new(),
            preload_table: Vec::new(),
            hardware: None,
        }
    }
}

/// Round a raw rate to the nearest manufacturing increment.
fn round_to_increment(rate_lbs: f64, increment: u32) -> u32 {
    let inc = increment as f64;
    ((rate_lbs / inc).round() * inc).max(0.0) as u32
}

/// Sag percentage a given spring rate produces, inverting the rate formula.
fn sag_pct_for_rate(rear_load_lbs: f64, effective_lr: f64, stroke_mm: f64, rate_lbs: f64) -> f64 {
    let sag_in = rear_load_lbs * effective_lr / rate_lbs;
    (sag_in / (stroke_mm * MM_TO_IN)) * 100.0
}

/// Run the full spring rate pipeline for one setup.
///
/// Pure and idempotent; see the module docs for the formula chain.
pub fn calculate(setup: &SpringSetup) -> CalculationResult {
    let kin = &setup.kinematics;
    if kin.stroke_mm <= 0.0 {
        return CalculationResult::not_computable();
    }

    let coupling = setup.chassis.category.coupling_coeff();
    let effective_rider_kg = setup.rider.mass_kg + setup.rider.gear_mass_kg * coupling;
    let system_kg = effective_rider_kg + setup.chassis.bike_mass_kg;
    let sprung_kg = system_kg - setup.chassis.unsprung_mass_kg;

    // Bias applies to sprung mass only; unsprung components never load the
    // spring.
    let rear_load_kg = sprung_kg * (setup.chassis.rear_bias_pct / 100.0);
    let rear_load_lbs = rear_load_kg * KG_TO_LB;

    let effective_lr = kin.effective_lr(setup.target_sag_pct);

    let sag_deflection_in = kin.stroke_mm * (setup.target_sag_pct / 100.0) * MM_TO_IN;
    let mut raw_rate = (rear_load_lbs * effective_lr) / sag_deflection_in;
    raw_rate *= setup.spring_type.correction_factor();

    if !raw_rate.is_finite() || raw_rate <= 0.0 {
        return CalculationResult::not_computable();
    }

    let mut recommended = round_to_increment(raw_rate, RATE_INCREMENT_LBS);
    if recommended == 0 {
        // Rounds below the smallest manufactured rate; nothing to recommend.
        return CalculationResult::not_computable();
    }
    let hardware = match setup.spring_type {
        SpringType::Sprindex => {
            let matched = lookup_sprindex(kin.stroke_mm, raw_rate);
            if let HardwareMatch::Perfect { tuned_rate_lbs, .. } = matched {
                recommended = tuned_rate_lbs;
            }
            Some(matched)
        }
        _ => None,
    };

    let alternatives = ALTERNATIVE_OFFSETS_LBS
        .iter()
        .filter_map(|&offset| {
            let rate = recommended as i64 + offset as i64;
            if rate <= 0 {
                return None;
            }
            let rate_lbs = rate as u32;
            let feel = match rate_lbs.cmp(&recommended) {
                std::cmp::Ordering::Less => Feel::Plush,
                std::cmp::Ordering::Equal => Feel::Target,
                std::cmp::Ordering::Greater => Feel::Supportive,
            };
            Some(AlternativeRate {
                rate_lbs,
                sag_pct: sag_pct_for_rate(rear_load_lbs, effective_lr, kin.stroke_mm, rate_lbs as f64),
                feel,
            })
        })
        .collect();

    let preload_table = PRELOAD_TURNS
        .iter()
        .map(|&turns| {
            let sag_in = rear_load_lbs * effective_lr / recommended as f64
                - turns * PRELOAD_MM_PER_TURN * MM_TO_IN;
            let sag_pct = (sag_in / (kin.stroke_mm * MM_TO_IN)) * 100.0;
            let status = if (1.0..3.0).contains(&turns) {
                PreloadStatus::Ok
            } else {
                PreloadStatus::Caution
            };
            PreloadRow {
                turns,
                sag_pct,
                status,
            }
        })
        .collect();

    CalculationResult {
        computable: true,
        effective_lr,
        sprung_mass_kg: sprung_kg,
        rear_load_kg,
        rear_load_lbs,
        raw_rate_lbs_per_in: raw_rate,
        recommended_rate_lbs_per_in: recommended,
        alternatives,
        preload_table,
        hardware,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::{BikeCategory, SkillLevel};
    use crate::setup::{ChassisProfile, KinematicsProfile, RiderProfile, SpringSetup};

    /// 68 kg rider on a 15.1 kg Enduro frame, advanced kinematics
    fn enduro_setup() -> SpringSetup {
        SpringSetup {
            rider: RiderProfile {
                skill: SkillLevel::Intermediate,
                mass_kg: 68.0,
                gear_mass_kg: 4.0,
            },
            chassis: ChassisProfile {
                category: BikeCategory::Enduro,
                bike_mass_kg: 15.1,
                unsprung_mass_kg: 4.27,
                is_ebike: false,
                rear_bias_pct: 67.0,
            },
            kinematics: KinematicsProfile {
                travel_mm: 160.0,
                stroke_mm: 60.0,
                lr_start: 3.02,
                progression_pct: 23.0,
                advanced_mode: true,
            },
            target_sag_pct: 33.0,
            spring_type: SpringType::StandardLinear,
        }
    }

    #[test]
    fn test_reference_enduro_setup() {
        let result = calculate(&enduro_setup());
        assert!(result.computable);

        // sprung = 68 + 4*0.72 + 15.1 - 4.27 = 81.71 kg
        assert!((result.sprung_mass_kg - 81.71).abs() < 1e-9);
        // rear load = 81.71 * 0.67 = 54.7457 kg
        assert!((result.rear_load_kg - 54.7457).abs() < 1e-9);
        // effective LR = 3.02 - (3.02 - 2.3254) * 0.33 = 2.790782
        assert!((result.effective_lr - 2.790782).abs() < 1e-9);
        // raw = (54.7457 * 2.20462 * 2.790782) / (60 * 0.33 / 25.4)
        assert!((result.raw_rate_lbs_per_in - 432.09).abs() < 0.1);
        assert_eq!(result.recommended_rate_lbs_per_in, 425);
    }

    #[test]
    fn test_progressive_correction() {
        let linear = calculate(&enduro_setup());
        let mut setup = enduro_setup();
        setup.spring_type = SpringType::Progressive;
        let progressive = calculate(&setup);

        let ratio = progressive.raw_rate_lbs_per_in / linear.raw_rate_lbs_per_in;
        assert!((ratio - 0.97).abs() < 1e-12);
    }

    #[test]
    fn test_zero_stroke_not_computable() {
        let mut setup = enduro_setup();
        setup.kinematics.stroke_mm = 0.0;
        let result = calculate(&setup);

        assert!(!result.computable);
        assert_eq!(result.raw_rate_lbs_per_in, 0.0);
        assert_eq!(result.recommended_rate_lbs_per_in, 0);
        assert!(result.alternatives.is_empty());
        assert!(result.preload_table.is_empty());
        assert!(result.hardware.is_none());
    }

    #[test]
    fn test_negative_load_not_computable() {
        // Unsprung mass entered heavier than everything it hangs off mid-edit
        let mut setup = enduro_setup();
        setup.rider.mass_kg = 0.5;
        setup.chassis.bike_mass_kg = 0.5;
        setup.chassis.unsprung_mass_kg = 5.0;
        let result = calculate(&setup);
        assert!(!result.computable);
    }

    #[test]
    fn test_bias_monotonicity() {
        let mut setup = enduro_setup();
        let mut last_load = 0.0;
        let mut last_rate = 0.0;
        for bias in [60.0, 65.0, 70.0, 75.0] {
            setup.chassis.rear_bias_pct = bias;
            let result = calculate(&setup);
            assert!(result.rear_load_lbs > last_load);
            assert!(result.raw_rate_lbs_per_in > last_rate);
            last_load = result.rear_load_lbs;
            last_rate = result.raw_rate_lbs_per_in;
        }
    }

    #[test]
    fn test_rounding_contract() {
        let mut setup = enduro_setup();
        for rider_kg in [48.0, 61.5, 68.0, 77.0, 93.5, 110.0] {
            setup.rider.mass_kg = rider_kg;
            let result = calculate(&setup);
            let rec = result.recommended_rate_lbs_per_in;
            assert_eq!(rec % RATE_INCREMENT_LBS, 0);
            assert!((rec as f64 - result.raw_rate_lbs_per_in).abs() <= 12.5);
        }
    }

    #[test]
    fn test_alternative_table_shape() {
        let result = calculate(&enduro_setup());
        let rec = result.recommended_rate_lbs_per_in;

        assert_eq!(result.alternatives.len(), 5);
        let rates: Vec<u32> = result.alternatives.iter().map(|a| a.rate_lbs).collect();
        assert_eq!(rates, vec![rec - 50, rec - 25, rec, rec + 25, rec + 50]);

        // Stiffer spring, less sag
        for pair in result.alternatives.windows(2) {
            assert!(pair[1].sag_pct < pair[0].sag_pct);
        }

        assert_eq!(result.alternatives[0].feel, Feel::Plush);
        assert_eq!(result.alternatives[2].feel, Feel::Target);
        assert_eq!(result.alternatives[4].feel, Feel::Supportive);

        // The recommended row lands near the target sag
        assert!((result.alternatives[2].sag_pct - 33.0).abs() < 1.5);
    }

    #[test]
    fn test_alternatives_skip_non_positive_rates() {
        // A very light load rounds to a 50 lbs/in recommendation; the
        // -50 offset row lands at zero and must be dropped, not emitted.
        let mut setup = enduro_setup();
        setup.rider.mass_kg = 30.0;
        setup.rider.gear_mass_kg = 0.0;
        setup.chassis.bike_mass_kg = 8.0;
        setup.chassis.unsprung_mass_kg = 6.5;
        setup.kinematics.advanced_mode = false;
        setup.kinematics.travel_mm = 80.0;
        setup.kinematics.stroke_mm = 75.0;
        let result = calculate(&setup);

        assert!(result.computable);
        assert_eq!(result.recommended_rate_lbs_per_in, 50);
        assert_eq!(result.alternatives.len(), 4);
        assert!(result.alternatives.iter().all(|a| a.rate_lbs > 0));
    }

    #[test]
    fn test_preload_table() {
        let result = calculate(&enduro_setup());
        assert_eq!(result.preload_table.len(), 6);

        // More preload, less residual sag
        for pair in result.preload_table.windows(2) {
            assert!(pair[1].sag_pct < pair[0].sag_pct);
        }

        let statuses: Vec<PreloadStatus> =
            result.preload_table.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                PreloadStatus::Caution, // 0.5 turns: too little
                PreloadStatus::Ok,
                PreloadStatus::Ok,
                PreloadStatus::Ok,
                PreloadStatus::Ok,
                PreloadStatus::Caution, // 3.0 turns: too much
            ]
        );
    }

    #[test]
    fn test_basic_mode_uses_travel_stroke_ratio() {
        let mut setup = enduro_setup();
        setup.kinematics.advanced_mode = false;
        let result = calculate(&setup);
        assert!((result.effective_lr - 160.0 / 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_sprindex_perfect_fit_snaps_recommendation() {
        let mut setup = SpringSetup::for_category(BikeCategory::Enduro);
        setup.spring_type = SpringType::Sprindex;
        let result = calculate(&setup);

        // Default Enduro setup works out to ~452 lbs/in, inside "450-500"
        match result.hardware {
            Some(HardwareMatch::Perfect {
                ref range,
                tuned_rate_lbs,
                ..
            }) => {
                assert_eq!(range, "450-500");
                assert_eq!(result.recommended_rate_lbs_per_in, tuned_rate_lbs);
                assert_eq!(tuned_rate_lbs % 5, 0);
            }
            ref other => panic!("expected perfect fit, got {other:?}"),
        }
    }

    #[test]
    fn test_sprindex_gap_keeps_rounded_recommendation() {
        // Tuned to land at ~440 lbs/in, in the uncovered 430-450 interval
        let mut setup = SpringSetup::for_category(BikeCategory::Enduro);
        setup.rider.mass_kg = 72.6;
        setup.spring_type = SpringType::Sprindex;
        let result = calculate(&setup);

        match result.hardware {
            Some(HardwareMatch::Gap {
                ref plush,
                ref supportive,
                ..
            }) => {
                assert_eq!(plush.range, "390-430");
                assert_eq!(supportive.range, "450-500");
            }
            ref other => panic!("expected gap, got {other:?}"),
        }
        // The coil-increment recommendation stands until the rider picks a side
        assert_eq!(result.recommended_rate_lbs_per_in % RATE_INCREMENT_LBS, 0);
    }

    #[test]
    fn test_non_sprindex_has_no_hardware_match() {
        let result = calculate(&enduro_setup());
        assert!(result.hardware.is_none());
    }

    #[test]
    fn test_idempotent() {
        let setup = enduro_setup();
        assert_eq!(calculate(&setup), calculate(&setup));
    }

    #[test]
    fn test_result_serialization() {
        let result = calculate(&enduro_setup());
        let json = serde_json::to_string_pretty(&result).unwrap();
        let roundtrip: CalculationResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, roundtrip);
    }
}
