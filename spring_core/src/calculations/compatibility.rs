//! # Spring Compatibility Advisor
//!
//! Classifies how well linear and progressive coil springs suit a frame's
//! leverage-ratio progression. A frame that already ramps up hard wants a
//! linear spring; a near-linear frame needs the spring to supply the
//! ramp-up instead. Hydraulic bottom-out (HBO) in the shock shifts the
//! low-progression verdict for linear springs.
//!
//! This is a fixed three-way decision table over the progression
//! percentage, not a tuned model.

use serde::{Deserialize, Serialize};

/// Progression above which a progressive spring risks the harsh
/// end-stroke "wall effect"
pub const HIGH_PROGRESSION_PCT: f64 = 25.0;

/// Progression below which a linear spring risks bottoming out
pub const LOW_PROGRESSION_PCT: f64 = 12.0;

/// Suitability verdict for one spring construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompatStatus {
    /// The best match for this frame
    Optimal,
    /// Works well; choice comes down to feel preference
    Compatible,
    /// Usable with reservations
    Caution,
    /// Not recommended
    Avoid,
}

impl std::fmt::Display for CompatStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CompatStatus::Optimal => "Optimal",
            CompatStatus::Compatible => "Compatible",
            CompatStatus::Caution => "Caution",
            CompatStatus::Avoid => "Avoid",
        };
        write!(f, "{s}")
    }
}

/// Verdict plus rider-facing explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    /// Suitability verdict
    pub status: CompatStatus,
    /// Rider-facing note
    pub note: String,
}

/// Compatibility verdicts for both spring constructions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// Linear spring verdict
    pub linear: Assessment,
    /// Progressive spring verdict
    pub progressive: Assessment,
}

/// Evaluate frame kinematics to recommend spring constructions.
pub fn analyze_spring_compatibility(progression_pct: f64, has_hbo: bool) -> CompatibilityReport {
    if progression_pct > HIGH_PROGRESSION_PCT {
        CompatibilityReport {
            linear: Assessment {
                status: CompatStatus::Optimal,
                note: "Matches frame kinematics.".to_string(),
            },
            progressive: Assessment {
                status: CompatStatus::Avoid,
                note: "Risk of harsh wall effect; the frame already ramps up sharply."
                    .to_string(),
            },
        }
    } else if progression_pct >= LOW_PROGRESSION_PCT {
        let linear_note = if has_hbo {
            "Use for a plush coil feel (HBO handles bottom-out)."
        } else {
            "Use for a plush coil feel."
        };
        CompatibilityReport {
            linear: Assessment {
                status: CompatStatus::Compatible,
                note: linear_note.to_string(),
            },
            progressive: Assessment {
                status: CompatStatus::Compatible,
                note: "Use for more pop and bottom-out resistance.".to_string(),
            },
        }
    } else {
        CompatibilityReport {
            linear: Assessment {
                status: CompatStatus::Caution,
                note: "High risk of bottom-out without strong HBO.".to_string(),
            },
            progressive: Assessment {
                status: CompatStatus::Optimal,
                note: "Essential to compensate for lack of ramp-up.".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_progression() {
        let report = analyze_spring_compatibility(28.0, false);
        assert_eq!(report.linear.status, CompatStatus::Optimal);
        assert_eq!(report.progressive.status, CompatStatus::Avoid);
    }

    #[test]
    fn test_mid_progression() {
        let report = analyze_spring_compatibility(20.0, false);
        assert_eq!(report.linear.status, CompatStatus::Compatible);
        assert_eq!(report.progressive.status, CompatStatus::Compatible);
        assert!(!report.linear.note.contains("HBO"));
    }

    #[test]
    fn test_mid_progression_with_hbo() {
        let report = analyze_spring_compatibility(20.0, true);
        assert_eq!(report.linear.status, CompatStatus::Compatible);
        assert!(report.linear.note.contains("HBO"));
    }

    #[test]
    fn test_low_progression() {
        let report = analyze_spring_compatibility(8.0, false);
        assert_eq!(report.linear.status, CompatStatus::Caution);
        assert_eq!(report.progressive.status, CompatStatus::Optimal);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        // 12 and 25 % both belong to the compatible band
        assert_eq!(
            analyze_spring_compatibility(12.0, false).linear.status,
            CompatStatus::Compatible
        );
        assert_eq!(
            analyze_spring_compatibility(25.0, false).progressive.status,
            CompatStatus::Compatible
        );
    }
}
