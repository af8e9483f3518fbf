//! # Spring Hardware Catalog
//!
//! Manufacturer-specific lookup for Sprindex adjustable-rate springs.
//! Sprindex sells three stroke families, each with a fixed ladder of
//! adjustable rate ranges; a calculated rate either lands inside one range
//! (perfect fit), in the gap between two neighboring ranges (the rider
//! picks the softer or firmer option), or outside the catalog entirely
//! (no match — never extrapolated).
//!
//! ## Example
//!
//! ```rust
//! use spring_core::hardware::{lookup_sprindex, HardwareMatch};
//!
//! match lookup_sprindex(60.0, 465.0) {
//!     HardwareMatch::Perfect { range, tuned_rate_lbs, .. } => {
//!         assert_eq!(range, "450-500");
//!         assert_eq!(tuned_rate_lbs, 465);
//!     }
//!     other => panic!("expected perfect fit, got {other:?}"),
//! }
//! ```

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// One adjustable rate range on a Sprindex spring (inclusive bounds, lbs/in)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRange {
    /// Softest adjustable rate (lbs/in)
    pub min_lbs: u32,
    /// Firmest adjustable rate (lbs/in)
    pub max_lbs: u32,
}

impl RateRange {
    /// Catalog label, e.g. "450-500"
    pub fn label(&self) -> String {
        format!("{}-{}", self.min_lbs, self.max_lbs)
    }

    /// Whether a rate lies within this range (inclusive)
    pub fn contains(&self, rate_lbs: f64) -> bool {
        rate_lbs >= self.min_lbs as f64 && rate_lbs <= self.max_lbs as f64
    }

    /// Snap a rate to the nearest 5 lbs/in adjustment step, clamped into
    /// this range.
    pub fn snap(&self, rate_lbs: f64) -> u32 {
        let stepped = (rate_lbs / 5.0).round() * 5.0;
        (stepped.clamp(self.min_lbs as f64, self.max_lbs as f64)) as u32
    }
}

/// A Sprindex stroke family and its rate ladder
#[derive(Debug, Clone, Serialize)]
pub struct SpringFamily {
    /// Catalog name, e.g. "Enduro (65mm)"
    pub name: &'static str,
    /// Longest shock stroke this family accepts (mm)
    pub max_stroke_mm: f64,
    /// Rate ranges in ascending order
    pub ranges: Vec<RateRange>,
}

fn ranges(pairs: &[(u32, u32)]) -> Vec<RateRange> {
    pairs
        .iter()
        .map(|&(min_lbs, max_lbs)| RateRange { min_lbs, max_lbs })
        .collect()
}

/// The Sprindex catalog, ordered by stroke class
pub static SPRINDEX_CATALOG: Lazy<Vec<SpringFamily>> = Lazy::new(|| {
    vec![
        SpringFamily {
            name: "XC/Trail (55mm)",
            max_stroke_mm: 55.0,
            ranges: ranges(&[
                (380, 430),
                (430, 500),
                (490, 560),
                (550, 610),
                (610, 690),
                (650, 760),
            ]),
        },
        SpringFamily {
            name: "Enduro (65mm)",
            max_stroke_mm: 65.0,
            ranges: ranges(&[
                (340, 380),
                (390, 430),
                (450, 500),
                (500, 550),
                (540, 610),
                (610, 700),
            ]),
        },
        SpringFamily {
            name: "DH (75mm)",
            max_stroke_mm: 75.0,
            ranges: ranges(&[
                (290, 320),
                (340, 370),
                (400, 440),
                (450, 490),
                (510, 570),
                (570, 630),
            ]),
        },
    ]
});

/// A neighboring-range option offered when the calculated rate falls in a
/// gap between two ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapOption {
    /// Range label, e.g. "390-430"
    pub range: String,
    /// Boundary rate the spring would be set to if this option is chosen
    /// (lbs/in)
    pub boundary_rate_lbs: u32,
}

/// Outcome of a Sprindex catalog lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HardwareMatch {
    /// The calculated rate lies inside one adjustable range
    Perfect {
        /// Family name
        family: String,
        /// Matched range label
        range: String,
        /// Rate snapped to the nearest 5 lbs/in within the range
        tuned_rate_lbs: u32,
    },
    /// The calculated rate falls between two consecutive ranges; the rider
    /// picks the softer (plush) or firmer (supportive) neighbor
    Gap {
        /// Family name
        family: String,
        /// Softer neighbor, set to its top rate
        plush: GapOption,
        /// Firmer neighbor, set to its bottom rate
        supportive: GapOption,
    },
    /// No family or range covers the stroke/rate combination
    NoMatch {
        /// Family considered, if the stroke matched one
        family: Option<String>,
        /// Why no spring fits
        reason: String,
    },
}

/// Select the Sprindex family for a shock stroke: the shortest stroke class
/// that accepts it.
pub fn family_for_stroke(stroke_mm: f64) -> Option<&'static SpringFamily> {
    SPRINDEX_CATALOG
        .iter()
        .find(|family| stroke_mm <= family.max_stroke_mm)
}

/// Look up a calculated rate in the Sprindex catalog.
///
/// Never extrapolates: a rate below the family's softest range or above its
/// firmest yields [`HardwareMatch::NoMatch`].
pub fn lookup_sprindex(stroke_mm: f64, rate_lbs: f64) -> HardwareMatch {
    let Some(family) = family_for_stroke(stroke_mm) else {
        return HardwareMatch::NoMatch {
            family: None,
            reason: format!("No Sprindex family accepts a {stroke_mm:.1} mm stroke"),
        };
    };

    if let Some(range) = family.ranges.iter().find(|r| r.contains(rate_lbs)) {
        return HardwareMatch::Perfect {
            family: family.name.to_string(),
            range: range.label(),
            tuned_rate_lbs: range.snap(rate_lbs),
        };
    }

    let first = &family.ranges[0];
    let last = &family.ranges[family.ranges.len() - 1];
    if rate_lbs < first.min_lbs as f64 {
        return HardwareMatch::NoMatch {
            family: Some(family.name.to_string()),
            reason: format!(
                "Calculated rate {rate_lbs:.0} lbs/in is below the softest {} range ({})",
                family.name,
                first.label()
            ),
        };
    }
    if rate_lbs > last.max_lbs as f64 {
        return HardwareMatch::NoMatch {
            family: Some(family.name.to_string()),
            reason: format!(
                "Calculated rate {rate_lbs:.0} lbs/in is above the firmest {} range ({})",
                family.name,
                last.label()
            ),
        };
    }

    // Between the catalog bounds but inside no range: find the neighbors.
    for pair in family.ranges.windows(2) {
        let (below, above) = (&pair[0], &pair[1]);
        if rate_lbs > below.max_lbs as f64 && rate_lbs < above.min_lbs as f64 {
            return HardwareMatch::Gap {
                family: family.name.to_string(),
                plush: GapOption {
                    range: below.label(),
                    boundary_rate_lbs: below.max_lbs,
                },
                supportive: GapOption {
                    range: above.label(),
                    boundary_rate_lbs: above.min_lbs,
                },
            };
        }
    }

    // Overlapping ranges leave no uncovered interior values, so this is
    // unreachable with the shipped catalog; report honestly if data changes.
    HardwareMatch::NoMatch {
        family: Some(family.name.to_string()),
        reason: format!("Calculated rate {rate_lbs:.0} lbs/in matches no {} range", family.name),
    }
}
