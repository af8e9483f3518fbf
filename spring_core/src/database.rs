//! # Suspension Database
//!
//! CSV-backed lookup of per-model kinematics. A verified database record
//! supplies measured leverage numbers; anything else falls back to
//! category defaults. The database is strictly optional: a missing or
//! unreadable file yields an empty database and never fails a
//! calculation.
//!
//! ## File Format
//!
//! ```csv
//! Model,Travel_mm,Shock_Stroke,Start_Leverage,End_Leverage,Progression_Pct
//! Example Bike 29,160,60,3.02,2.33,23
//! ```
//!
//! Rows with non-numeric kinematics values are skipped rather than
//! poisoning the whole file.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::categories::BikeCategory;
use crate::errors::{CalcError, CalcResult};
use crate::setup::KinematicsProfile;

/// One verified bike record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BikeRecord {
    /// Bike model name, e.g. "Example Bike 29"
    #[serde(rename = "Model")]
    pub model: String,

    /// Rear wheel travel (mm)
    #[serde(rename = "Travel_mm")]
    pub travel_mm: f64,

    /// Shock stroke (mm)
    #[serde(rename = "Shock_Stroke")]
    pub stroke_mm: f64,

    /// Measured leverage ratio at top-out
    #[serde(rename = "Start_Leverage")]
    pub lr_start: f64,

    /// Measured leverage ratio at bottom-out
    #[serde(rename = "End_Leverage")]
    pub lr_end: f64,

    /// Leverage progression (%)
    #[serde(rename = "Progression_Pct")]
    pub progression_pct: f64,
}

impl BikeRecord {
    /// Category this bike falls into, inferred from its travel bracket
    pub fn category(&self) -> BikeCategory {
        BikeCategory::from_travel(self.travel_mm)
    }

    /// Kinematics profile from the verified record (always advanced mode)
    pub fn kinematics(&self) -> KinematicsProfile {
        KinematicsProfile {
            travel_mm: self.travel_mm,
            stroke_mm: self.stroke_mm,
            lr_start: self.lr_start,
            progression_pct: self.progression_pct,
            advanced_mode: true,
        }
    }

    fn is_plausible(&self) -> bool {
        self.travel_mm > 0.0 && self.stroke_mm > 0.0 && self.lr_start > 0.0
    }
}

/// In-memory suspension database, sorted by model name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BikeDatabase {
    records: Vec<BikeRecord>,
}

impl BikeDatabase {
    /// An empty database (the fallback when no data source is available)
    pub fn empty() -> Self {
        BikeDatabase::default()
    }

    /// Load the database from a CSV file.
    ///
    /// Rows that fail to parse or carry implausible kinematics are
    /// skipped.
    pub fn load(path: impl AsRef<Path>) -> CalcResult<Self> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path).map_err(|e| {
            CalcError::database_error(path.display().to_string(), e.to_string())
        })?;

        let mut records: Vec<BikeRecord> = reader
            .deserialize::<BikeRecord>()
            .filter_map(Result::ok)
            .filter(BikeRecord::is_plausible)
            .collect();
        records.sort_by(|a, b| a.model.cmp(&b.model));

        Ok(BikeDatabase { records })
    }

    /// Load the database, falling back to an empty one if the source is
    /// unavailable. Absence of the database must never fail a
    /// calculation.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        BikeDatabase::load(path).unwrap_or_else(|_| BikeDatabase::empty())
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the database holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, sorted by model name
    pub fn records(&self) -> &[BikeRecord] {
        &self.records
    }

    /// Model names for UI selection
    pub fn models(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.model.as_str()).collect()
    }

    /// Find a record by exact model name
    pub fn find(&self, model: &str) -> Option<&BikeRecord> {
        self.records.iter().find(|r| r.model == model)
    }

    /// Find a record by exact model name, as a structured error on a miss
    pub fn get(&self, model: &str) -> CalcResult<&BikeRecord> {
        self.find(model)
            .ok_or_else(|| CalcError::bike_not_found(model))
    }

    /// Kinematics for a model, falling back to category defaults when the
    /// model is absent (or no model was selected).
    pub fn kinematics_or_default(
        &self,
        model: Option<&str>,
        category: BikeCategory,
    ) -> KinematicsProfile {
        if let Some(record) = model.and_then(|m| self.find(m)) {
            return record.kinematics();
        }
        let d = category.defaults();
        KinematicsProfile {
            travel_mm: d.travel_mm,
            stroke_mm: d.stroke_mm,
            lr_start: d.lr_start,
            progression_pct: d.progression_pct,
            advanced_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path
    }

    const SAMPLE: &str = "\
Model,Travel_mm,Shock_Stroke,Start_Leverage,End_Leverage,Progression_Pct
Zeta Enduro 29,160,60,3.02,2.33,23
Alpha Trail,130,50,2.90,2.35,19
Broken Row,not-a-number,60,3.0,2.4,20
";

    #[test]
    fn test_load_sorts_and_skips_bad_rows() {
        let path = write_csv("spring_core_db_load.csv", SAMPLE);
        let db = BikeDatabase::load(&path).unwrap();

        assert_eq!(db.len(), 2);
        assert_eq!(db.models(), vec!["Alpha Trail", "Zeta Enduro 29"]);
    }

    #[test]
    fn test_find_and_category() {
        let path = write_csv("spring_core_db_find.csv", SAMPLE);
        let db = BikeDatabase::load(&path).unwrap();

        let bike = db.find("Zeta Enduro 29").unwrap();
        assert_eq!(bike.category(), BikeCategory::Enduro);
        assert!(bike.kinematics().advanced_mode);

        assert!(db.find("Unknown Bike").is_none());
        assert_eq!(
            db.get("Unknown Bike").unwrap_err().error_code(),
            "BIKE_NOT_FOUND"
        );
    }

    #[test]
    fn test_missing_file_falls_back_to_empty() {
        let db = BikeDatabase::load_or_empty("/nonexistent/suspension.csv");
        assert!(db.is_empty());
    }

    #[test]
    fn test_kinematics_fallback_to_category_defaults() {
        let db = BikeDatabase::empty();
        let kin = db.kinematics_or_default(Some("Unknown Bike"), BikeCategory::Enduro);

        assert_eq!(kin.travel_mm, 160.0);
        assert_eq!(kin.stroke_mm, 60.0);
        assert!(!kin.advanced_mode);
    }

    #[test]
    fn test_kinematics_from_verified_record() {
        let path = write_csv("spring_core_db_kin.csv", SAMPLE);
        let db = BikeDatabase::load(&path).unwrap();
        let kin = db.kinematics_or_default(Some("Zeta Enduro 29"), BikeCategory::Trail);

        assert_eq!(kin.travel_mm, 160.0);
        assert_eq!(kin.lr_start, 3.02);
        assert!(kin.advanced_mode);
    }
}
