//! Pure risk classification logic for patient vitals records.
//! No I/O or presentation concerns; returns structured data only.

use crate::types::{BloodPressure, PatientRecord};
use serde_json::Value;

/// Temperature above which a patient is flagged febrile
pub const FEVER_THRESHOLD: f64 = 99.6;
/// Temperature above which the temperature factor scores 2
pub const HIGH_FEVER_THRESHOLD: f64 = 100.9;
/// Aggregate score at or above which a patient is flagged high-risk
pub const HIGH_RISK_SCORE: u8 = 4;

/// Vitals fields subject to the per-field validity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalsField {
    Temperature,
    Age,
    BloodPressure,
}

/// Per-record factor breakdown.
///
/// Every factor starts at zero for every record; nothing is carried over
/// from previously assessed records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordAssessment {
    pub temp_risk: u8,
    pub age_risk: u8,
    pub blood_risk: u8,
    pub fever: bool,
    pub quality_issues: Vec<VitalsField>,
}

impl RecordAssessment {
    /// Aggregate risk score across the three factors
    pub fn risk_score(&self) -> u8 {
        self.temp_risk + self.age_risk + self.blood_risk
    }

    pub fn is_high_risk(&self) -> bool {
        self.risk_score() >= HIGH_RISK_SCORE
    }

    pub fn has_quality_issues(&self) -> bool {
        !self.quality_issues.is_empty()
    }
}

/// Extract a numeric reading from an untrusted field value
fn numeric(value: Option<&Value>) -> Option<f64> {
    value.and_then(Value::as_f64)
}

/// Assess one record.
///
/// The three factors are evaluated independently: a validity failure on one
/// field records a quality issue and skips that factor, but never suppresses
/// scoring of the others.
pub fn assess_record(record: &PatientRecord) -> RecordAssessment {
    let mut assessment = RecordAssessment::default();

    match numeric(record.temperature.as_ref()) {
        Some(temperature) => {
            if temperature > FEVER_THRESHOLD {
                assessment.fever = true;
            }
            if temperature > FEVER_THRESHOLD && temperature < HIGH_FEVER_THRESHOLD {
                assessment.temp_risk = 1;
            } else if temperature > HIGH_FEVER_THRESHOLD {
                assessment.temp_risk = 2;
            }
        }
        None => assessment.quality_issues.push(VitalsField::Temperature),
    }

    match numeric(record.age.as_ref()) {
        Some(age) => {
            if age > 39.0 && age < 66.0 {
                assessment.age_risk = 1;
            } else if age > 66.0 {
                assessment.age_risk = 2;
            }
        }
        None => assessment.quality_issues.push(VitalsField::Age),
    }

    match record
        .blood_pressure
        .as_ref()
        .and_then(BloodPressure::parse)
    {
        Some(reading) => assessment.blood_risk = blood_pressure_risk(reading),
        None => assessment.quality_issues.push(VitalsField::BloodPressure),
    }

    assessment
}

/// Staged blood pressure scoring: elevated, stage 1 and stage 2 hypertension
fn blood_pressure_risk(reading: BloodPressure) -> u8 {
    let BloodPressure {
        systolic,
        diastolic,
    } = reading;

    if systolic > 119.0 && systolic < 130.0 && diastolic < 80.0 {
        1
    } else if systolic > 129.0 && systolic < 140.0 && diastolic > 79.0 && diastolic < 90.0 {
        2
    } else if systolic >= 140.0 && diastolic >= 90.0 {
        3
    } else {
        0
    }
}
