use crate::classify::RecordAssessment;
use crate::error::TriageError;
use crate::progress::ProgressTracker;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One patient vitals record as returned by the upstream API.
///
/// Everything beyond the identifier is untrusted: a field may be missing or
/// carry a wrong-typed value, and validity is judged per field.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PatientRecord {
    pub patient_id: String,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub temperature: Option<Value>,
    #[serde(default)]
    pub blood_pressure: Option<Value>,
}

/// One page of the paginated vitals feed
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VitalsPage {
    #[serde(default)]
    pub data: Vec<PatientRecord>,
}

/// A parsed systolic/diastolic reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BloodPressure {
    pub systolic: f64,
    pub diastolic: f64,
}

impl BloodPressure {
    /// Parse an untrusted blood pressure value.
    ///
    /// Accepts the upstream `"systolic/diastolic"` string form or a
    /// `{"systolic": .., "diastolic": ..}` object. Both components must be
    /// numeric; anything else is a data quality issue.
    pub fn parse(value: &Value) -> Option<Self> {
        match value {
            Value::String(raw) => {
                let (sys, dia) = raw.split_once('/')?;
                let systolic = sys.trim().parse().ok()?;
                let diastolic = dia.trim().parse().ok()?;
                Some(Self {
                    systolic,
                    diastolic,
                })
            }
            Value::Object(fields) => {
                let systolic = fields.get("systolic")?.as_f64()?;
                let diastolic = fields.get("diastolic")?.as_f64()?;
                Some(Self {
                    systolic,
                    diastolic,
                })
            }
            _ => None,
        }
    }
}

/// Accumulated triage summary submitted to the reporting endpoint.
///
/// The three sequences are append-only, persist across pages and permit
/// duplicates.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TriageReport {
    pub high_risk_patients: Vec<String>,
    pub fever_patients: Vec<String>,
    pub data_quality_issues: Vec<String>,
}

impl TriageReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one record's assessment to the accumulators.
    ///
    /// Quality issues append once per failing field; a qualifying record is
    /// flagged high-risk at most once.
    pub fn ingest(&mut self, patient_id: &str, assessment: &RecordAssessment) {
        if assessment.fever {
            self.fever_patients.push(patient_id.to_string());
        }
        for _ in &assessment.quality_issues {
            self.data_quality_issues.push(patient_id.to_string());
        }
        if assessment.is_high_risk() {
            self.high_risk_patients.push(patient_id.to_string());
        }
    }

    /// Whether any patient was flagged in any accumulator
    pub fn has_findings(&self) -> bool {
        !self.high_risk_patients.is_empty()
            || !self.fever_patients.is_empty()
            || !self.data_quality_issues.is_empty()
    }
}

/// A page whose retry budget was exhausted
#[derive(Debug)]
pub struct PageFailure {
    pub page: u32,
    pub error: TriageError,
}

/// Result of a full pipeline run
#[derive(Debug)]
pub struct TriageOutcome {
    pub report: TriageReport,
    pub progress: ProgressTracker,
    pub failures: Vec<PageFailure>,
}

impl TriageOutcome {
    pub fn new(report: TriageReport, progress: ProgressTracker, failures: Vec<PageFailure>) -> Self {
        Self {
            report,
            progress,
            failures,
        }
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}
