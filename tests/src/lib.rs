#[cfg(test)]
mod tests {
    use std::fs;
    use tempfile::TempDir;
    use triage::{assess_record, config, PatientRecord, TriageConfig};

    #[test]
    fn test_template_round_trips_through_loader() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("vitals.toml");

        fs::write(&path, config::default_config_template()).unwrap();

        let loaded = TriageConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.pages, 5);
        assert_eq!(loaded.page_size, 10);
        assert_eq!(loaded.retry.max_retries, 3);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_public_classification_surface() {
        let record: PatientRecord = serde_json::from_value(serde_json::json!({
            "patient_id": "P-1",
            "age": 70,
            "temperature": 101.0,
            "blood_pressure": "150/95"
        }))
        .unwrap();

        let assessment = assess_record(&record);
        assert_eq!(assessment.risk_score(), 7);
        assert!(assessment.is_high_risk());
    }
}
