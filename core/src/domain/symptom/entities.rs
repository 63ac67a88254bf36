use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{entities::app_errors::CoreError, generate_timestamp};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Mild,
    #[default]
    Moderate,
    Severe,
}

impl Severity {
    /// Stored representation: 1 = mild, 2 = moderate, 3 = severe.
    pub fn as_i16(&self) -> i16 {
        match self {
            Severity::Mild => 1,
            Severity::Moderate => 2,
            Severity::Severe => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

impl TryFrom<i16> for Severity {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Severity::Mild),
            2 => Ok(Severity::Moderate),
            3 => Ok(Severity::Severe),
            other => Err(CoreError::Invalid(format!("unknown severity {other}"))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SymptomEntry {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub name: String,
    pub severity: Severity,
    pub duration_days: i32,
    pub notes: Option<String>,
    pub recorded_by: Option<Uuid>,
    pub recorded_at: DateTime<Utc>,
}

impl SymptomEntry {
    pub fn new(
        patient_id: Uuid,
        name: String,
        severity: Severity,
        duration_days: i32,
        notes: Option<String>,
        recorded_by: Uuid,
    ) -> Result<Self, CoreError> {
        if duration_days < 0 {
            return Err(CoreError::Invalid(
                "duration_days must not be negative".to_string(),
            ));
        }

        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(CoreError::Invalid("symptom name is required".to_string()));
        }

        let (now, timestamp) = generate_timestamp();

        Ok(Self {
            id: Uuid::new_v7(timestamp),
            patient_id,
            name,
            severity,
            duration_days,
            notes: notes.filter(|n| !n.trim().is_empty()),
            recorded_by: Some(recorded_by),
            recorded_at: now,
        })
    }
}

/// A patient's symptom entries at the moment a prediction is requested.
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomSet(Vec<SymptomEntry>);

impl SymptomSet {
    pub fn new(entries: Vec<SymptomEntry>) -> Result<Self, CoreError> {
        if entries.is_empty() {
            return Err(CoreError::NoSymptomsRecorded);
        }

        Ok(Self(entries))
    }

    pub fn entries(&self) -> &[SymptomEntry] {
        &self.0
    }

    pub fn snapshot(&self) -> Vec<AnalyzedSymptom> {
        self.0.iter().map(AnalyzedSymptom::from).collect()
    }
}

/// What a prediction records about each symptom it was derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzedSymptom {
    pub name: String,
    pub severity: Severity,
    pub duration_days: i32,
}

impl From<&SymptomEntry> for AnalyzedSymptom {
    fn from(entry: &SymptomEntry) -> Self {
        Self {
            name: entry.name.clone(),
            severity: entry.severity,
            duration_days: entry.duration_days,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, severity: Severity, days: i32) -> SymptomEntry {
        SymptomEntry::new(Uuid::new_v4(), name.to_string(), severity, days, None, Uuid::new_v4())
            .unwrap()
    }

    #[test]
    fn test_severity_storage_round_trip() {
        for severity in [Severity::Mild, Severity::Moderate, Severity::Severe] {
            assert_eq!(Severity::try_from(severity.as_i16()), Ok(severity));
        }
        assert!(Severity::try_from(4).is_err());
    }

    #[test]
    fn test_new_entry_rejects_negative_duration() {
        let result = SymptomEntry::new(
            Uuid::new_v4(),
            "Cough".to_string(),
            Severity::Mild,
            -1,
            None,
            Uuid::new_v4(),
        );

        assert!(matches!(result, Err(CoreError::Invalid(_))));
    }

    #[test]
    fn test_new_entry_drops_blank_notes() {
        let entry = SymptomEntry::new(
            Uuid::new_v4(),
            "  Fever ".to_string(),
            Severity::Severe,
            2,
            Some("   ".to_string()),
            Uuid::new_v4(),
        )
        .unwrap();

        assert_eq!(entry.name, "Fever");
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_symptom_set_requires_entries() {
        assert_eq!(SymptomSet::new(vec![]), Err(CoreError::NoSymptomsRecorded));
    }

    #[test]
    fn test_symptom_set_snapshot_keeps_order() {
        let set = SymptomSet::new(vec![
            entry("Fever", Severity::Severe, 3),
            entry("Cough", Severity::Mild, 7),
        ])
        .unwrap();

        let snapshot = set.snapshot();
        assert_eq!(snapshot[0].name, "Fever");
        assert_eq!(snapshot[1].name, "Cough");
        assert_eq!(snapshot[1].duration_days, 7);
    }
}
