use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, symptom::entities::AnalyzedSymptom};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Lenient parse of a label coming back from the model.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" | "moderate" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            "critical" => Some(RiskLevel::Critical),
            _ => None,
        }
    }
}

impl From<&str> for RiskLevel {
    fn from(s: &str) -> Self {
        RiskLevel::from_label(s).unwrap_or_default()
    }
}

/// The eight-field assessment the model is asked to return.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PredictionResult {
    pub primary_diagnosis: String,
    pub confidence_percentage: f64,
    pub risk_level: RiskLevel,
    pub explanation: String,
    pub recommended_tests: Vec<String>,
    pub lifestyle_recommendations: Vec<String>,
    pub specialist_referral: String,
    pub when_to_seek_care: String,
}

impl Default for PredictionResult {
    fn default() -> Self {
        Self {
            primary_diagnosis: "Unknown".to_string(),
            confidence_percentage: 0.0,
            risk_level: RiskLevel::Medium,
            explanation: String::new(),
            recommended_tests: Vec::new(),
            lifestyle_recommendations: Vec::new(),
            specialist_referral: String::new(),
            when_to_seek_care: String::new(),
        }
    }
}

/// A persisted assessment for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Prediction {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub predicted_by: Option<Uuid>,
    #[serde(flatten)]
    pub result: PredictionResult,
    pub symptoms_analyzed: Vec<AnalyzedSymptom>,
    /// Exactly what came back from the AI pipeline, sentinel text included.
    pub raw_response: String,
    pub created_at: DateTime<Utc>,
}

impl Prediction {
    pub fn new(
        patient_id: Uuid,
        predicted_by: Uuid,
        result: PredictionResult,
        symptoms_analyzed: Vec<AnalyzedSymptom>,
        raw_response: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            patient_id,
            predicted_by: Some(predicted_by),
            result,
            symptoms_analyzed,
            raw_response,
            created_at: now,
        }
    }
}
