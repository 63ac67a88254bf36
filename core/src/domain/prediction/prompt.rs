use serde_json::json;

use crate::domain::symptom::entities::SymptomSet;

pub const DEFAULT_PATIENT_AGE: i32 = 30;
pub const DEFAULT_PATIENT_GENDER: &str = "other";

const PREDICTION_TEMPLATE: &str = r#"You are a medical AI assistant. Analyze the symptoms below and give a risk assessment in JSON format.

Patient: {patient_age} years old, {patient_gender}
Symptoms: {symptoms}

Answer with exactly this JSON structure:
{
    "primary_diagnosis": "Most likely disease name",
    "confidence_percentage": 75,
    "risk_level": "low/medium/high/critical",
    "explanation": "Brief medical explanation",
    "recommended_tests": ["Test 1", "Test 2"],
    "lifestyle_recommendations": ["Advice 1", "Advice 2"],
    "specialist_referral": "Type of specialist",
    "when_to_seek_care": "When to visit a doctor"
}

IMPORTANT: Return ONLY valid JSON, no other text."#;

/// `name (severity: S, D days)` for every entry, comma separated.
pub fn describe_symptoms(symptoms: &SymptomSet) -> String {
    symptoms
        .entries()
        .iter()
        .map(|s| {
            format!(
                "{} (severity: {}, {} days)",
                s.name,
                s.severity.label(),
                s.duration_days
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn build_prediction_prompt(symptoms: &SymptomSet, age: Option<i32>, gender: &str) -> String {
    let age = age.filter(|a| *a >= 0).unwrap_or(DEFAULT_PATIENT_AGE);
    let gender = match gender.trim() {
        "" => DEFAULT_PATIENT_GENDER,
        g => g,
    };

    PREDICTION_TEMPLATE
        .replace("{patient_age}", &age.to_string())
        .replace("{patient_gender}", gender)
        .replace("{symptoms}", &describe_symptoms(symptoms))
}

/// Returns the JSON schema for prediction LLM responses
pub fn prediction_response_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "primary_diagnosis": { "type": "string" },
            "confidence_percentage": { "type": "number" },
            "risk_level": {
                "type": "string",
                "enum": ["low", "medium", "high", "critical"]
            },
            "explanation": { "type": "string" },
            "recommended_tests": {
                "type": "array",
                "items": { "type": "string" }
            },
            "lifestyle_recommendations": {
                "type": "array",
                "items": { "type": "string" }
            },
            "specialist_referral": { "type": "string" },
            "when_to_seek_care": { "type": "string" }
        },
        "required": [
            "primary_diagnosis", "confidence_percentage", "risk_level", "explanation",
            "recommended_tests", "lifestyle_recommendations", "specialist_referral",
            "when_to_seek_care"
        ]
    })
}
