use serde_json::{Map, Value};
use uuid::Uuid;

use crate::domain::{
    prediction::entities::{Prediction, PredictionResult, RiskLevel},
    symptom::entities::SymptomSet,
};

/// Column width of `primary_diagnosis` and `specialist_referral`.
pub const SHORT_TEXT_MAX_CHARS: usize = 200;

/// Builds a complete result from whatever fields the model returned.
/// Missing or malformed fields fall back to the `PredictionResult` defaults;
/// confidence is clamped into 0..=100 and the short text fields are cut to
/// [`SHORT_TEXT_MAX_CHARS`].
pub fn normalize_payload(fields: &Map<String, Value>) -> PredictionResult {
    let defaults = PredictionResult::default();

    PredictionResult {
        primary_diagnosis: text_field(fields, "primary_diagnosis")
            .filter(|d| !d.is_empty())
            .map(|d| truncate_chars(d, SHORT_TEXT_MAX_CHARS))
            .unwrap_or(defaults.primary_diagnosis),
        confidence_percentage: fields
            .get("confidence_percentage")
            .and_then(confidence)
            .unwrap_or(defaults.confidence_percentage),
        risk_level: fields
            .get("risk_level")
            .and_then(Value::as_str)
            .and_then(RiskLevel::from_label)
            .unwrap_or(defaults.risk_level),
        explanation: text_field(fields, "explanation").unwrap_or_default(),
        recommended_tests: list_field(fields, "recommended_tests"),
        lifestyle_recommendations: list_field(fields, "lifestyle_recommendations"),
        specialist_referral: text_field(fields, "specialist_referral")
            .map(|r| truncate_chars(r, SHORT_TEXT_MAX_CHARS))
            .unwrap_or_default(),
        when_to_seek_care: text_field(fields, "when_to_seek_care").unwrap_or_default(),
    }
}

pub fn build_prediction(
    patient_id: Uuid,
    predicted_by: Uuid,
    result: PredictionResult,
    symptoms: &SymptomSet,
    raw_response: String,
) -> Prediction {
    Prediction::new(
        patient_id,
        predicted_by,
        result,
        symptoms.snapshot(),
        raw_response,
    )
}

/// Storage form of the list-valued fields.
pub fn join_lines(items: &[String]) -> String {
    items.join("\n")
}

pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn truncate_chars(text: String, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => text[..end].trim_end().to_string(),
        None => text,
    }
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    match fields.get(key)? {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    }
}

fn list_field(fields: &Map<String, Value>, key: &str) -> Vec<String> {
    match fields.get(key) {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Null => None,
                Value::String(s) => Some(s.trim().to_string()),
                other => Some(other.to_string()),
            })
            .filter(|item| !item.is_empty())
            .collect(),
        Some(Value::String(s)) if !s.trim().is_empty() => vec![s.trim().to_string()],
        _ => Vec::new(),
    }
}

fn confidence(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse::<f64>().ok()?,
        _ => return None,
    };

    number.is_finite().then(|| number.clamp(0.0, 100.0))
}
