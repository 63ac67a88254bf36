use chrono::{TimeZone, Utc};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    prediction::{
        entities::{Prediction, PredictionResult, RiskLevel},
        recorder::split_lines,
    },
    symptom::entities::AnalyzedSymptom,
};
use crate::entity::disease_predictions::Model as DiseasePredictionModel;

impl TryFrom<&DiseasePredictionModel> for Prediction {
    type Error = CoreError;

    fn try_from(model: &DiseasePredictionModel) -> Result<Self, Self::Error> {
        let symptoms_analyzed =
            serde_json::from_value::<Vec<AnalyzedSymptom>>(model.symptoms_analyzed.clone())
                .map_err(|e| {
                    error!(prediction_id = %model.id, "unreadable symptom snapshot: {}", e);
                    CoreError::InternalServerError
                })?;

        Ok(Prediction {
            id: model.id,
            patient_id: model.patient_id,
            predicted_by: model.predicted_by,
            result: PredictionResult {
                primary_diagnosis: model.primary_diagnosis.clone(),
                confidence_percentage: model.confidence_percentage,
                risk_level: RiskLevel::from(model.risk_level.as_str()),
                explanation: model.explanation.clone(),
                recommended_tests: split_lines(&model.recommended_tests),
                lifestyle_recommendations: split_lines(&model.lifestyle_recommendations),
                specialist_referral: model.specialist_referral.clone(),
                when_to_seek_care: model.when_to_seek_care.clone(),
            },
            symptoms_analyzed,
            raw_response: model.raw_response.clone(),
            created_at: Utc.from_utc_datetime(&model.created_at),
        })
    }
}

impl TryFrom<DiseasePredictionModel> for Prediction {
    type Error = CoreError;

    fn try_from(model: DiseasePredictionModel) -> Result<Self, Self::Error> {
        Prediction::try_from(&model)
    }
}
