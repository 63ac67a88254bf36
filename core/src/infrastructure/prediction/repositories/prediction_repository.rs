use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    prediction::{entities::Prediction, ports::PredictionRepository, recorder::join_lines},
};
use crate::entity::disease_predictions::{
    ActiveModel as DiseasePredictionActiveModel, Column as DiseasePredictionColumn,
    Entity as DiseasePredictionEntity,
};
use crate::infrastructure::db::storage_error;

#[derive(Debug, Clone)]
pub struct PostgresPredictionRepository {
    pub db: DatabaseConnection,
}

impl PostgresPredictionRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PredictionRepository for PostgresPredictionRepository {
    async fn create_prediction(&self, prediction: Prediction) -> Result<Prediction, CoreError> {
        let symptoms_analyzed = serde_json::to_value(&prediction.symptoms_analyzed).map_err(|e| {
            error!("Failed to serialize symptom snapshot: {}", e);
            CoreError::InternalServerError
        })?;
        let result = prediction.result;

        let model = DiseasePredictionEntity::insert(DiseasePredictionActiveModel {
            id: Set(prediction.id),
            patient_id: Set(prediction.patient_id),
            predicted_by: Set(prediction.predicted_by),
            primary_diagnosis: Set(result.primary_diagnosis),
            confidence_percentage: Set(result.confidence_percentage),
            risk_level: Set(result.risk_level.as_str().to_string()),
            explanation: Set(result.explanation),
            recommended_tests: Set(join_lines(&result.recommended_tests)),
            lifestyle_recommendations: Set(join_lines(&result.lifestyle_recommendations)),
            specialist_referral: Set(result.specialist_referral),
            when_to_seek_care: Set(result.when_to_seek_care),
            symptoms_analyzed: Set(symptoms_analyzed),
            raw_response: Set(prediction.raw_response),
            created_at: Set(prediction.created_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| storage_error("create prediction", e))?;

        Prediction::try_from(model)
    }

    async fn get_by_id(&self, prediction_id: Uuid) -> Result<Option<Prediction>, CoreError> {
        DiseasePredictionEntity::find_by_id(prediction_id)
            .one(&self.db)
            .await
            .map_err(|e| storage_error("get prediction", e))?
            .map(Prediction::try_from)
            .transpose()
    }

    async fn list_by_patient(&self, patient_id: Uuid) -> Result<Vec<Prediction>, CoreError> {
        DiseasePredictionEntity::find()
            .filter(DiseasePredictionColumn::PatientId.eq(patient_id))
            .order_by_desc(DiseasePredictionColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| storage_error("list predictions", e))?
            .iter()
            .map(Prediction::try_from)
            .collect()
    }
}
