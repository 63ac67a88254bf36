use sea_orm::{
    ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    symptom::{entities::SymptomEntry, ports::SymptomRepository},
};
use crate::entity::symptom_records::{
    ActiveModel as SymptomRecordActiveModel, Column as SymptomRecordColumn,
    Entity as SymptomRecordEntity,
};
use crate::infrastructure::db::storage_error;

#[derive(Debug, Clone)]
pub struct PostgresSymptomRepository {
    pub db: DatabaseConnection,
}

impl PostgresSymptomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl SymptomRepository for PostgresSymptomRepository {
    async fn create_symptom(&self, symptom: SymptomEntry) -> Result<SymptomEntry, CoreError> {
        let model = SymptomRecordEntity::insert(SymptomRecordActiveModel {
            id: Set(symptom.id),
            patient_id: Set(symptom.patient_id),
            name: Set(symptom.name),
            severity: Set(symptom.severity.as_i16()),
            duration_days: Set(symptom.duration_days),
            notes: Set(symptom.notes),
            recorded_by: Set(symptom.recorded_by),
            recorded_at: Set(symptom.recorded_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map_err(|e| storage_error("create symptom record", e))?;

        SymptomEntry::try_from(model)
    }

    async fn get_by_id(&self, symptom_id: Uuid) -> Result<Option<SymptomEntry>, CoreError> {
        SymptomRecordEntity::find_by_id(symptom_id)
            .one(&self.db)
            .await
            .map_err(|e| storage_error("get symptom record", e))?
            .map(SymptomEntry::try_from)
            .transpose()
    }

    async fn list_by_patient(&self, patient_id: Uuid) -> Result<Vec<SymptomEntry>, CoreError> {
        SymptomRecordEntity::find()
            .filter(SymptomRecordColumn::PatientId.eq(patient_id))
            .order_by_desc(SymptomRecordColumn::RecordedAt)
            .all(&self.db)
            .await
            .map_err(|e| storage_error("list symptom records", e))?
            .iter()
            .map(SymptomEntry::try_from)
            .collect()
    }

    async fn delete_symptom(&self, symptom_id: Uuid) -> Result<(), CoreError> {
        SymptomRecordEntity::delete_by_id(symptom_id)
            .exec(&self.db)
            .await
            .map_err(|e| storage_error("delete symptom record", e))?;

        Ok(())
    }
}
