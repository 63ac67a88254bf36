use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    patient::{entities::PatientProfile, ports::PatientProfileRepository},
};
use crate::entity::patient_profiles::{
    ActiveModel as PatientProfileActiveModel, Column as PatientProfileColumn,
    Entity as PatientProfileEntity,
};
use crate::infrastructure::db::storage_error;

#[derive(Debug, Clone)]
pub struct PostgresPatientProfileRepository {
    pub db: DatabaseConnection,
}

impl PostgresPatientProfileRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl PatientProfileRepository for PostgresPatientProfileRepository {
    async fn create_profile(&self, profile: PatientProfile) -> Result<PatientProfile, CoreError> {
        PatientProfileEntity::insert(PatientProfileActiveModel {
            id: Set(profile.id),
            user_id: Set(profile.user_id),
            registered_by: Set(profile.registered_by),
            registration_date: Set(profile.registration_date.naive_utc()),
            medical_history: Set(profile.medical_history),
            blood_group: Set(profile.blood_group),
            emergency_contact: Set(profile.emergency_contact),
        })
        .exec_with_returning(&self.db)
        .await
        .map(PatientProfile::from)
        .map_err(|e| storage_error("create patient profile", e))
    }

    async fn get_by_user_id(&self, user_id: Uuid) -> Result<Option<PatientProfile>, CoreError> {
        let profile = PatientProfileEntity::find()
            .filter(PatientProfileColumn::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| storage_error("get patient profile", e))?
            .map(PatientProfile::from);

        Ok(profile)
    }
}
