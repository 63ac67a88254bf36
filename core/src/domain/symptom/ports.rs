use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    symptom::{
        entities::SymptomEntry,
        value_objects::{AddSymptomInput, DeleteSymptomInput, GetSymptomsInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait SymptomRepository: Send + Sync {
    fn create_symptom(
        &self,
        symptom: SymptomEntry,
    ) -> impl Future<Output = Result<SymptomEntry, CoreError>> + Send;

    fn get_by_id(
        &self,
        symptom_id: Uuid,
    ) -> impl Future<Output = Result<Option<SymptomEntry>, CoreError>> + Send;

    /// Newest entries first.
    fn list_by_patient(
        &self,
        patient_id: Uuid,
    ) -> impl Future<Output = Result<Vec<SymptomEntry>, CoreError>> + Send;

    fn delete_symptom(&self, symptom_id: Uuid)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait SymptomService: Send + Sync {
    fn add_symptom(
        &self,
        identity: Identity,
        input: AddSymptomInput,
    ) -> impl Future<Output = Result<SymptomEntry, CoreError>> + Send;

    fn get_symptoms(
        &self,
        identity: Identity,
        input: GetSymptomsInput,
    ) -> impl Future<Output = Result<Vec<SymptomEntry>, CoreError>> + Send;

    fn delete_symptom(
        &self,
        identity: Identity,
        input: DeleteSymptomInput,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
