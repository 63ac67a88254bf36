use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    patient::{
        entities::{PatientDashboard, PatientDetail, PatientList, PatientProfile, RegisteredPatient},
        value_objects::{GetPatientInput, GetPatientsInput, RegisterPatientInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait PatientProfileRepository: Send + Sync {
    fn create_profile(
        &self,
        profile: PatientProfile,
    ) -> impl Future<Output = Result<PatientProfile, CoreError>> + Send;

    fn get_by_user_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<PatientProfile>, CoreError>> + Send;
}

pub trait PatientService: Send + Sync {
    fn register_patient(
        &self,
        identity: Identity,
        input: RegisterPatientInput,
    ) -> impl Future<Output = Result<RegisteredPatient, CoreError>> + Send;

    fn get_patients(
        &self,
        identity: Identity,
        input: GetPatientsInput,
    ) -> impl Future<Output = Result<PatientList, CoreError>> + Send;

    fn get_patient(
        &self,
        identity: Identity,
        input: GetPatientInput,
    ) -> impl Future<Output = Result<PatientDetail, CoreError>> + Send;

    fn get_dashboard(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<PatientDashboard, CoreError>> + Send;
}
