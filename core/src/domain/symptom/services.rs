use tracing::info;

use crate::domain::{
    authentication::{ports::TokenRepository, value_objects::Identity},
    common::{
        entities::app_errors::CoreError,
        policies::{Action, Policy, ensure_policy},
        services::Service,
    },
    crypto::ports::HasherRepository,
    health::ports::HealthCheckRepository,
    patient::ports::PatientProfileRepository,
    prediction::ports::{LLMClient, PredictionRepository},
    symptom::{
        entities::SymptomEntry,
        ports::{SymptomRepository, SymptomService},
        value_objects::{AddSymptomInput, DeleteSymptomInput, GetSymptomsInput},
    },
    user::{entities::User, ports::UserRepository},
};

impl<U, PP, S, PR, H, T, HC, LLM> Service<U, PP, S, PR, H, T, HC, LLM>
where
    U: UserRepository,
    PP: PatientProfileRepository,
    S: SymptomRepository,
    PR: PredictionRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    pub(crate) async fn get_patient_user(&self, patient_id: uuid::Uuid) -> Result<User, CoreError> {
        self.user_repository
            .get_by_id(patient_id)
            .await?
            .filter(User::is_patient)
            .ok_or(CoreError::NotFound)
    }
}

impl<U, PP, S, PR, H, T, HC, LLM> SymptomService for Service<U, PP, S, PR, H, T, HC, LLM>
where
    U: UserRepository,
    PP: PatientProfileRepository,
    S: SymptomRepository,
    PR: PredictionRepository,
    H: HasherRepository,
    T: TokenRepository,
    HC: HealthCheckRepository,
    LLM: LLMClient,
{
    async fn add_symptom(
        &self,
        identity: Identity,
        input: AddSymptomInput,
    ) -> Result<SymptomEntry, CoreError> {
        ensure_policy(self.policy.authorize(&identity, &Action::RecordSymptom))?;

        let patient = self.get_patient_user(input.patient_id).await?;

        let symptom = SymptomEntry::new(
            patient.id,
            input.name,
            input.severity,
            input.duration_days,
            input.notes,
            identity.id(),
        )?;

        let symptom = self.symptom_repository.create_symptom(symptom).await?;

        info!(
            patient_id = %patient.id,
            symptom_id = %symptom.id,
            "symptom \"{}\" recorded",
            symptom.name
        );

        Ok(symptom)
    }

    async fn get_symptoms(
        &self,
        identity: Identity,
        input: GetSymptomsInput,
    ) -> Result<Vec<SymptomEntry>, CoreError> {
        ensure_policy(self.policy.authorize(
            &identity,
            &Action::ViewSymptoms {
                patient_id: input.patient_id,
            },
        ))?;

        let patient = self.get_patient_user(input.patient_id).await?;

        self.symptom_repository.list_by_patient(patient.id).await
    }

    async fn delete_symptom(
        &self,
        identity: Identity,
        input: DeleteSymptomInput,
    ) -> Result<(), CoreError> {
        let symptom = self
            .symptom_repository
            .get_by_id(input.symptom_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(self.policy.authorize(
            &identity,
            &Action::DeleteSymptom {
                patient_id: symptom.patient_id,
            },
        ))?;

        self.symptom_repository.delete_symptom(symptom.id).await?;

        info!(symptom_id = %symptom.id, "symptom deleted");

        Ok(())
    }
}
