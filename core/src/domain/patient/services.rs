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
    patient::{
        entities::{
            PatientDashboard, PatientDetail, PatientList, PatientProfile, RegisteredPatient,
        },
        ports::{PatientProfileRepository, PatientService},
        value_objects::{GetPatientInput, GetPatientsInput, RegisterPatientInput},
    },
    prediction::ports::{LLMClient, PredictionRepository},
    symptom::ports::SymptomRepository,
    user::{
        entities::{User, UserType},
        ports::UserRepository,
        value_objects::{CreateUserRequest, PatientSearch},
    },
};

impl<U, PP, S, PR, H, T, HC, LLM> PatientService for Service<U, PP, S, PR, H, T, HC, LLM>
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
    async fn register_patient(
        &self,
        identity: Identity,
        input: RegisterPatientInput,
    ) -> Result<RegisteredPatient, CoreError> {
        ensure_policy(self.policy.authorize(&identity, &Action::ManagePatients))?;

        if input.password.is_empty() {
            return Err(CoreError::Invalid("password is required".to_string()));
        }

        if self
            .user_repository
            .get_by_username(input.username.clone())
            .await?
            .is_some()
        {
            return Err(CoreError::AlreadyExists);
        }

        let password_hash = self.hasher_repository.hash_password(input.password).await?;

        let patient = self
            .user_repository
            .create_user(User::new(CreateUserRequest {
                username: input.username,
                email: input.email,
                first_name: input.first_name,
                last_name: input.last_name,
                phone_number: input.phone_number,
                age: input.age,
                gender: input.gender,
                date_of_birth: input.date_of_birth,
                user_type: UserType::Patient,
                password_hash,
            }))
            .await?;

        let profile = self
            .patient_profile_repository
            .create_profile(PatientProfile::new(
                patient.id,
                Some(identity.id()),
                input.medical_history.unwrap_or_default(),
                input.blood_group.unwrap_or_default(),
                input.emergency_contact.unwrap_or_default(),
            ))
            .await?;

        info!(
            patient_id = %patient.id,
            registered_by = %identity.id(),
            "patient {} registered",
            patient.full_name()
        );

        Ok(RegisteredPatient { patient, profile })
    }

    async fn get_patients(
        &self,
        identity: Identity,
        input: GetPatientsInput,
    ) -> Result<PatientList, CoreError> {
        ensure_policy(self.policy.authorize(&identity, &Action::ManagePatients))?;

        let search = PatientSearch {
            query: input.search,
        };
        let patients = self.user_repository.find_patients(search.clone()).await?;
        let total_patients = self.user_repository.count_patients().await?;

        Ok(PatientList {
            patients,
            total_patients,
            search_query: search.query,
        })
    }

    async fn get_patient(
        &self,
        identity: Identity,
        input: GetPatientInput,
    ) -> Result<PatientDetail, CoreError> {
        ensure_policy(self.policy.authorize(&identity, &Action::ManagePatients))?;

        let patient = self.get_patient_user(input.patient_id).await?;

        let profile = self
            .patient_profile_repository
            .get_by_user_id(patient.id)
            .await?
            .ok_or(CoreError::NotFound)?;

        let symptoms = self.symptom_repository.list_by_patient(patient.id).await?;
        let predictions = self
            .prediction_repository
            .list_by_patient(patient.id)
            .await?;

        Ok(PatientDetail {
            patient,
            profile,
            symptoms,
            predictions,
        })
    }

    async fn get_dashboard(&self, identity: Identity) -> Result<PatientDashboard, CoreError> {
        ensure_policy(self.policy.authorize(&identity, &Action::ViewOwnDashboard))?;

        let profile = match self
            .patient_profile_repository
            .get_by_user_id(identity.id())
            .await?
        {
            Some(profile) => profile,
            None => {
                self.patient_profile_repository
                    .create_profile(PatientProfile::empty_for(identity.id()))
                    .await?
            }
        };

        let symptoms = self
            .symptom_repository
            .list_by_patient(identity.id())
            .await?;
        let predictions = self
            .prediction_repository
            .list_by_patient(identity.id())
            .await?;

        Ok(PatientDashboard::new(profile, symptoms, predictions))
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::{
        common::test_utils::{
            ServiceMocks, admin_user, patient_user, prediction_for, ready, symptom_for,
        },
        symptom::entities::Severity,
    };

    fn registration(username: &str) -> RegisterPatientInput {
        RegisterPatientInput {
            username: username.to_string(),
            password: "s3cret-pass".to_string(),
            email: None,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone_number: "0700000000".to_string(),
            age: Some(36),
            gender: "female".to_string(),
            date_of_birth: None,
            medical_history: Some("asthma".to_string()),
            blood_group: None,
            emergency_contact: None,
        }
    }

    #[tokio::test]
    async fn test_register_patient_creates_user_and_profile() {
        let admin = admin_user();
        let admin_id = admin.id;

        let mut mocks = ServiceMocks::new();
        mocks
            .user_repository
            .expect_get_by_username()
            .with(eq("ada".to_string()))
            .returning(|_| ready(Ok(None)));
        mocks
            .hasher_repository
            .expect_hash_password()
            .returning(|password| ready(Ok(format!("hashed:{password}"))));
        mocks
            .user_repository
            .expect_create_user()
            .times(1)
            .returning(|user| ready(Ok(user)));
        mocks
            .patient_profile_repository
            .expect_create_profile()
            .times(1)
            .returning(|profile| ready(Ok(profile)));

        let registered = mocks
            .into_service()
            .register_patient(Identity::new(admin), registration("ada"))
            .await
            .unwrap();

        assert_eq!(registered.patient.user_type, UserType::Patient);
        assert_eq!(registered.patient.password_hash, "hashed:s3cret-pass");
        assert_eq!(registered.profile.user_id, registered.patient.id);
        assert_eq!(registered.profile.registered_by, Some(admin_id));
        assert_eq!(registered.profile.medical_history, "asthma");
    }

    #[tokio::test]
    async fn test_register_patient_rejects_taken_username() {
        let existing = patient_user();

        let mut mocks = ServiceMocks::new();
        mocks
            .user_repository
            .expect_get_by_username()
            .returning(move |_| ready(Ok(Some(existing.clone()))));
        mocks.user_repository.expect_create_user().times(0);

        let result = mocks
            .into_service()
            .register_patient(Identity::new(admin_user()), registration("taken"))
            .await;

        assert_eq!(result.unwrap_err(), CoreError::AlreadyExists);
    }

    #[tokio::test]
    async fn test_get_patients_passes_search_and_total() {
        let patient = patient_user();

        let mut mocks = ServiceMocks::new();
        mocks
            .user_repository
            .expect_find_patients()
            .withf(|search| search.term().as_deref() == Some("ada"))
            .returning(move |_| ready(Ok(vec![patient.clone()])));
        mocks
            .user_repository
            .expect_count_patients()
            .returning(|| ready(Ok(12)));

        let list = mocks
            .into_service()
            .get_patients(
                Identity::new(admin_user()),
                GetPatientsInput {
                    search: Some(" ADA ".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(list.patients.len(), 1);
        assert_eq!(list.total_patients, 12);
        assert_eq!(list.search_query.as_deref(), Some(" ADA "));
    }

    #[tokio::test]
    async fn test_dashboard_creates_missing_profile() {
        let patient = patient_user();
        let patient_id = patient.id;
        let older = prediction_for(patient_id);
        let newer = prediction_for(patient_id);
        let newer_id = newer.id;

        let mut mocks = ServiceMocks::new();
        mocks
            .patient_profile_repository
            .expect_get_by_user_id()
            .with(eq(patient_id))
            .returning(|_| ready(Ok(None)));
        mocks
            .patient_profile_repository
            .expect_create_profile()
            .times(1)
            .returning(|profile| ready(Ok(profile)));
        mocks
            .symptom_repository
            .expect_list_by_patient()
            .returning(move |id| {
                ready(Ok(vec![symptom_for(id, "Fatigue", Severity::Mild, 10)]))
            });
        mocks
            .prediction_repository
            .expect_list_by_patient()
            .returning(move |_| ready(Ok(vec![newer.clone(), older.clone()])));

        let dashboard = mocks
            .into_service()
            .get_dashboard(Identity::new(patient))
            .await
            .unwrap();

        assert_eq!(dashboard.profile.user_id, patient_id);
        assert_eq!(dashboard.total_symptoms, 1);
        assert_eq!(dashboard.total_predictions, 2);
        assert_eq!(dashboard.latest_prediction.map(|p| p.id), Some(newer_id));
    }

    #[tokio::test]
    async fn test_dashboard_is_patient_only() {
        let result = ServiceMocks::new()
            .into_service()
            .get_dashboard(Identity::new(admin_user()))
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }
}
