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
    prediction::{
        assessment::consult_ai,
        entities::Prediction,
        ports::{LLMClient, PredictionRepository, PredictionService},
        prompt::build_prediction_prompt,
        recorder::build_prediction,
        value_objects::{GeneratePredictionInput, GetPredictionInput, GetPredictionsInput},
    },
    symptom::{entities::SymptomSet, ports::SymptomRepository},
    user::ports::UserRepository,
};

impl<U, PP, S, PR, H, T, HC, LLM> PredictionService for Service<U, PP, S, PR, H, T, HC, LLM>
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
    async fn generate_prediction(
        &self,
        identity: Identity,
        input: GeneratePredictionInput,
    ) -> Result<Prediction, CoreError> {
        ensure_policy(self.policy.authorize(&identity, &Action::GeneratePrediction))?;

        let patient = self.get_patient_user(input.patient_id).await?;

        let symptoms =
            SymptomSet::new(self.symptom_repository.list_by_patient(patient.id).await?)?;

        let prompt = build_prediction_prompt(&symptoms, patient.age, &patient.gender);
        let outcome = consult_ai(&self.llm_client, prompt).await;

        let prediction = self
            .prediction_repository
            .create_prediction(build_prediction(
                patient.id,
                identity.id(),
                outcome.result,
                &symptoms,
                outcome.raw_response,
            ))
            .await?;

        info!(
            patient_id = %patient.id,
            prediction_id = %prediction.id,
            symptoms = symptoms.entries().len(),
            failed = outcome.failure.is_some(),
            "prediction \"{}\" recorded",
            prediction.result.primary_diagnosis
        );

        Ok(prediction)
    }

    async fn get_prediction(
        &self,
        identity: Identity,
        input: GetPredictionInput,
    ) -> Result<Prediction, CoreError> {
        let prediction = self
            .prediction_repository
            .get_by_id(input.prediction_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(self.policy.authorize(
            &identity,
            &Action::ViewPrediction {
                patient_id: prediction.patient_id,
            },
        ))?;

        Ok(prediction)
    }

    async fn get_predictions(
        &self,
        identity: Identity,
        input: GetPredictionsInput,
    ) -> Result<Vec<Prediction>, CoreError> {
        ensure_policy(self.policy.authorize(
            &identity,
            &Action::ViewPrediction {
                patient_id: input.patient_id,
            },
        ))?;

        let patient = self.get_patient_user(input.patient_id).await?;

        self.prediction_repository.list_by_patient(patient.id).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use uuid::Uuid;

    use super::*;
    use crate::domain::{
        common::test_utils::{
            ServiceMocks, admin_user, patient_user, prediction_for, ready, symptom_for,
        },
        prediction::{entities::RiskLevel, ports::LLMReadiness},
        symptom::entities::Severity,
        user::entities::User,
    };

    const VALID_REPLY: &str = r#"Based on the symptoms:
{"primary_diagnosis": "Influenza", "confidence_percentage": 78, "risk_level": "high", "explanation": "Fever and cough", "recommended_tests": ["Rapid flu test"], "lifestyle_recommendations": ["Rest"], "specialist_referral": "General Practitioner", "when_to_seek_care": "If breathing worsens"}
Take care."#;

    fn patient_with_symptoms(mocks: &mut ServiceMocks, patient: User) {
        let patient_id = patient.id;
        mocks
            .user_repository
            .expect_get_by_id()
            .with(eq(patient_id))
            .returning(move |_| ready(Ok(Some(patient.clone()))));
        mocks
            .symptom_repository
            .expect_list_by_patient()
            .with(eq(patient_id))
            .returning(|id| {
                ready(Ok(vec![
                    symptom_for(id, "Fever", Severity::Severe, 3),
                    symptom_for(id, "Cough", Severity::Moderate, 5),
                ]))
            });
    }

    fn answering_client(mocks: &mut ServiceMocks, reply: &'static str) {
        mocks
            .llm_client
            .expect_readiness()
            .returning(|| LLMReadiness::Ready);
        mocks
            .llm_client
            .expect_generate()
            .returning(move |_, _| ready(Ok(reply.to_string())));
    }

    fn storing_predictions(mocks: &mut ServiceMocks, times: usize) {
        mocks
            .prediction_repository
            .expect_create_prediction()
            .times(times)
            .returning(|prediction| ready(Ok(prediction)));
    }

    #[tokio::test]
    async fn test_generate_prediction_stores_parsed_assessment() {
        let admin = admin_user();
        let admin_id = admin.id;
        let patient = patient_user();
        let patient_id = patient.id;

        let mut mocks = ServiceMocks::new();
        patient_with_symptoms(&mut mocks, patient);
        mocks
            .llm_client
            .expect_readiness()
            .returning(|| LLMReadiness::Ready);
        mocks
            .llm_client
            .expect_generate()
            .withf(|prompt, schema| {
                prompt.contains("Fever (severity: Severe, 3 days)")
                    && schema["required"].as_array().map(Vec::len) == Some(8)
            })
            .times(1)
            .returning(|_, _| ready(Ok(VALID_REPLY.to_string())));
        storing_predictions(&mut mocks, 1);

        let prediction = mocks
            .into_service()
            .generate_prediction(Identity::new(admin), GeneratePredictionInput { patient_id })
            .await
            .unwrap();

        assert_eq!(prediction.patient_id, patient_id);
        assert_eq!(prediction.predicted_by, Some(admin_id));
        assert_eq!(prediction.result.primary_diagnosis, "Influenza");
        assert_eq!(prediction.result.risk_level, RiskLevel::High);
        assert!((0.0..=100.0).contains(&prediction.result.confidence_percentage));
        assert_eq!(prediction.symptoms_analyzed.len(), 2);
        assert_eq!(prediction.symptoms_analyzed[0].name, "Fever");
        assert!(prediction.raw_response.starts_with('{'));
    }

    #[tokio::test]
    async fn test_generate_prediction_without_symptoms_never_calls_ai() {
        let patient = patient_user();
        let patient_id = patient.id;

        let mut mocks = ServiceMocks::new();
        mocks
            .user_repository
            .expect_get_by_id()
            .returning(move |_| ready(Ok(Some(patient.clone()))));
        mocks
            .symptom_repository
            .expect_list_by_patient()
            .returning(|_| ready(Ok(vec![])));
        mocks.llm_client.expect_readiness().times(0);
        mocks.llm_client.expect_generate().times(0);
        storing_predictions(&mut mocks, 0);

        let result = mocks
            .into_service()
            .generate_prediction(
                Identity::new(admin_user()),
                GeneratePredictionInput { patient_id },
            )
            .await;

        assert_eq!(result, Err(CoreError::NoSymptomsRecorded));
    }

    #[tokio::test]
    async fn test_missing_credential_stores_configuration_sentinel() {
        let patient = patient_user();
        let patient_id = patient.id;

        let mut mocks = ServiceMocks::new();
        patient_with_symptoms(&mut mocks, patient);
        mocks
            .llm_client
            .expect_readiness()
            .returning(|| LLMReadiness::MissingCredential);
        mocks.llm_client.expect_generate().times(0);
        storing_predictions(&mut mocks, 1);

        let prediction = mocks
            .into_service()
            .generate_prediction(
                Identity::new(admin_user()),
                GeneratePredictionInput { patient_id },
            )
            .await
            .unwrap();

        assert_eq!(prediction.result.primary_diagnosis, "Configuration Error");
        assert_eq!(prediction.result.confidence_percentage, 0.0);
        assert_eq!(prediction.result.risk_level, RiskLevel::Medium);
        assert_eq!(prediction.raw_response, "API Key not configured");
    }

    #[tokio::test]
    async fn test_unparseable_reply_stores_parse_sentinel() {
        let patient = patient_user();
        let patient_id = patient.id;

        let mut mocks = ServiceMocks::new();
        patient_with_symptoms(&mut mocks, patient);
        answering_client(&mut mocks, "Sorry, {not json at all}");
        storing_predictions(&mut mocks, 1);

        let prediction = mocks
            .into_service()
            .generate_prediction(
                Identity::new(admin_user()),
                GeneratePredictionInput { patient_id },
            )
            .await
            .unwrap();

        assert_eq!(prediction.result.primary_diagnosis, "Parse Error");
        assert!(prediction.raw_response.starts_with("Parse Error: "));
    }

    #[tokio::test]
    async fn test_repeated_generation_creates_distinct_predictions() {
        let patient = patient_user();
        let patient_id = patient.id;
        let admin = admin_user();

        let mut mocks = ServiceMocks::new();
        patient_with_symptoms(&mut mocks, patient);
        answering_client(&mut mocks, VALID_REPLY);
        storing_predictions(&mut mocks, 2);

        let service = mocks.into_service();
        let first = service
            .generate_prediction(
                Identity::new(admin.clone()),
                GeneratePredictionInput { patient_id },
            )
            .await
            .unwrap();
        let second = service
            .generate_prediction(Identity::new(admin), GeneratePredictionInput { patient_id })
            .await
            .unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(first.result, second.result);
    }

    #[tokio::test]
    async fn test_patient_cannot_generate_predictions() {
        let patient = patient_user();
        let patient_id = patient.id;

        let mut mocks = ServiceMocks::new();
        mocks.llm_client.expect_generate().times(0);

        let result = mocks
            .into_service()
            .generate_prediction(Identity::new(patient), GeneratePredictionInput { patient_id })
            .await;

        assert!(matches!(result, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_unknown_patient_is_not_found() {
        let mut mocks = ServiceMocks::new();
        mocks
            .user_repository
            .expect_get_by_id()
            .returning(|_| ready(Ok(None)));
        mocks.llm_client.expect_generate().times(0);

        let result = mocks
            .into_service()
            .generate_prediction(
                Identity::new(admin_user()),
                GeneratePredictionInput {
                    patient_id: Uuid::new_v4(),
                },
            )
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_patient_reads_own_prediction_only() {
        let patient = patient_user();
        let own = prediction_for(patient.id);
        let own_id = own.id;
        let foreign = prediction_for(Uuid::new_v4());
        let foreign_id = foreign.id;

        let mut mocks = ServiceMocks::new();
        mocks
            .prediction_repository
            .expect_get_by_id()
            .with(eq(own_id))
            .returning(move |_| ready(Ok(Some(own.clone()))));
        mocks
            .prediction_repository
            .expect_get_by_id()
            .with(eq(foreign_id))
            .returning(move |_| ready(Ok(Some(foreign.clone()))));

        let service = mocks.into_service();
        let identity = Identity::new(patient);

        let found = service
            .get_prediction(
                identity.clone(),
                GetPredictionInput {
                    prediction_id: own_id,
                },
            )
            .await
            .unwrap();
        assert_eq!(found.id, own_id);

        let denied = service
            .get_prediction(
                identity,
                GetPredictionInput {
                    prediction_id: foreign_id,
                },
            )
            .await;
        assert!(matches!(denied, Err(CoreError::Forbidden(_))));
    }

    #[tokio::test]
    async fn test_get_predictions_lists_newest_first() {
        let patient = patient_user();
        let patient_id = patient.id;
        let older = prediction_for(patient_id);
        let newer = prediction_for(patient_id);
        let expected = vec![newer.id, older.id];

        let mut mocks = ServiceMocks::new();
        mocks
            .user_repository
            .expect_get_by_id()
            .returning(move |_| ready(Ok(Some(patient.clone()))));
        mocks
            .prediction_repository
            .expect_list_by_patient()
            .with(eq(patient_id))
            .returning(move |_| ready(Ok(vec![newer.clone(), older.clone()])));

        let predictions = mocks
            .into_service()
            .get_predictions(
                Identity::new(admin_user()),
                GetPredictionsInput { patient_id },
            )
            .await
            .unwrap();

        assert_eq!(
            predictions.iter().map(|p| p.id).collect::<Vec<_>>(),
            expected
        );
    }
}
