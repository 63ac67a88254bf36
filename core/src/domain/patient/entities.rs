use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{
    common::generate_timestamp, prediction::entities::Prediction, symptom::entities::SymptomEntry,
    user::entities::User,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatientProfile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub registered_by: Option<Uuid>,
    pub registration_date: DateTime<Utc>,
    pub medical_history: String,
    pub blood_group: String,
    pub emergency_contact: String,
}

impl PatientProfile {
    pub fn new(
        user_id: Uuid,
        registered_by: Option<Uuid>,
        medical_history: String,
        blood_group: String,
        emergency_contact: String,
    ) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            user_id,
            registered_by,
            registration_date: now,
            medical_history,
            blood_group,
            emergency_contact,
        }
    }

    /// Profile created lazily when a patient opens their dashboard without one.
    pub fn empty_for(user_id: Uuid) -> Self {
        Self::new(user_id, None, String::new(), String::new(), String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegisteredPatient {
    pub patient: User,
    pub profile: PatientProfile,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientList {
    pub patients: Vec<User>,
    pub total_patients: u64,
    pub search_query: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientDetail {
    pub patient: User,
    pub profile: PatientProfile,
    pub symptoms: Vec<SymptomEntry>,
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PatientDashboard {
    pub profile: PatientProfile,
    pub symptoms: Vec<SymptomEntry>,
    pub predictions: Vec<Prediction>,
    pub latest_prediction: Option<Prediction>,
    pub total_symptoms: usize,
    pub total_predictions: usize,
}

impl PatientDashboard {
    pub fn new(
        profile: PatientProfile,
        symptoms: Vec<SymptomEntry>,
        predictions: Vec<Prediction>,
    ) -> Self {
        Self {
            latest_prediction: predictions.first().cloned(),
            total_symptoms: symptoms.len(),
            total_predictions: predictions.len(),
            profile,
            symptoms,
            predictions,
        }
    }
}
