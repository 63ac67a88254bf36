use chrono::{TimeZone, Utc};

use crate::domain::patient::entities::PatientProfile;
use crate::entity::patient_profiles::Model as PatientProfileModel;

impl From<&PatientProfileModel> for PatientProfile {
    fn from(model: &PatientProfileModel) -> Self {
        PatientProfile {
            id: model.id,
            user_id: model.user_id,
            registered_by: model.registered_by,
            registration_date: Utc.from_utc_datetime(&model.registration_date),
            medical_history: model.medical_history.clone(),
            blood_group: model.blood_group.clone(),
            emergency_contact: model.emergency_contact.clone(),
        }
    }
}

impl From<PatientProfileModel> for PatientProfile {
    fn from(model: PatientProfileModel) -> Self {
        PatientProfile::from(&model)
    }
}
