use uuid::Uuid;

use crate::domain::symptom::entities::Severity;

pub struct AddSymptomInput {
    pub patient_id: Uuid,
    pub name: String,
    pub severity: Severity,
    pub duration_days: i32,
    pub notes: Option<String>,
}

pub struct GetSymptomsInput {
    pub patient_id: Uuid,
}

pub struct DeleteSymptomInput {
    pub symptom_id: Uuid,
}
