use chrono::NaiveDate;
use uuid::Uuid;

pub struct RegisterPatientInput {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub age: Option<i32>,
    pub gender: String,
    pub date_of_birth: Option<NaiveDate>,
    pub medical_history: Option<String>,
    pub blood_group: Option<String>,
    pub emergency_contact: Option<String>,
}

pub struct GetPatientsInput {
    pub search: Option<String>,
}

pub struct GetPatientInput {
    pub patient_id: Uuid,
}
