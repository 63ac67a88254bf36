use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];
const GENDERS: [&str; 3] = ["male", "female", "other"];

fn validate_blood_group(value: &str) -> Result<(), ValidationError> {
    if BLOOD_GROUPS.contains(&value) {
        return Ok(());
    }

    Err(ValidationError::new("blood_group")
        .with_message("blood_group must be one of A+, A-, B+, B-, AB+, AB-, O+, O-".into()))
}

fn validate_gender(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || GENDERS.contains(&value) {
        return Ok(());
    }

    Err(ValidationError::new("gender").with_message("gender must be male, female or other".into()))
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterPatientValidator {
    #[validate(length(min = 1, max = 150, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,

    #[serde(default)]
    #[validate(email(message = "email must be valid"))]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 150, message = "first_name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 150, message = "last_name is required"))]
    pub last_name: String,

    #[serde(default)]
    #[validate(length(max = 20, message = "phone_number is too long"))]
    pub phone_number: String,

    #[serde(default)]
    #[validate(range(min = 0, max = 150, message = "age must be between 0 and 150"))]
    pub age: Option<i32>,

    #[serde(default)]
    #[validate(custom(function = "validate_gender"))]
    pub gender: String,

    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,

    #[serde(default)]
    pub medical_history: Option<String>,

    #[serde(default)]
    #[validate(custom(function = "validate_blood_group"))]
    pub blood_group: Option<String>,

    #[serde(default)]
    #[validate(length(max = 20, message = "emergency_contact is too long"))]
    pub emergency_contact: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegisterPatientValidator {
        RegisterPatientValidator {
            username: "jdoe".to_string(),
            password: "patient-pass".to_string(),
            email: None,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            phone_number: "0711111111".to_string(),
            age: Some(28),
            gender: "female".to_string(),
            date_of_birth: None,
            medical_history: None,
            blood_group: Some("O+".to_string()),
            emergency_contact: None,
        }
    }

    #[test]
    fn test_valid_patient_passes() {
        assert!(registration().validate().is_ok());
    }

    #[test]
    fn test_unknown_blood_group_fails() {
        let mut payload = registration();
        payload.blood_group = Some("C+".to_string());

        let errors = payload.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("blood_group"));
    }

    #[test]
    fn test_blank_gender_is_allowed_and_unknown_gender_is_not() {
        let mut payload = registration();
        payload.gender = String::new();
        assert!(payload.validate().is_ok());

        payload.gender = "robot".to_string();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("gender"));
    }

    #[test]
    fn test_negative_age_fails() {
        let mut payload = registration();
        payload.age = Some(-1);

        assert!(payload.validate().is_err());
    }
}
