use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterAdminValidator {
    #[validate(length(min = 1, max = 150, message = "username is required"))]
    pub username: String,

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
    pub date_of_birth: Option<NaiveDate>,

    #[validate(length(min = 8, message = "password must be at least 8 characters"))]
    pub password: String,

    #[validate(must_match(other = "password", message = "passwords do not match"))]
    pub password_confirmation: String,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct LoginValidator {
    #[validate(length(min = 1, message = "username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegisterAdminValidator {
        RegisterAdminValidator {
            username: "dr.grey".to_string(),
            email: Some("grey@clinic.test".to_string()),
            first_name: "Meredith".to_string(),
            last_name: "Grey".to_string(),
            phone_number: "0700000002".to_string(),
            age: Some(35),
            date_of_birth: None,
            password: "long-enough".to_string(),
            password_confirmation: "long-enough".to_string(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(registration().validate().is_ok());
    }

    #[test]
    fn test_mismatched_confirmation_fails() {
        let mut payload = registration();
        payload.password_confirmation = "different".to_string();

        let errors = payload.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("password_confirmation"));
    }

    #[test]
    fn test_bad_email_and_short_password_fail() {
        let mut payload = registration();
        payload.email = Some("not-an-email".to_string());
        payload.password = "short".to_string();
        payload.password_confirmation = "short".to_string();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
