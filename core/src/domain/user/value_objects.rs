use chrono::NaiveDate;

use crate::domain::user::entities::UserType;

#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub age: Option<i32>,
    pub gender: String,
    pub date_of_birth: Option<NaiveDate>,
    pub user_type: UserType,
    pub password_hash: String,
}

/// Case-insensitive substring matched against username, names and phone.
#[derive(Debug, Clone, Default)]
pub struct PatientSearch {
    pub query: Option<String>,
}

impl PatientSearch {
    pub fn term(&self) -> Option<String> {
        self.query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .map(str::to_lowercase)
    }
}
