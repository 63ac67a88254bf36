use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::user::entities::{User, UserType};

/// The authenticated caller of a service operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity(User);

impl Identity {
    pub fn new(user: User) -> Self {
        Self(user)
    }

    pub fn id(&self) -> Uuid {
        self.0.id
    }

    pub fn user_type(&self) -> UserType {
        self.0.user_type
    }

    pub fn user(&self) -> &User {
        &self.0
    }
}

pub struct RegisterAdminInput {
    pub username: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub age: Option<i32>,
    pub date_of_birth: Option<NaiveDate>,
    pub password: String,
    pub password_confirmation: String,
}

pub struct LoginInput {
    pub username: String,
    pub password: String,
}

pub struct AuthorizeRequestInput {
    pub token: String,
}
