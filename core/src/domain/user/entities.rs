use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{common::generate_timestamp, user::value_objects::CreateUserRequest};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Admin,
    Patient,
}

impl UserType {
    pub fn as_str(&self) -> &str {
        match self {
            UserType::Admin => "admin",
            UserType::Patient => "patient",
        }
    }
}

impl From<&str> for UserType {
    fn from(s: &str) -> Self {
        match s {
            "admin" => UserType::Admin,
            _ => UserType::Patient,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub age: Option<i32>,
    pub gender: String,
    pub date_of_birth: Option<NaiveDate>,
    pub user_type: UserType,
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(request: CreateUserRequest) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            phone_number: request.phone_number,
            age: request.age,
            gender: if request.gender.trim().is_empty() {
                "other".to_string()
            } else {
                request.gender
            },
            date_of_birth: request.date_of_birth,
            user_type: request.user_type,
            password_hash: request.password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user_type == UserType::Admin
    }

    pub fn is_patient(&self) -> bool {
        self.user_type == UserType::Patient
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
