use chrono::{TimeZone, Utc};

use crate::domain::user::entities::{User, UserType};
use crate::entity::users::Model as UserModel;

impl From<&UserModel> for User {
    fn from(model: &UserModel) -> Self {
        User {
            id: model.id,
            username: model.username.clone(),
            email: model.email.clone(),
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            phone_number: model.phone_number.clone(),
            age: model.age,
            gender: model.gender.clone(),
            date_of_birth: model.date_of_birth,
            user_type: UserType::from(model.user_type.as_str()),
            password_hash: model.password_hash.clone(),
            created_at: Utc.from_utc_datetime(&model.created_at),
            updated_at: Utc.from_utc_datetime(&model.updated_at),
        }
    }
}

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User::from(&model)
    }
}
