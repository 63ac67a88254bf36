use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{entities::User, value_objects::PatientSearch},
};

#[cfg_attr(test, mockall::automock)]
pub trait UserRepository: Send + Sync {
    fn create_user(&self, user: User) -> impl Future<Output = Result<User, CoreError>> + Send;

    fn get_by_id(&self, user_id: Uuid)
    -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn get_by_username(
        &self,
        username: String,
    ) -> impl Future<Output = Result<Option<User>, CoreError>> + Send;

    fn find_patients(
        &self,
        search: PatientSearch,
    ) -> impl Future<Output = Result<Vec<User>, CoreError>> + Send;

    fn count_patients(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
