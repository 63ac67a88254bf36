use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
    sea_query::{Expr, Func, LikeExpr},
};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    user::{
        entities::{User, UserType},
        ports::UserRepository,
        value_objects::PatientSearch,
    },
};
use crate::entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};
use crate::infrastructure::db::storage_error;

#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pub db: DatabaseConnection,
}

impl PostgresUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// `%term%` with the LIKE wildcards in `term` matched literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");

    format!("%{escaped}%")
}

fn contains(column: UserColumn, pattern: &str) -> sea_orm::sea_query::SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

impl UserRepository for PostgresUserRepository {
    async fn create_user(&self, user: User) -> Result<User, CoreError> {
        UserEntity::insert(UserActiveModel {
            id: Set(user.id),
            username: Set(user.username),
            email: Set(user.email),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            phone_number: Set(user.phone_number),
            age: Set(user.age),
            gender: Set(user.gender),
            date_of_birth: Set(user.date_of_birth),
            user_type: Set(user.user_type.as_str().to_string()),
            password_hash: Set(user.password_hash),
            created_at: Set(user.created_at.naive_utc()),
            updated_at: Set(user.updated_at.naive_utc()),
        })
        .exec_with_returning(&self.db)
        .await
        .map(User::from)
        .map_err(|e| storage_error("create user", e))
    }

    async fn get_by_id(&self, user_id: Uuid) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(|e| storage_error("get user by id", e))?
            .map(User::from);

        Ok(user)
    }

    async fn get_by_username(&self, username: String) -> Result<Option<User>, CoreError> {
        let user = UserEntity::find()
            .filter(UserColumn::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(|e| storage_error("get user by username", e))?
            .map(User::from);

        Ok(user)
    }

    async fn find_patients(&self, search: PatientSearch) -> Result<Vec<User>, CoreError> {
        let mut query = UserEntity::find()
            .filter(UserColumn::UserType.eq(UserType::Patient.as_str()))
            .order_by_desc(UserColumn::CreatedAt);

        if let Some(term) = search.term() {
            let pattern = like_pattern(&term);
            query = query.filter(
                Condition::any()
                    .add(contains(UserColumn::Username, &pattern))
                    .add(contains(UserColumn::FirstName, &pattern))
                    .add(contains(UserColumn::LastName, &pattern))
                    .add(contains(UserColumn::PhoneNumber, &pattern)),
            );
        }

        let patients = query
            .all(&self.db)
            .await
            .map_err(|e| storage_error("search patients", e))?
            .iter()
            .map(User::from)
            .collect::<Vec<User>>();

        Ok(patients)
    }

    async fn count_patients(&self) -> Result<u64, CoreError> {
        UserEntity::find()
            .filter(UserColumn::UserType.eq(UserType::Patient.as_str()))
            .count(&self.db)
            .await
            .map_err(|e| storage_error("count patients", e))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;

    #[test]
    fn test_plain_term_is_wrapped() {
        assert_eq!(like_pattern("smith"), "%smith%");
    }

    #[test]
    fn test_wildcards_in_term_are_escaped() {
        assert_eq!(like_pattern("%"), "%\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\x"), "%c:\\\\x%");
    }

    #[test]
    fn test_search_query_declares_escape_character() {
        let sql = UserEntity::find()
            .filter(contains(UserColumn::Username, &like_pattern("a_b")))
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains("LIKE"), "{sql}");
        assert!(sql.contains("ESCAPE"), "{sql}");
    }
}
