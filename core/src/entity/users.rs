use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub age: Option<i32>,
    pub gender: String,
    pub date_of_birth: Option<Date>,
    pub user_type: String,
    pub password_hash: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::patient_profiles::Entity")]
    PatientProfiles,
    #[sea_orm(has_many = "super::symptom_records::Entity")]
    SymptomRecords,
    #[sea_orm(has_many = "super::disease_predictions::Entity")]
    DiseasePredictions,
}

impl Related<super::patient_profiles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PatientProfiles.def()
    }
}

impl Related<super::symptom_records::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SymptomRecords.def()
    }
}

impl Related<super::disease_predictions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DiseasePredictions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
