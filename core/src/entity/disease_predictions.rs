use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "disease_predictions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub patient_id: Uuid,
    pub predicted_by: Option<Uuid>,
    pub primary_diagnosis: String,
    #[sea_orm(column_type = "Double")]
    pub confidence_percentage: f64,
    pub risk_level: String,
    #[sea_orm(column_type = "Text")]
    pub explanation: String,
    /// One item per line.
    #[sea_orm(column_type = "Text")]
    pub recommended_tests: String,
    /// One item per line.
    #[sea_orm(column_type = "Text")]
    pub lifestyle_recommendations: String,
    pub specialist_referral: String,
    #[sea_orm(column_type = "Text")]
    pub when_to_seek_care: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub symptoms_analyzed: Json,
    #[sea_orm(column_type = "Text")]
    pub raw_response: String,
    pub created_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::PatientId",
        to = "super::users::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Users,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
