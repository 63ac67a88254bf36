use medipredict_core::domain::symptom::entities::Severity;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddSymptomValidator {
    #[validate(length(min = 1, max = 200, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub severity: Severity,

    #[validate(range(min = 0, message = "duration_days must not be negative"))]
    pub duration_days: i32,

    #[serde(default)]
    pub notes: Option<String>,
}
