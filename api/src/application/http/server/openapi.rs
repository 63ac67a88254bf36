use crate::application::http::{
    account::router::AccountApiDoc, health::router::HealthApiDoc,
    patient::router::PatientApiDoc, prediction::router::PredictionApiDoc,
    symptom::router::SymptomApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MediPredict API"
    ),
    nest(
        (path = "/accounts", api = AccountApiDoc),
        (path = "", api = PatientApiDoc),
        (path = "", api = SymptomApiDoc),
        (path = "", api = PredictionApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
