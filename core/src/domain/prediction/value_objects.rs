use uuid::Uuid;

pub struct GeneratePredictionInput {
    pub patient_id: Uuid,
}

pub struct GetPredictionInput {
    pub prediction_id: Uuid,
}

pub struct GetPredictionsInput {
    pub patient_id: Uuid,
}
