pub mod generate_prediction;
pub mod get_prediction;
pub mod get_predictions;
