//! sea-orm models of the clinic tables.

pub mod prelude;

pub mod disease_predictions;
pub mod patient_profiles;
pub mod symptom_records;
pub mod users;
