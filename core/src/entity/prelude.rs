pub use super::disease_predictions::Entity as DiseasePredictions;
pub use super::patient_profiles::Entity as PatientProfiles;
pub use super::symptom_records::Entity as SymptomRecords;
pub use super::users::Entity as Users;
