pub mod get_dashboard;
pub mod get_patient;
pub mod get_patients;
pub mod register_patient;
