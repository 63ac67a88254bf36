pub mod patient_profile_repository;
