pub mod authentication;
pub mod common;
pub mod crypto;
pub mod health;
pub mod patient;
pub mod prediction;
pub mod symptom;
pub mod user;
