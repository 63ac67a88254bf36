pub mod account;
pub mod health;
pub mod patient;
pub mod prediction;
pub mod server;
pub mod symptom;
