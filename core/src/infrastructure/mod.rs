pub mod crypto;
pub mod db;
pub mod health;
pub mod jwt;
pub mod llm;
pub mod patient;
pub mod prediction;
pub mod symptom;
pub mod user;
