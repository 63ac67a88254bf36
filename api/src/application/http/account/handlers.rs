pub mod login;
pub mod register_admin;
