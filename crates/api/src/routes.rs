pub mod admin;
pub mod auth;
pub mod health;
pub mod public;
pub mod student;
pub mod teacher;
