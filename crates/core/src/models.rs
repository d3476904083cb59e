pub mod registration;
pub mod reservation;
pub mod skill;
pub mod slot;
pub mod user;
