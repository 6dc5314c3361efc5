pub mod cases;
pub mod home;
pub mod inventory;
pub mod profile;
pub mod rules;
