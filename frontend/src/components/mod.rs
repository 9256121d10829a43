pub mod admin;
pub mod alerts;
pub mod booking;
pub mod home;
pub mod inputs;
pub mod nav_bar;
pub mod not_found;
pub mod profile;
