pub mod app_error;
pub mod main_controller;
