// Library root for the deployment verification service

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::state::AppState;
