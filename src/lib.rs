pub mod clients;
pub mod config;
pub mod messaging;
pub mod models;
pub mod utils;
