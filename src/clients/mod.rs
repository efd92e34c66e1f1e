pub mod health;
pub mod order_api;
