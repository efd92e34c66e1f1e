pub mod health;
pub mod hours;
pub mod message;
pub mod order;
pub mod response;
pub mod retry;
pub mod template;
pub mod validation;
