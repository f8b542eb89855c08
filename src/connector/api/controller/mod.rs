pub mod generate_controller;
pub mod health_controller;

pub use generate_controller::{generate, ApiError, GenerateResponse};
pub use health_controller::health;
