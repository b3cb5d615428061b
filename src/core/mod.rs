// Core domain layer
pub mod models;
pub mod overrides;
pub mod profile;
pub mod services;

pub use models::*;
pub use services::*;
