pub mod courses;
pub mod coursework;
pub mod enrollments;
pub mod error;
pub mod events;
pub mod health;

pub use error::AppError;
