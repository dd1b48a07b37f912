//! syllabus_client - CLI client for the syllabus calendar API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::SyllabusClient;
pub use error::{ClientError, Result};
