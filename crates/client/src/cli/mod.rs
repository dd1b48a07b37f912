//! CLI command definitions.

pub mod courses;
pub mod coursework;
pub mod enrollments;
pub mod events;

use clap::{Parser, Subcommand, ValueEnum};

/// CLI client for the syllabus calendar API.
#[derive(Debug, Parser)]
#[command(name = "syllabus-client")]
#[command(about = "CLI client for the syllabus calendar API", long_about = None)]
pub struct Cli {
    /// Server base URL.
    #[arg(long, env = "SYLLABUS_URL", default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Output format.
    #[arg(long, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Course management.
    Courses(courses::CoursesCommand),
    /// Assignments, quizzes and discussions of a course.
    Coursework(coursework::CourseworkCommand),
    /// Aggregated calendar events.
    Events(events::EventsCommand),
    /// Viewer enrollments.
    Enrollments(enrollments::EnrollmentsCommand),
    /// Server health check.
    Health,
}
