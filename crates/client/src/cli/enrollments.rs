//! Enrollment CLI commands.

use clap::{Parser, Subcommand};

/// Viewer enrollment commands.
#[derive(Debug, Parser)]
pub struct EnrollmentsCommand {
    #[command(subcommand)]
    pub action: EnrollmentsAction,
}

/// Available enrollment actions.
#[derive(Debug, Subcommand)]
pub enum EnrollmentsAction {
    /// Show a viewer's enrollments.
    Get {
        /// Viewer ID.
        viewer: String,
    },
    /// Replace a viewer's enrollments. An empty list clears them.
    Set {
        /// Viewer ID.
        viewer: String,
        /// Course IDs (comma-separated).
        #[arg(value_delimiter = ',')]
        courses: Vec<String>,
    },
    /// Enroll a viewer in a course.
    Add {
        /// Viewer ID.
        viewer: String,
        /// Course ID.
        course_id: String,
    },
    /// Remove a viewer from a course.
    Remove {
        /// Viewer ID.
        viewer: String,
        /// Course ID.
        course_id: String,
    },
}
