//! Course CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Course management commands.
#[derive(Debug, Parser)]
pub struct CoursesCommand {
    #[command(subcommand)]
    pub action: CoursesAction,
}

/// Available course actions.
#[derive(Debug, Subcommand)]
pub enum CoursesAction {
    /// List all courses.
    List,
    /// Create a new course.
    Create {
        /// Course name.
        #[arg(long)]
        name: String,
        /// Registrar code, e.g. CS-101.
        #[arg(long)]
        code: String,
        /// Course ID (generated when omitted).
        #[arg(long)]
        id: Option<String>,
        /// Instructor name.
        #[arg(long)]
        instructor: Option<String>,
        /// First day of term (YYYY-MM-DD).
        #[arg(long, requires = "term_end")]
        term_start: Option<NaiveDate>,
        /// Last day of term (YYYY-MM-DD).
        #[arg(long, requires = "term_start")]
        term_end: Option<NaiveDate>,
    },
    /// Get course by ID.
    Get {
        /// Course ID.
        id: String,
    },
    /// Delete course by ID, together with its coursework.
    Delete {
        /// Course ID.
        id: String,
    },
}
