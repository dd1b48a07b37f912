//! Coursework CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

use syllabus_core::catalog::{CourseworkType, Priority};

/// Coursework management commands.
#[derive(Debug, Parser)]
pub struct CourseworkCommand {
    #[command(subcommand)]
    pub action: CourseworkAction,
}

/// CLI coursework kind (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CourseworkKind {
    Assignment,
    Quiz,
    Discussion,
}

impl From<CourseworkKind> for CourseworkType {
    fn from(kind: CourseworkKind) -> Self {
        match kind {
            CourseworkKind::Assignment => CourseworkType::Assignment,
            CourseworkKind::Quiz => CourseworkType::Quiz,
            CourseworkKind::Discussion => CourseworkType::Discussion,
        }
    }
}

/// CLI assignment priority.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(p: PriorityArg) -> Self {
        match p {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

/// Available coursework actions.
#[derive(Debug, Subcommand)]
pub enum CourseworkAction {
    /// List the coursework of a course.
    List {
        /// Course ID.
        course_id: String,
    },
    /// Create a piece of coursework.
    Create {
        /// Course ID.
        course_id: String,
        /// Kind of coursework.
        #[arg(long, value_enum)]
        kind: CourseworkKind,
        /// Title.
        #[arg(long)]
        title: String,
        /// Due date, or the day a quiz opens (YYYY-MM-DD).
        #[arg(long)]
        date: NaiveDate,
        /// Due time, or quiz start time (HH:MM).
        #[arg(long)]
        time: Option<String>,
        /// Quiz end time (HH:MM).
        #[arg(long)]
        end_time: Option<String>,
        /// Quiz location.
        #[arg(long)]
        location: Option<String>,
        /// Points possible.
        #[arg(long)]
        points: Option<u32>,
        /// Assignment priority.
        #[arg(long, value_enum)]
        priority: Option<PriorityArg>,
        /// Quiz time limit in minutes.
        #[arg(long)]
        time_limit: Option<u32>,
        /// Coursework ID (generated when omitted).
        #[arg(long)]
        id: Option<String>,
    },
    /// Get a piece of coursework by ID.
    Get {
        /// Coursework ID.
        id: String,
    },
    /// Delete a piece of coursework by ID.
    Delete {
        /// Coursework ID.
        id: String,
    },
}
