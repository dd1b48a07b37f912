//! Events CLI commands.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Aggregated event commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available events actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List events in a window (defaults to the current month).
    List {
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start: Option<NaiveDate>,
        /// End date (YYYY-MM-DD).
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Restrict to these course IDs (comma-separated).
        #[arg(long, value_delimiter = ',', conflicts_with = "viewer")]
        courses: Vec<String>,
        /// Use a viewer's stored enrollments instead of --courses.
        #[arg(long)]
        viewer: Option<String>,
    },
    /// List events grouped by day.
    Days {
        /// Start date (YYYY-MM-DD).
        #[arg(long)]
        start: Option<NaiveDate>,
        /// End date (YYYY-MM-DD).
        #[arg(long)]
        end: Option<NaiveDate>,
        /// Restrict to these course IDs (comma-separated).
        #[arg(long, value_delimiter = ',')]
        courses: Vec<String>,
    },
    /// Show what is coming up in the next few days.
    Upcoming {
        /// Number of days to look ahead (server default when omitted).
        #[arg(long)]
        days: Option<u64>,
        /// Maximum number of events.
        #[arg(long)]
        limit: Option<usize>,
        /// Restrict to these course IDs (comma-separated).
        #[arg(long, value_delimiter = ',')]
        courses: Vec<String>,
    },
}
