mod aggregate;
mod grouping;
mod mock_data;
mod types;

pub use aggregate::{get_events, get_events_in, project_course, sort_events, upcoming_events};
pub use grouping::{build_day_agendas, get_month_dates, get_week_dates, group_events_by_date};
pub use mock_data::generate_seed_catalog;
pub use types::{DayAgenda, Event, EventDetails};
