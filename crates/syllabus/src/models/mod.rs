mod course;
mod coursework;
mod enrollment;
mod events;

pub use course::{CreateCourse, UpdateCourse};
pub use coursework::CourseworkForm;
pub use enrollment::{Enrollments, SetEnrollments};
pub use events::{resolve_range, EventsQuery, RangeQuery, UpcomingQuery};
