mod enrollment;
mod error;
mod operations;
mod parse;
mod types;

pub use enrollment::EnrollmentSet;
pub use error::CatalogError;
pub use operations::{validate_course, validate_coursework};
pub(crate) use parse::parse_optional_time;
pub use parse::{parse_date, parse_time};
pub use types::{
    Assignment, Catalog, Course, CourseRecord, Coursework, CourseworkType, Discussion, Priority,
    Quiz, TermDates,
};
