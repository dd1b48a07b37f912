use super::error::CatalogError;
use super::parse::{parse_date, parse_optional_time};
use super::types::{Course, Coursework};

const MAX_NAME_LEN: usize = 200;

/// Validates a course before creation or update.
pub fn validate_course(course: &Course) -> Result<(), CatalogError> {
    if course.id.trim().is_empty() {
        return Err(CatalogError::EmptyCourseId);
    }
    if course.name.trim().is_empty() {
        return Err(CatalogError::EmptyCourseName);
    }
    if course.name.chars().count() > MAX_NAME_LEN {
        return Err(CatalogError::CourseNameTooLong);
    }
    if course.course_code.trim().is_empty() {
        return Err(CatalogError::EmptyCourseCode);
    }
    if let Some(term) = &course.term {
        if term.end < term.start {
            return Err(CatalogError::InvalidTerm);
        }
    }
    Ok(())
}

/// Validates a coursework item before creation or update.
///
/// Writes are strict: the date must be present and readable, and any time
/// given must parse. Records that reach the catalog some other way (snapshot
/// import) are not held to this and are skipped at projection instead.
pub fn validate_coursework(item: &Coursework) -> Result<(), CatalogError> {
    let title = item.title();
    if title.trim().is_empty() {
        return Err(CatalogError::EmptyTitle);
    }
    if title.chars().count() > MAX_NAME_LEN {
        return Err(CatalogError::TitleTooLong);
    }

    let raw_date = item
        .raw_date()
        .filter(|d| !d.trim().is_empty())
        .ok_or(CatalogError::MissingDate)?;
    if parse_date(raw_date).is_none() {
        return Err(CatalogError::InvalidDate(raw_date.to_string()));
    }

    match item {
        Coursework::Assignment(a) => {
            check_time(a.due_time.as_deref())?;
        }
        Coursework::Quiz(q) => {
            let start = check_time(q.start_time.as_deref())?;
            let end = check_time(q.end_time.as_deref())?;
            if let (Some(start), Some(end)) = (start, end) {
                if end <= start {
                    return Err(CatalogError::InvalidTimeRange);
                }
            }
        }
        Coursework::Discussion(d) => {
            check_time(d.due_time.as_deref())?;
        }
    }

    Ok(())
}

fn check_time(raw: Option<&str>) -> Result<Option<chrono::NaiveTime>, CatalogError> {
    parse_optional_time(raw)
        .map_err(|_| CatalogError::InvalidTime(raw.unwrap_or_default().to_string()))
}
