use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The course ids a viewer may see events for.
///
/// An empty set places no restriction: every course is visible. Callers that
/// want "nothing" should not query at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnrollmentSet(BTreeSet<String>);

impl EnrollmentSet {
    /// Creates an empty (unrestricted) set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the set places no restriction.
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    /// True when events of `course_id` are visible under this set.
    pub fn allows(&self, course_id: &str) -> bool {
        self.is_unrestricted() || self.0.contains(course_id)
    }

    /// Adds a course id. Returns false if it was already present.
    pub fn insert(&mut self, course_id: impl Into<String>) -> bool {
        self.0.insert(course_id.into())
    }

    /// Removes a course id. Returns false if it was not present.
    pub fn remove(&mut self, course_id: &str) -> bool {
        self.0.remove(course_id)
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.0.contains(course_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for EnrollmentSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(Into::into)
                .filter(|id: &String| !id.trim().is_empty())
                .collect(),
        )
    }
}
