//! # Search & Filter Engine
//!
//! Matching is substring-based over canonicalized name forms: the query
//! `"smith j"` finds "John Smith", and so does `"Smith John"`, since word
//! order does not matter. The filter never reorders: results keep the
//! relative order of the input list.

use crate::model::{Course, Student};

/// Canonical comparable form of a string: lowercased, trimmed, with every
/// internal whitespace run collapsed to a single space.
///
/// Idempotent: `normalize(normalize(s)) == normalize(s)`.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The dashboard's transient search state: free-text query plus an optional
/// course restriction. Both conditions must hold for a record to pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterQuery {
    pub search_text: String,
    pub course: Option<Course>,
}

impl FilterQuery {
    pub fn new(search_text: impl Into<String>, course: Option<Course>) -> Self {
        Self {
            search_text: search_text.into(),
            course,
        }
    }

    /// True when neither condition restricts anything (a whitespace-only
    /// query counts as empty).
    pub fn is_empty(&self) -> bool {
        normalize(&self.search_text).is_empty() && self.course.is_none()
    }

    pub fn matches(&self, student: &Student) -> bool {
        if let Some(course) = self.course {
            if student.course != course {
                return false;
            }
        }

        let query = normalize(&self.search_text);
        if query.is_empty() {
            return true;
        }

        matches_name(student, &query)
    }
}

/// Stable filter over a snapshot of the student list.
pub fn filter_students<'a>(students: &'a [Student], query: &FilterQuery) -> Vec<&'a Student> {
    students.iter().filter(|s| query.matches(s)).collect()
}

/// Tests the normalized query against every name form of the student:
/// first, last, full name in natural order, full name reversed, and (when a
/// middle name exists) the middle-inclusive full name. Falls back to
/// word-wise matching so token order in the query is irrelevant.
fn matches_name(student: &Student, query: &str) -> bool {
    let first = normalize(&student.first_name);
    let last = normalize(&student.last_name);
    let middle = student
        .middle_name
        .as_deref()
        .map(normalize)
        .filter(|m| !m.is_empty());

    let mut forms = vec![
        first.clone(),
        last.clone(),
        format!("{} {}", first, last),
        format!("{} {}", last, first),
    ];
    if let Some(middle) = &middle {
        forms.push(format!("{} {} {}", first, middle, last));
    }

    if forms.iter().any(|form| form.contains(query)) {
        return true;
    }

    // Token-order-independent fallback: every query word must appear in
    // one of the individual name fields.
    query.split(' ').all(|word| {
        first.contains(word)
            || last.contains(word)
            || middle.as_deref().is_some_and(|m| m.contains(word))
    })
}
