//! # Domain Model
//!
//! Core data types: [`Student`], [`Credential`], [`Course`], and [`Session`].
//!
//! The serialized field names (`_id`, `firstName`, `middleName`, ...) match
//! the legacy JSON shape records were stored under, so an existing
//! `students` payload loads without migration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::ValidationError;

/// Course offerings, keyed by their registrar codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Course {
    #[serde(rename = "BSIT")]
    Bsit,
    #[serde(rename = "BSCS")]
    Bscs,
    #[serde(rename = "BST")]
    Bst,
    #[serde(rename = "BSHRM")]
    Bshrm,
    #[serde(rename = "BSN")]
    Bsn,
}

/// Grouping used by the dashboard's course filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseCategory {
    Technology,
    Tourism,
    Healthcare,
}

impl Course {
    pub const ALL: [Course; 5] = [
        Course::Bsit,
        Course::Bscs,
        Course::Bst,
        Course::Bshrm,
        Course::Bsn,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Course::Bsit => "BSIT",
            Course::Bscs => "BSCS",
            Course::Bst => "BST",
            Course::Bshrm => "BSHRM",
            Course::Bsn => "BSN",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Course::Bsit => "Bachelor of Science in Information Technology",
            Course::Bscs => "Bachelor of Science in Computer Science",
            Course::Bst => "Bachelor of Science in Tourism",
            Course::Bshrm => "Bachelor of Science in Hotel and Restaurant Management",
            Course::Bsn => "Bachelor of Science in Nursing",
        }
    }

    pub fn category(&self) -> CourseCategory {
        match self {
            Course::Bsit | Course::Bscs => CourseCategory::Technology,
            Course::Bst | Course::Bshrm => CourseCategory::Tourism,
            Course::Bsn => CourseCategory::Healthcare,
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Course {
    type Err = ValidationError;

    /// Course codes are case-sensitive: `"bsit"` is not a valid code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BSIT" => Ok(Course::Bsit),
            "BSCS" => Ok(Course::Bscs),
            "BST" => Ok(Course::Bst),
            "BSHRM" => Ok(Course::Bshrm),
            "BSN" => Ok(Course::Bsn),
            other => Err(ValidationError::UnknownCourse(other.to_string())),
        }
    }
}

/// A single student record.
///
/// `id` is assigned by the store on insert, is unique within the list, and
/// is never reused while the record exists. `age` and `birth_date` are kept
/// as strings, matching the stored shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(rename = "_id")]
    pub id: u32,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    pub last_name: String,
    pub birth_date: String,
    pub age: String,
    pub address: String,
    pub course: Course,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Student {
    /// A record with no id yet; the store assigns one on insert.
    #[allow(clippy::too_many_arguments)]
    pub fn draft(
        first_name: impl Into<String>,
        middle_name: Option<String>,
        last_name: impl Into<String>,
        birth_date: impl Into<String>,
        age: impl Into<String>,
        address: impl Into<String>,
        course: Course,
        avatar: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            first_name: first_name.into(),
            middle_name,
            last_name: last_name.into(),
            birth_date: birth_date.into(),
            age: age.into(),
            address: address.into(),
            course,
            avatar,
        }
    }

    /// Title-cased display name: `First M. Last`, middle name reduced to
    /// its initials.
    pub fn full_name(&self) -> String {
        let first = title_case(&self.first_name);
        let last = title_case(&self.last_name);

        match self.middle_name.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(middle) => {
                let initials: String = middle
                    .split_whitespace()
                    .filter_map(|word| word.chars().next())
                    .map(|c| c.to_ascii_uppercase())
                    .collect();
                format!("{} {}. {}", first, initials, last)
            }
            None => format!("{} {}", first, last),
        }
    }

    /// Two-letter monogram from the first and last names.
    pub fn initials(&self) -> String {
        let mut out = String::new();
        if let Some(c) = self.first_name.chars().next() {
            out.push(c.to_ascii_uppercase());
        }
        if let Some(c) = self.last_name.chars().next() {
            out.push(c.to_ascii_uppercase());
        }
        out
    }
}

fn title_case(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// The single login record, persisted under the `user` key.
///
/// Plaintext on purpose: this matches the legacy stored shape and is not
/// a security boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// An authenticated session: the opaque token plus whose it is.
///
/// The token is an "is logged in" flag, nothing more.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub token: String,
    pub username: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(first: &str, middle: Option<&str>, last: &str) -> Student {
        Student::draft(
            first,
            middle.map(String::from),
            last,
            "2000-01-01",
            "25",
            "123 Main St",
            Course::Bsit,
            None,
        )
    }

    #[test]
    fn full_name_title_cases_both_parts() {
        let s = student("jOHN", None, "sMITH");
        assert_eq!(s.full_name(), "John Smith");
    }

    #[test]
    fn full_name_reduces_middle_to_initials() {
        let s = student("john", Some("de la cruz"), "smith");
        assert_eq!(s.full_name(), "John DLC. Smith");
    }

    #[test]
    fn full_name_ignores_blank_middle() {
        let s = student("john", Some("   "), "smith");
        assert_eq!(s.full_name(), "John Smith");
    }

    #[test]
    fn initials_are_uppercased() {
        assert_eq!(student("jane", None, "doe").initials(), "JD");
    }

    #[test]
    fn course_codes_round_trip() {
        for course in Course::ALL {
            assert_eq!(course.code().parse::<Course>().unwrap(), course);
        }
    }

    #[test]
    fn course_categories_partition_the_table() {
        assert_eq!(Course::Bsit.category(), CourseCategory::Technology);
        assert_eq!(Course::Bscs.category(), CourseCategory::Technology);
        assert_eq!(Course::Bst.category(), CourseCategory::Tourism);
        assert_eq!(Course::Bshrm.category(), CourseCategory::Tourism);
        assert_eq!(Course::Bsn.category(), CourseCategory::Healthcare);
    }

    #[test]
    fn course_parse_is_case_sensitive() {
        assert!("bsit".parse::<Course>().is_err());
        assert!("BSXX".parse::<Course>().is_err());
    }

    #[test]
    fn student_serializes_with_legacy_field_names() {
        let mut s = student("John", Some("Q"), "Smith");
        s.id = 7;
        s.avatar = Some("https://example.com/a.png".into());

        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["_id"], 7);
        assert_eq!(json["firstName"], "John");
        assert_eq!(json["middleName"], "Q");
        assert_eq!(json["lastName"], "Smith");
        assert_eq!(json["birthDate"], "2000-01-01");
        assert_eq!(json["course"], "BSIT");
    }

    #[test]
    fn student_deserializes_without_optional_fields() {
        let json = r#"{
            "_id": 1,
            "firstName": "Jane",
            "lastName": "Doe",
            "birthDate": "1999-05-05",
            "age": "26",
            "address": "5 Elm St",
            "course": "BSN"
        }"#;
        let s: Student = serde_json::from_str(json).unwrap();
        assert_eq!(s.middle_name, None);
        assert_eq!(s.avatar, None);
        assert_eq!(s.course, Course::Bsn);
    }
}
