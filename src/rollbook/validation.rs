//! Field-level validation for student records and passwords.
//!
//! Each validator is a pure function returning `Result<(), ValidationError>`
//! so it can be called from any front-end. Error messages are keyed by the
//! field they describe and are meant to be shown to the user verbatim.
//!
//! Name fields accept letters and spaces only. Empty values pass the name
//! validator (optional-field convention); requiredness is a separate check
//! applied by [`validate_student`].

use crate::model::Student;

pub const MIN_AGE: u32 = 16;
pub const MAX_AGE: u32 = 65;
pub const NAME_MIN_LEN: usize = 2;
pub const NAME_MAX_LEN: usize = 50;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const ADDRESS_MIN_LEN: usize = 5;

const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// A single failed field check, carrying the field it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty but must be filled in
    Required(&'static str),
    /// Name field contains digits
    ContainsDigits(&'static str),
    /// Name field contains punctuation or symbols
    ContainsSpecialCharacters(&'static str),
    /// Name field has no letters at all
    NoLetters(&'static str),
    /// Name field is shorter than [`NAME_MIN_LEN`]
    NameTooShort(&'static str),
    /// Name field is longer than [`NAME_MAX_LEN`]
    NameTooLong(&'static str),
    /// Age is not a whole number
    AgeNotANumber,
    AgeTooLow,
    AgeTooHigh,
    PasswordTooShort,
    PasswordMissingUppercase,
    PasswordMissingLowercase,
    PasswordMissingDigit,
    PasswordMissingSpecial,
    AddressTooShort,
    /// Course code is not in the course table
    UnknownCourse(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Required(field) => write!(f, "{} is required", field),
            ValidationError::ContainsDigits(field) => {
                write!(f, "{} cannot contain numbers", field)
            }
            ValidationError::ContainsSpecialCharacters(field) => {
                write!(f, "{} cannot contain special characters", field)
            }
            ValidationError::NoLetters(field) => {
                write!(f, "{} must contain at least one letter", field)
            }
            ValidationError::NameTooShort(field) => {
                write!(f, "{} must be at least {} characters long", field, NAME_MIN_LEN)
            }
            ValidationError::NameTooLong(field) => {
                write!(f, "{} cannot exceed {} characters", field, NAME_MAX_LEN)
            }
            ValidationError::AgeNotANumber => write!(f, "Age must be a number"),
            ValidationError::AgeTooLow => {
                write!(f, "Student must be at least {} years old", MIN_AGE)
            }
            ValidationError::AgeTooHigh => {
                write!(f, "Student age cannot exceed {} years", MAX_AGE)
            }
            ValidationError::PasswordTooShort => {
                write!(f, "Password must be at least {} characters long", PASSWORD_MIN_LEN)
            }
            ValidationError::PasswordMissingUppercase => {
                write!(f, "Password must contain at least one uppercase letter")
            }
            ValidationError::PasswordMissingLowercase => {
                write!(f, "Password must contain at least one lowercase letter")
            }
            ValidationError::PasswordMissingDigit => {
                write!(f, "Password must contain at least one number")
            }
            ValidationError::PasswordMissingSpecial => {
                write!(f, "Password must contain at least one special character")
            }
            ValidationError::AddressTooShort => {
                write!(f, "Address must be at least {} characters long", ADDRESS_MIN_LEN)
            }
            ValidationError::UnknownCourse(code) => {
                write!(f, "Unknown course code '{}'", code)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validates a name field: letters and spaces only, at least one letter,
/// length within bounds. Empty (or whitespace-only) input passes, so the
/// same function serves optional fields like the middle name.
pub fn validate_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(());
    }

    if trimmed.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::ContainsDigits(field));
    }
    if trimmed.chars().any(|c| !c.is_alphabetic() && c != ' ') {
        return Err(ValidationError::ContainsSpecialCharacters(field));
    }
    if !trimmed.chars().any(|c| c.is_alphabetic()) {
        return Err(ValidationError::NoLetters(field));
    }

    let len = trimmed.chars().count();
    if len < NAME_MIN_LEN {
        return Err(ValidationError::NameTooShort(field));
    }
    if len > NAME_MAX_LEN {
        return Err(ValidationError::NameTooLong(field));
    }

    Ok(())
}

/// Validates the stored age string: a whole number within 16..=65.
pub fn validate_age(value: &str) -> Result<(), ValidationError> {
    let age: u32 = value
        .trim()
        .parse()
        .map_err(|_| ValidationError::AgeNotANumber)?;

    if age < MIN_AGE {
        return Err(ValidationError::AgeTooLow);
    }
    if age > MAX_AGE {
        return Err(ValidationError::AgeTooHigh);
    }
    Ok(())
}

/// Password strength rules, checked in order: length, uppercase, lowercase,
/// digit, special character. Returns the first failure.
pub fn validate_password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < PASSWORD_MIN_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(ValidationError::PasswordMissingUppercase);
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(ValidationError::PasswordMissingLowercase);
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Err(ValidationError::PasswordMissingDigit);
    }
    if !value.chars().any(|c| SPECIAL_CHARS.contains(c)) {
        return Err(ValidationError::PasswordMissingSpecial);
    }
    Ok(())
}

/// Address is free text but must be present and plausibly long.
pub fn validate_address(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required("Address"));
    }
    if trimmed.chars().count() < ADDRESS_MIN_LEN {
        return Err(ValidationError::AddressTooShort);
    }
    Ok(())
}

/// Whole-record check used at the form boundary: required names, name
/// character rules, age range, address. Returns the first failing field.
pub fn validate_student(student: &Student) -> Result<(), ValidationError> {
    if student.first_name.trim().is_empty() {
        return Err(ValidationError::Required("First name"));
    }
    if student.last_name.trim().is_empty() {
        return Err(ValidationError::Required("Last name"));
    }

    validate_name("First name", &student.first_name)?;
    if let Some(middle) = &student.middle_name {
        validate_name("Middle name", middle)?;
    }
    validate_name("Last name", &student.last_name)?;
    validate_age(&student.age)?;
    validate_address(&student.address)?;

    Ok(())
}
