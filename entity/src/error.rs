use thiserror::Error;

pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    #[error("employee id cannot be empty")]
    EmptyId,
    #[error("employee id {0:?} has leading or trailing whitespace")]
    PaddedId(String),
    #[error("employee name cannot be empty")]
    EmptyName,
    #[error("department cannot be empty")]
    EmptyDepartment,
    #[error("salary must be a non-negative amount, got {0}")]
    InvalidSalary(f64),
    #[error("performance rating must be between 0 and 5, got {0}")]
    InvalidRating(f64),
    #[error("years of experience cannot be negative, got {0}")]
    NegativeExperience(i64),
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("{field} expects {expected}, got {value:?}")]
    Unparseable {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}
