use entity::{EmployeeId, ValidationError};
use thiserror::Error;

/// Shared result type for HR operations.
pub type HrResult<T> = Result<T, HrError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum HrError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid field: {0}")]
    InvalidField(String),
    #[error("validation failed: {0}")]
    ValidationFailure(ValidationError),
}

impl HrError {
    /// Stable machine-readable code for surfaces that render errors.
    pub fn code(&self) -> &'static str {
        match self {
            HrError::InvalidArgument(_) => "INVALID_ARGUMENT",
            HrError::NotFound(_) => "NOT_FOUND",
            HrError::InvalidField(_) => "INVALID_FIELD",
            HrError::ValidationFailure(_) => "VALIDATION",
        }
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn employee_not_found(id: &EmployeeId) -> Self {
        Self::NotFound(format!("employee {id}"))
    }
}

impl From<ValidationError> for HrError {
    fn from(value: ValidationError) -> Self {
        match value {
            ValidationError::UnknownField(field) => Self::InvalidField(field),
            other => Self::ValidationFailure(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_map_to_invalid_field() {
        let err = HrError::from(ValidationError::UnknownField("bonus".into()));
        assert_eq!(err, HrError::InvalidField("bonus".into()));
        assert_eq!(err.code(), "INVALID_FIELD");
    }

    #[test]
    fn validation_errors_keep_their_message() {
        let err = HrError::from(ValidationError::InvalidSalary(-1.0));
        assert_eq!(err.code(), "VALIDATION");
        assert_eq!(
            err.to_string(),
            "validation failed: salary must be a non-negative amount, got -1"
        );
    }

    #[test]
    fn not_found_names_the_employee() {
        let id = EmployeeId::new("e-42").unwrap();
        let err = HrError::employee_not_found(&id);
        assert_eq!(err.to_string(), "employee e-42 not found");
        assert_eq!(err.code(), "NOT_FOUND");
    }
}
