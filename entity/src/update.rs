use crate::{ValidationError, ValidationResult};

/// A single-field change to an employee record.
///
/// Values are range-checked when the update is applied, so an out-of-range
/// salary or rating is still representable here and rejected later with the
/// same error the setters produce.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldUpdate {
    Name(String),
    Department(String),
    Salary(f64),
    PerformanceRating(f64),
    YearsOfExperience(u32),
    Active(bool),
}

impl FieldUpdate {
    /// Build an update from a field name and a raw textual value, as entered
    /// in a form. Field names are matched case-insensitively.
    pub fn parse(field: &str, raw: &str) -> ValidationResult<Self> {
        let value = raw.trim();
        match field.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(Self::Name(raw.to_string())),
            "department" => Ok(Self::Department(raw.to_string())),
            "salary" => parse_number("salary", value).map(Self::Salary),
            "performancerating" => {
                parse_number("performanceRating", value).map(Self::PerformanceRating)
            }
            "yearsofexperience" => parse_years(value).map(Self::YearsOfExperience),
            "isactive" => parse_flag(value).map(Self::Active),
            _ => Err(ValidationError::UnknownField(field.to_string())),
        }
    }

    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Name(_) => "name",
            Self::Department(_) => "department",
            Self::Salary(_) => "salary",
            Self::PerformanceRating(_) => "performanceRating",
            Self::YearsOfExperience(_) => "yearsOfExperience",
            Self::Active(_) => "isActive",
        }
    }
}

fn parse_number(field: &'static str, value: &str) -> ValidationResult<f64> {
    value.parse::<f64>().map_err(|_| ValidationError::Unparseable {
        field,
        expected: "a number",
        value: value.to_string(),
    })
}

fn parse_years(value: &str) -> ValidationResult<u32> {
    let years = value
        .parse::<i64>()
        .map_err(|_| ValidationError::Unparseable {
            field: "yearsOfExperience",
            expected: "a whole number",
            value: value.to_string(),
        })?;
    if years < 0 {
        return Err(ValidationError::NegativeExperience(years));
    }
    u32::try_from(years).map_err(|_| ValidationError::Unparseable {
        field: "yearsOfExperience",
        expected: "a whole number",
        value: value.to_string(),
    })
}

fn parse_flag(value: &str) -> ValidationResult<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ValidationError::Unparseable {
            field: "isActive",
            expected: "true or false",
            value: value.to_string(),
        }),
    }
}
