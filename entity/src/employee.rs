use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EmployeeId, FieldUpdate, MAX_RATING, ValidationError, ValidationResult};

/// Input shape for creating an employee. Every field is validated when it is
/// converted into an [`Employee`].
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewEmployee {
    /// Left empty by callers that want an id minted for them.
    #[serde(default)]
    pub id: Option<EmployeeId>,
    pub name: String,
    pub department: String,
    pub salary: f64,
    pub performance_rating: f64,
    pub years_of_experience: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewEmployee")]
pub struct Employee {
    id: EmployeeId,
    name: String,
    department: String,
    salary: f64,
    performance_rating: f64,
    years_of_experience: u32,
    active: bool,
}

impl Employee {
    pub fn new(
        id: EmployeeId,
        name: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
        performance_rating: f64,
        years_of_experience: u32,
    ) -> ValidationResult<Self> {
        Ok(Self {
            id,
            name: validate_name(name.into())?,
            department: validate_department(department.into())?,
            salary: validate_salary(salary)?,
            performance_rating: validate_rating(performance_rating)?,
            years_of_experience,
            active: true,
        })
    }

    /// Builder-style toggle used when constructing inactive records.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn id(&self) -> &EmployeeId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }

    pub fn performance_rating(&self) -> f64 {
        self.performance_rating
    }

    pub fn years_of_experience(&self) -> u32 {
        self.years_of_experience
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    pub fn set_department(&mut self, department: impl Into<String>) -> ValidationResult<()> {
        self.department = validate_department(department.into())?;
        Ok(())
    }

    pub fn set_salary(&mut self, salary: f64) -> ValidationResult<()> {
        self.salary = validate_salary(salary)?;
        Ok(())
    }

    pub fn set_performance_rating(&mut self, rating: f64) -> ValidationResult<()> {
        self.performance_rating = validate_rating(rating)?;
        Ok(())
    }

    pub fn set_years_of_experience(&mut self, years: u32) {
        self.years_of_experience = years;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Apply a single field update. The record is untouched when validation
    /// fails.
    pub fn apply(&mut self, update: FieldUpdate) -> ValidationResult<()> {
        match update {
            FieldUpdate::Name(name) => self.set_name(name),
            FieldUpdate::Department(department) => self.set_department(department),
            FieldUpdate::Salary(salary) => self.set_salary(salary),
            FieldUpdate::PerformanceRating(rating) => self.set_performance_rating(rating),
            FieldUpdate::YearsOfExperience(years) => {
                self.set_years_of_experience(years);
                Ok(())
            }
            FieldUpdate::Active(active) => {
                self.set_active(active);
                Ok(())
            }
        }
    }
}

impl TryFrom<NewEmployee> for Employee {
    type Error = ValidationError;

    fn try_from(input: NewEmployee) -> Result<Self, Self::Error> {
        let id = input.id.unwrap_or_else(EmployeeId::generate);
        Employee::new(
            id,
            input.name,
            input.department,
            input.salary,
            input.performance_rating,
            input.years_of_experience,
        )
        .map(|employee| employee.with_active(input.active))
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {} | salary {:.2} | rating {:.1} | {} yrs | {}",
            self.name,
            self.id,
            self.department,
            self.salary,
            self.performance_rating,
            self.years_of_experience,
            if self.active { "active" } else { "inactive" }
        )
    }
}

fn validate_name(value: String) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn validate_department(value: String) -> ValidationResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyDepartment);
    }
    Ok(trimmed.to_string())
}

fn validate_salary(value: f64) -> ValidationResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidSalary(value));
    }
    Ok(value)
}

fn validate_rating(value: f64) -> ValidationResult<f64> {
    if !(0.0..=MAX_RATING).contains(&value) {
        return Err(ValidationError::InvalidRating(value));
    }
    Ok(value)
}
