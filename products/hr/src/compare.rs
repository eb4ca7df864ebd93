//! Ordering strategies over employees.
//!
//! Every comparator is a plain function, so they can be passed to
//! `slice::sort_by` directly and shared freely across threads.

use std::cmp::Ordering;

use entity::Employee;
use serde::{Deserialize, Serialize};

/// Signature shared by all employee comparators.
pub type Comparator = fn(&Employee, &Employee) -> Ordering;

/// Natural ordering: years of experience, least experienced first.
pub fn by_experience(a: &Employee, b: &Employee) -> Ordering {
    a.years_of_experience().cmp(&b.years_of_experience())
}

/// Highest salary first.
pub fn by_salary_desc(a: &Employee, b: &Employee) -> Ordering {
    b.salary().total_cmp(&a.salary())
}

/// Best rating first.
pub fn by_performance_desc(a: &Employee, b: &Employee) -> Ordering {
    b.performance_rating().total_cmp(&a.performance_rating())
}

pub fn by_department(a: &Employee, b: &Employee) -> Ordering {
    a.department().cmp(b.department())
}

pub fn by_name(a: &Employee, b: &Employee) -> Ordering {
    a.name().cmp(b.name())
}

pub fn by_department_then_salary_desc(a: &Employee, b: &Employee) -> Ordering {
    by_department(a, b).then_with(|| by_salary_desc(a, b))
}

pub fn by_performance_then_experience_desc(a: &Employee, b: &Employee) -> Ordering {
    by_performance_desc(a, b)
        .then_with(|| b.years_of_experience().cmp(&a.years_of_experience()))
}

/// Named orderings exposed to presentation layers.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Experience,
    Salary,
    Performance,
    Department,
    Name,
    DepartmentThenSalary,
    PerformanceThenExperience,
}

impl SortKey {
    pub fn comparator(self) -> Comparator {
        match self {
            SortKey::Experience => by_experience,
            SortKey::Salary => by_salary_desc,
            SortKey::Performance => by_performance_desc,
            SortKey::Department => by_department,
            SortKey::Name => by_name,
            SortKey::DepartmentThenSalary => by_department_then_salary_desc,
            SortKey::PerformanceThenExperience => by_performance_then_experience_desc,
        }
    }
}
