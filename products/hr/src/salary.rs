use std::collections::BTreeMap;

use entity::{Employee, EmployeeId, FieldUpdate};
use tracing::{debug, info_span};

use crate::{
    EmployeeStore, HrError, HrResult, compare, report,
    search::{mean, same_department},
};

/// Salary rules and cost statistics. Raises mutate the borrowed store.
#[derive(Debug)]
pub struct SalaryManager<'a> {
    store: &'a mut EmployeeStore,
}

impl<'a> SalaryManager<'a> {
    pub fn new(store: &'a mut EmployeeStore) -> Self {
        Self { store }
    }

    /// Raise every active employee rated at least `min_rating`.
    pub fn raise_by_performance(&mut self, min_rating: f64, percent: f64) -> HrResult<usize> {
        self.raise_where("performance", percent, |e| {
            e.performance_rating() >= min_rating
        })
    }

    /// Raise every active employee with at least `min_years` of experience.
    pub fn raise_by_experience(&mut self, min_years: u32, percent: f64) -> HrResult<usize> {
        self.raise_where("experience", percent, |e| {
            e.years_of_experience() >= min_years
        })
    }

    /// Raise every active employee of a department (case-insensitive).
    pub fn raise_by_department(&mut self, department: &str, percent: f64) -> HrResult<usize> {
        self.raise_where("department", percent, |e| {
            same_department(e.department(), department)
        })
    }

    /// The `n` employees that come first in natural ordering, i.e. the least
    /// experienced ones. Salary plays no part in the selection.
    pub fn top_paid(&self, n: usize) -> HrResult<Vec<Employee>> {
        if n == 0 {
            return Err(HrError::invalid_argument(
                "number of employees must be positive",
            ));
        }
        let mut employees = self.store.get_all_sorted();
        employees.truncate(n);
        Ok(employees)
    }

    pub fn average_salary(&self) -> f64 {
        mean(self.store.values().map(Employee::salary))
    }

    /// `0.0` when the department has no employees.
    pub fn average_salary_by_department(&self, department: &str) -> f64 {
        mean(
            self.store
                .values()
                .filter(|e| same_department(e.department(), department))
                .map(Employee::salary),
        )
    }

    pub fn average_salary_per_department(&self) -> BTreeMap<String, f64> {
        let mut groups: BTreeMap<String, (f64, usize)> = BTreeMap::new();
        for employee in self.store.values() {
            let entry = groups
                .entry(employee.department().to_string())
                .or_insert((0.0, 0));
            entry.0 += employee.salary();
            entry.1 += 1;
        }
        groups
            .into_iter()
            .map(|(department, (sum, count))| (department, sum / count as f64))
            .collect()
    }

    /// Payroll cost of active employees.
    pub fn total_salary_cost(&self) -> f64 {
        self.store
            .values()
            .filter(|e| e.is_active())
            .map(Employee::salary)
            .sum()
    }

    /// Payroll cost of active employees per department.
    pub fn total_salary_cost_per_department(&self) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for employee in self.store.values().filter(|e| e.is_active()) {
            *totals
                .entry(employee.department().to_string())
                .or_insert(0.0) += employee.salary();
        }
        totals
    }

    /// Difference between the highest and lowest salary; `0.0` when the store
    /// is empty.
    pub fn salary_gap(&self) -> f64 {
        let (min, max) = self.store.values().map(Employee::salary).fold(
            (f64::INFINITY, f64::NEG_INFINITY),
            |(min, max), salary| (min.min(salary), max.max(salary)),
        );
        if min > max { 0.0 } else { max - min }
    }

    /// Whether anyone in the department earns strictly more than `threshold`.
    pub fn any_above_salary(&self, department: &str, threshold: f64) -> bool {
        self.store
            .values()
            .filter(|e| same_department(e.department(), department))
            .any(|e| e.salary() > threshold)
    }

    /// Tabular salary listing for the given employees.
    pub fn format_salary_report(&self, employees: &[Employee]) -> String {
        report::salary_table(employees)
    }

    /// Snapshot of the payroll figures, sorted by salary for display.
    pub fn summary(&self) -> SalarySummary {
        let mut by_salary = self.store.get_all();
        by_salary.sort_by(compare::by_salary_desc);
        SalarySummary {
            headcount: self.store.count(),
            average_salary: self.average_salary(),
            total_cost: self.total_salary_cost(),
            salary_gap: self.salary_gap(),
            highest_paid: by_salary.first().map(|e| e.id().clone()),
            average_per_department: self.average_salary_per_department(),
            cost_per_department: self.total_salary_cost_per_department(),
        }
    }

    fn raise_where<P>(&mut self, rule: &'static str, percent: f64, eligible: P) -> HrResult<usize>
    where
        P: Fn(&Employee) -> bool,
    {
        if percent.is_nan() || percent <= 0.0 {
            return Err(HrError::invalid_argument(format!(
                "percentage raise must be positive, got {percent}"
            )));
        }
        let span = info_span!("salary_raise", rule, percent);
        let _guard = span.enter();

        let factor = 1.0 + percent / 100.0;
        let raises: Vec<(EmployeeId, f64)> = self
            .store
            .values()
            .filter(|e| e.is_active() && eligible(e))
            .map(|e| (e.id().clone(), e.salary() * factor))
            .collect();

        // validate the whole batch before touching any record
        if let Some((id, salary)) = raises.iter().find(|(_, salary)| !salary.is_finite()) {
            return Err(HrError::invalid_argument(format!(
                "raise would push salary of employee {id} out of range ({salary})"
            )));
        }

        for (id, salary) in &raises {
            self.store.update(id, FieldUpdate::Salary(*salary))?;
        }
        debug!(raised = raises.len(), "salary raise applied");
        Ok(raises.len())
    }
}

/// Payroll figures bundled for presentation layers.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SalarySummary {
    pub headcount: usize,
    pub average_salary: f64,
    pub total_cost: f64,
    pub salary_gap: f64,
    pub highest_paid: Option<EmployeeId>,
    pub average_per_department: BTreeMap<String, f64>,
    pub cost_per_department: BTreeMap<String, f64>,
}
