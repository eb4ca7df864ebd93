use std::collections::HashMap;

use entity::{Employee, EmployeeId, FieldUpdate};
use tracing::debug;

use crate::{HrError, HrResult, compare};

/// Authoritative in-memory collection of employees keyed by id.
///
/// Reads hand out owned snapshots; records only change through [`add`],
/// [`remove`] and [`update`]. Iteration order is unspecified.
///
/// [`add`]: EmployeeStore::add
/// [`remove`]: EmployeeStore::remove
/// [`update`]: EmployeeStore::update
#[derive(Clone, Debug, Default)]
pub struct EmployeeStore {
    employees: HashMap<EmployeeId, Employee>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new employee. Returns `false` and leaves the store unchanged
    /// when the id is already taken.
    pub fn add(&mut self, employee: Employee) -> bool {
        if self.employees.contains_key(employee.id()) {
            debug!(employee_id = %employee.id(), "duplicate employee id rejected");
            return false;
        }
        debug!(employee_id = %employee.id(), name = employee.name(), "employee added");
        self.employees.insert(employee.id().clone(), employee);
        true
    }

    pub fn remove(&mut self, id: &EmployeeId) -> bool {
        match self.employees.remove(id) {
            Some(removed) => {
                debug!(employee_id = %id, name = removed.name(), "employee removed");
                true
            }
            None => {
                debug!(employee_id = %id, "remove requested for unknown employee");
                false
            }
        }
    }

    pub fn get_by_id(&self, id: &EmployeeId) -> Option<Employee> {
        self.employees.get(id).cloned()
    }

    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.employees.contains_key(id)
    }

    pub fn get_all(&self) -> Vec<Employee> {
        self.employees.values().cloned().collect()
    }

    /// Snapshot ordered by years of experience. Ties keep their relative
    /// snapshot order.
    pub fn get_all_sorted(&self) -> Vec<Employee> {
        let mut employees = self.get_all();
        employees.sort_by(compare::by_experience);
        employees
    }

    pub fn count(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Apply a typed field update to one employee.
    ///
    /// Fails with [`HrError::NotFound`] when the id is unknown and with
    /// [`HrError::ValidationFailure`] when the value breaks the field's
    /// invariant. Either way no record changes.
    pub fn update(&mut self, id: &EmployeeId, update: FieldUpdate) -> HrResult<()> {
        let employee = self
            .employees
            .get_mut(id)
            .ok_or_else(|| HrError::employee_not_found(id))?;
        let field = update.field_name();
        employee.apply(update)?;
        debug!(employee_id = %id, field, "employee updated");
        Ok(())
    }

    /// String-keyed form of [`update`](EmployeeStore::update) for callers that
    /// collect a field name and raw value from a form.
    pub fn update_field(&mut self, id: &EmployeeId, field: &str, value: &str) -> HrResult<()> {
        if !self.contains(id) {
            return Err(HrError::employee_not_found(id));
        }
        let update = FieldUpdate::parse(field, value)?;
        self.update(id, update)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }
}

impl Extend<Employee> for EmployeeStore {
    /// Adds every employee whose id is not yet present; duplicates are skipped.
    fn extend<I: IntoIterator<Item = Employee>>(&mut self, iter: I) {
        for employee in iter {
            self.add(employee);
        }
    }
}

impl FromIterator<Employee> for EmployeeStore {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
