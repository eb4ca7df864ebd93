use std::{cmp::Ordering, collections::BTreeMap, iter::FusedIterator, vec};

use entity::{Employee, MAX_RATING};

use crate::{EmployeeStore, HrError, HrResult, compare};

/// Read-only query layer over an [`EmployeeStore`].
///
/// Every call takes a fresh snapshot of the store, so results never reflect
/// later mutations.
#[derive(Clone, Copy, Debug)]
pub struct SearchEngine<'a> {
    store: &'a EmployeeStore,
}

impl<'a> SearchEngine<'a> {
    pub fn new(store: &'a EmployeeStore) -> Self {
        Self { store }
    }

    /// Case-insensitive exact match on department.
    pub fn find_by_department(&self, department: &str) -> HrResult<Vec<Employee>> {
        if department.trim().is_empty() {
            return Err(HrError::invalid_argument("department search term cannot be empty"));
        }
        Ok(self.filter(|e| same_department(e.department(), department)))
    }

    /// Case-insensitive substring match on name. The fragment is matched
    /// as given, surrounding whitespace included.
    pub fn find_by_name(&self, fragment: &str) -> HrResult<Vec<Employee>> {
        if fragment.is_empty() {
            return Err(HrError::invalid_argument("name search term cannot be empty"));
        }
        let needle = fragment.to_lowercase();
        Ok(self.filter(|e| e.name().to_lowercase().contains(&needle)))
    }

    pub fn find_by_minimum_rating(&self, min_rating: f64) -> HrResult<Vec<Employee>> {
        if !(0.0..=MAX_RATING).contains(&min_rating) {
            return Err(HrError::invalid_argument(format!(
                "minimum rating must be between 0 and {MAX_RATING}, got {min_rating}"
            )));
        }
        Ok(self.filter(|e| e.performance_rating() >= min_rating))
    }

    /// Inclusive on both ends. An inverted range matches nothing.
    pub fn find_by_salary_range(&self, min: f64, max: f64) -> HrResult<Vec<Employee>> {
        if min.is_nan() || max.is_nan() {
            return Err(HrError::invalid_argument("salary bounds must be numbers"));
        }
        Ok(self.filter(|e| (min..=max).contains(&e.salary())))
    }

    /// Active employees. An empty store is reported as [`HrError::NotFound`]
    /// rather than an empty list.
    pub fn find_active_employees(&self) -> HrResult<Vec<Employee>> {
        if self.store.is_empty() {
            return Err(HrError::NotFound("employees".into()));
        }
        Ok(self.filter(Employee::is_active))
    }

    pub fn by_experience(&self) -> Vec<Employee> {
        self.sort_by(compare::by_experience)
    }

    pub fn by_salary(&self) -> Vec<Employee> {
        self.sort_by(compare::by_salary_desc)
    }

    pub fn by_performance(&self) -> Vec<Employee> {
        self.sort_by(compare::by_performance_desc)
    }

    pub fn by_department_and_salary(&self) -> Vec<Employee> {
        self.sort_by(compare::by_department_then_salary_desc)
    }

    pub fn by_performance_and_experience(&self) -> Vec<Employee> {
        self.sort_by(compare::by_performance_then_experience_desc)
    }

    /// Snapshot sorted with any comparator. The sort is stable.
    pub fn sort_by<F>(&self, comparator: F) -> Vec<Employee>
    where
        F: FnMut(&Employee, &Employee) -> Ordering,
    {
        let mut employees = self.store.get_all();
        employees.sort_by(comparator);
        employees
    }

    /// Headcount per department, keyed by the department name as stored.
    pub fn department_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for employee in self.store.values() {
            *counts.entry(employee.department().to_string()).or_insert(0) += 1;
        }
        counts
    }

    /// Mean salary across every employee, `0.0` for an empty store.
    pub fn average_salary(&self) -> f64 {
        mean(self.store.values().map(Employee::salary))
    }

    /// Highest-rated employee. Ties resolve to whichever tied record the
    /// store yields first, which is unspecified.
    pub fn find_top_performer(&self) -> Option<Employee> {
        self.store
            .values()
            .reduce(|best, candidate| {
                if candidate.performance_rating() > best.performance_rating() {
                    candidate
                } else {
                    best
                }
            })
            .cloned()
    }

    /// Single-pass iterator over a snapshot taken now.
    pub fn iter(&self) -> Snapshot {
        Snapshot {
            inner: self.store.get_all().into_iter(),
        }
    }

    fn filter<P>(&self, mut predicate: P) -> Vec<Employee>
    where
        P: FnMut(&Employee) -> bool,
    {
        self.store
            .values()
            .filter(|e| predicate(*e))
            .cloned()
            .collect()
    }
}

impl IntoIterator for &SearchEngine<'_> {
    type Item = Employee;
    type IntoIter = Snapshot;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward-only walk over the employees captured when it was created.
#[derive(Debug)]
pub struct Snapshot {
    inner: vec::IntoIter<Employee>,
}

impl Iterator for Snapshot {
    type Item = Employee;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Snapshot {}

impl FusedIterator for Snapshot {}

pub(crate) fn same_department(stored: &str, wanted: &str) -> bool {
    stored.to_lowercase() == wanted.trim().to_lowercase()
}

pub(crate) fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use entity::{EmployeeId, FieldUpdate};

    fn emp(id: &str, name: &str, dept: &str, salary: f64, rating: f64, years: u32) -> Employee {
        Employee::new(EmployeeId::new(id).unwrap(), name, dept, salary, rating, years).unwrap()
    }

    fn store() -> EmployeeStore {
        [
            emp("1", "John Doe", "IT", 50_000.0, 4.2, 5),
            emp("2", "Jane Smith", "HR", 42_000.0, 3.8, 3),
            emp("3", "Bob Johnson", "IT", 65_000.0, 4.5, 7),
            emp("4", "Alice Brown", "Sales", 38_000.0, 3.2, 2).with_active(false),
        ]
        .into_iter()
        .collect()
    }

    fn sorted_ids(mut list: Vec<Employee>) -> Vec<String> {
        list.sort_by(|a, b| a.id().cmp(b.id()));
        list.into_iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn department_match_ignores_case() {
        let store = store();
        let engine = SearchEngine::new(&store);
        assert_eq!(sorted_ids(engine.find_by_department("it").unwrap()), ["1", "3"]);
        assert!(engine.find_by_department("Finance").unwrap().is_empty());
        assert_eq!(
            engine.find_by_department("  ").unwrap_err().code(),
            "INVALID_ARGUMENT"
        );
    }

    #[test]
    fn name_search_matches_substrings() {
        let store = store();
        let engine = SearchEngine::new(&store);
        assert_eq!(sorted_ids(engine.find_by_name("JOHN").unwrap()), ["1", "3"]);
        assert!(engine.find_by_name("").is_err());
    }

    #[test]
    fn name_search_keeps_surrounding_whitespace() {
        let store = store();
        let engine = SearchEngine::new(&store);
        assert_eq!(sorted_ids(engine.find_by_name("John ").unwrap()), ["1"]);
        assert_eq!(sorted_ids(engine.find_by_name(" Smith").unwrap()), ["2"]);
        assert_eq!(engine.find_by_name(" ").unwrap().len(), 4);
    }

    #[test]
    fn rating_filter_validates_bounds() {
        let store = store();
        let engine = SearchEngine::new(&store);
        assert_eq!(sorted_ids(engine.find_by_minimum_rating(4.0).unwrap()), ["1", "3"]);
        assert!(engine.find_by_minimum_rating(-0.1).is_err());
        assert!(engine.find_by_minimum_rating(5.5).is_err());
        assert!(engine.find_by_minimum_rating(f64::NAN).is_err());
    }

    #[test]
    fn salary_range_is_inclusive() {
        let store = store();
        let engine = SearchEngine::new(&store);
        assert_eq!(
            sorted_ids(engine.find_by_salary_range(42_000.0, 50_000.0).unwrap()),
            ["1", "2"]
        );
        assert!(engine.find_by_salary_range(60_000.0, 10.0).unwrap().is_empty());
        assert!(engine.find_by_salary_range(f64::NAN, 10.0).is_err());
    }

    #[test]
    fn active_lookup_on_empty_store_is_not_found() {
        let empty = EmployeeStore::new();
        let err = SearchEngine::new(&empty).find_active_employees().unwrap_err();
        assert_eq!(err.code(), "NOT_FOUND");

        let store = store();
        let active = SearchEngine::new(&store).find_active_employees().unwrap();
        assert_eq!(sorted_ids(active), ["1", "2", "3"]);
    }

    #[test]
    fn sorted_views_follow_their_keys() {
        let store = store();
        let engine = SearchEngine::new(&store);
        let salaries: Vec<f64> = engine.by_salary().iter().map(Employee::salary).collect();
        assert_eq!(salaries, [65_000.0, 50_000.0, 42_000.0, 38_000.0]);

        let names: Vec<String> = engine
            .by_department_and_salary()
            .into_iter()
            .map(|e| e.name().to_string())
            .collect();
        assert_eq!(names, ["Jane Smith", "Bob Johnson", "John Doe", "Alice Brown"]);

        let by_name = engine.sort_by(compare::by_name);
        assert_eq!(by_name[0].name(), "Alice Brown");
        assert_eq!(engine.by_performance()[0].name(), "Bob Johnson");
        assert_eq!(engine.by_experience()[0].name(), "Alice Brown");
    }

    #[test]
    fn aggregates() {
        let store = store();
        let engine = SearchEngine::new(&store);
        let counts = engine.department_counts();
        assert_eq!(counts.get("IT"), Some(&2));
        assert_eq!(counts.get("Sales"), Some(&1));
        assert_eq!(engine.average_salary(), 48_750.0);
        assert_eq!(engine.find_top_performer().unwrap().name(), "Bob Johnson");

        let empty = EmployeeStore::new();
        let engine = SearchEngine::new(&empty);
        assert_eq!(engine.average_salary(), 0.0);
        assert!(engine.find_top_performer().is_none());
    }

    #[test]
    fn iterator_walks_a_fixed_snapshot() {
        let mut store = store();
        let mut walk = SearchEngine::new(&store).iter();
        assert_eq!(walk.len(), 4);
        let first = walk.next().unwrap();
        assert_eq!(walk.by_ref().count(), 3);
        assert!(walk.next().is_none());

        store.update(first.id(), FieldUpdate::Salary(1.0)).unwrap();
        assert_ne!(first.salary(), 1.0);
        assert_eq!(SearchEngine::new(&store).into_iter().count(), 4);
    }
}
