use entity::{Employee, EmployeeId};
use products_hr::EmployeeStore;

pub fn id(raw: &str) -> EmployeeId {
    EmployeeId::new(raw).expect("fixture id")
}

pub fn employee(
    raw_id: &str,
    name: &str,
    department: &str,
    salary: f64,
    rating: f64,
    years: u32,
    active: bool,
) -> Employee {
    Employee::new(id(raw_id), name, department, salary, rating, years)
        .expect("fixture employee")
        .with_active(active)
}

/// Ten-person roster spread over four departments.
pub fn seeded_store() -> EmployeeStore {
    [
        employee("e01", "John James", "IT", 78_000.0, 4.2, 15, true),
        employee("e02", "Sarah Johnson", "HR", 65_000.0, 3.8, 5, true),
        employee("e03", "Michael Brown", "Finance", 92_000.0, 4.5, 12, true),
        employee("e04", "Emily Wilson", "IT", 82_000.0, 4.7, 9, true),
        employee("e05", "Robert Smith", "Marketing", 68_000.0, 3.5, 4, true),
        employee("e06", "Jennifer Lee", "Finance", 105_000.0, 4.9, 15, true),
        employee("e07", "David Taylor", "HR", 58_000.0, 3.2, 2, false),
        employee("e08", "Jessica Martinez", "IT", 89_000.0, 4.3, 7, true),
        employee("e09", "Andrew Wilson", "Marketing", 72_000.0, 4.0, 6, true),
        employee("e10", "Sophia Chen", "Finance", 98_000.0, 4.6, 10, true),
    ]
    .into_iter()
    .collect()
}
