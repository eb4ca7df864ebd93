//! Roster import: a JSON array of employee objects loaded into a fresh store.
//! Nothing is ever written back.

use std::path::Path;

use anyhow::{Context, Result};
use entity::Employee;
use products_hr::EmployeeStore;
use tracing::{info, warn};

pub fn load(path: &Path) -> Result<EmployeeStore> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read roster {}", path.display()))?;
    let store = parse(&raw).with_context(|| format!("invalid roster {}", path.display()))?;
    info!(path = %path.display(), employees = store.count(), "roster loaded");
    Ok(store)
}

pub fn parse(raw: &str) -> Result<EmployeeStore> {
    let employees: Vec<Employee> = serde_json::from_str(raw)?;
    let mut store = EmployeeStore::new();
    for employee in employees {
        let id = employee.id().clone();
        if !store.add(employee) {
            warn!(employee_id = %id, "duplicate id in roster; keeping the first entry");
        }
    }
    Ok(store)
}
