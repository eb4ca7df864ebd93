mod common;

use common::{employee, id, seeded_store};
use entity::{Employee, FieldUpdate, ValidationError};
use products_hr::{
    HrError, PerformanceBand, ReportGenerator, SalaryBand, SalaryManager, SearchEngine, SortKey,
};

#[test]
fn seeded_directory_counts_departments() {
    let store = seeded_store();
    let counts = SearchEngine::new(&store).department_counts();
    assert_eq!(store.count(), 10);
    assert_eq!(counts["IT"], 3);
    assert_eq!(counts["Finance"], 3);
    assert_eq!(counts["HR"], 2);
    assert_eq!(counts["Marketing"], 2);
}

#[test]
fn department_raise_only_touches_active_members() {
    let mut store = seeded_store();
    let before: Vec<(String, f64)> = SearchEngine::new(&store)
        .find_by_department("HR")
        .unwrap()
        .into_iter()
        .map(|e| (e.id().to_string(), e.salary()))
        .collect();

    let raised = SalaryManager::new(&mut store)
        .raise_by_department("hr", 10.0)
        .unwrap();
    assert_eq!(raised, 1);

    for (raw_id, old_salary) in before {
        let current = store.get_by_id(&id(&raw_id)).unwrap();
        let expected = if current.is_active() { old_salary * 1.1 } else { old_salary };
        assert!((current.salary() - expected).abs() < 0.01, "{raw_id}");
    }
}

#[test]
fn performance_raise_counts_eligible_staff() {
    let mut store = seeded_store();
    let raised = SalaryManager::new(&mut store)
        .raise_by_performance(4.5, 5.0)
        .unwrap();
    assert_eq!(raised, 4);
    let jennifer = store.get_by_id(&id("e06")).unwrap();
    assert!((jennifer.salary() - 110_250.0).abs() < 0.01);
}

#[test]
fn payroll_aggregates() {
    let mut store = seeded_store();
    let manager = SalaryManager::new(&mut store);
    assert_eq!(manager.total_salary_cost(), 749_000.0);
    assert_eq!(manager.salary_gap(), 47_000.0);
    assert!((manager.average_salary() - 80_700.0).abs() < 1e-9);
    assert!((manager.average_salary_by_department("FINANCE") - 295_000.0 / 3.0).abs() < 1e-9);
    assert_eq!(manager.total_salary_cost_per_department()["HR"], 65_000.0);
    assert!(manager.any_above_salary("finance", 100_000.0));
    assert!(!manager.any_above_salary("marketing", 72_000.0));
}

#[test]
fn top_paid_selects_least_experienced_not_highest_salary() {
    let mut store = seeded_store();
    let top = SalaryManager::new(&mut store).top_paid(3).unwrap();
    let names: Vec<&str> = top.iter().map(Employee::name).collect();
    assert_eq!(names, ["David Taylor", "Robert Smith", "Sarah Johnson"]);
    assert!(!names.contains(&"Jennifer Lee"));
}

#[test]
fn failed_updates_leave_the_directory_unchanged() {
    let mut store = seeded_store();
    let before = store.get_all_sorted();

    assert_eq!(
        store.update(&id("nobody"), FieldUpdate::Salary(1.0)),
        Err(HrError::NotFound("employee nobody".into()))
    );
    assert_eq!(
        store.update(&id("e01"), FieldUpdate::Salary(-10.0)),
        Err(HrError::ValidationFailure(ValidationError::InvalidSalary(-10.0)))
    );
    assert_eq!(
        store.update_field(&id("e01"), "department", "   "),
        Err(HrError::ValidationFailure(ValidationError::EmptyDepartment))
    );
    assert_eq!(
        store.update_field(&id("e01"), "title", "Lead"),
        Err(HrError::InvalidField("title".into()))
    );

    assert_eq!(store.get_all_sorted(), before);
}

#[test]
fn moved_employee_shows_up_in_new_department() {
    let mut store = seeded_store();
    store.update_field(&id("e05"), "Department", "IT").unwrap();
    let engine = SearchEngine::new(&store);
    assert_eq!(engine.find_by_department("it").unwrap().len(), 4);
    assert_eq!(engine.find_by_department("Marketing").unwrap().len(), 1);
}

#[test]
fn sort_keys_drive_search_views() {
    let store = seeded_store();
    let engine = SearchEngine::new(&store);
    assert_eq!(engine.sort_by(SortKey::Salary.comparator()), engine.by_salary());
    let first = &engine.sort_by(SortKey::PerformanceThenExperience.comparator())[0];
    assert_eq!(first.name(), "Jennifer Lee");
    assert_eq!(engine.find_top_performer().unwrap().name(), "Jennifer Lee");
}

#[test]
fn report_bands_for_seeded_directory() {
    let store = seeded_store();
    let reports = ReportGenerator::new(&store);
    assert_eq!(
        reports.salary_distribution(),
        vec![
            (SalaryBand::Below50k, 0),
            (SalaryBand::From50k, 4),
            (SalaryBand::From75k, 5),
            (SalaryBand::From100k, 1),
            (SalaryBand::From125k, 0),
        ]
    );
    let sizes: Vec<(PerformanceBand, usize)> = reports
        .performance_groups()
        .into_iter()
        .map(|(band, members)| (band, members.len()))
        .collect();
    assert_eq!(
        sizes,
        vec![
            (PerformanceBand::Outstanding, 4),
            (PerformanceBand::Excellent, 3),
            (PerformanceBand::Good, 3),
            (PerformanceBand::Fair, 0),
            (PerformanceBand::Poor, 0),
        ]
    );
    let report = reports.performance_report();
    assert!(report.contains("Fair (2.0-2.9): 0 employee(s)"));
    assert!(report.contains("- Jennifer Lee (Dept: Finance, Rating: 4.9)"));
}

#[test]
fn search_results_render_each_match() {
    let mut store = seeded_store();
    store.add(employee("e11", "Will Wilson", "Ops", 40_000.0, 2.5, 1, true));
    let reports = ReportGenerator::new(&store);
    let matches = SearchEngine::new(&store).find_by_name("wilson").unwrap();
    let listing = reports.search_results(&matches);
    assert!(listing.contains("Found 3 matching employees:"));
    assert!(listing.contains("Will Wilson [e11] Ops"));
}
