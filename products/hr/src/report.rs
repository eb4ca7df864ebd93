//! Human-readable reports over store snapshots. Nothing here mutates.

use std::{collections::BTreeMap, fmt, fmt::Write as _};

use entity::Employee;
use serde::Serialize;

use crate::{EmployeeStore, compare, search::mean};

const RULE: &str = "==============================================";
const THIN_RULE: &str = "------------------------------------------";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub enum SalaryBand {
    Below50k,
    From50k,
    From75k,
    From100k,
    From125k,
}

impl SalaryBand {
    pub const ALL: [SalaryBand; 5] = [
        SalaryBand::Below50k,
        SalaryBand::From50k,
        SalaryBand::From75k,
        SalaryBand::From100k,
        SalaryBand::From125k,
    ];

    pub fn of(salary: f64) -> Self {
        match salary {
            s if s < 50_000.0 => SalaryBand::Below50k,
            s if s < 75_000.0 => SalaryBand::From50k,
            s if s < 100_000.0 => SalaryBand::From75k,
            s if s < 125_000.0 => SalaryBand::From100k,
            _ => SalaryBand::From125k,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SalaryBand::Below50k => "Below $50,000",
            SalaryBand::From50k => "$50,000 - $74,999",
            SalaryBand::From75k => "$75,000 - $99,999",
            SalaryBand::From100k => "$100,000 - $124,999",
            SalaryBand::From125k => "$125,000 and above",
        }
    }
}

/// Rating buckets, best first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
pub enum PerformanceBand {
    Outstanding,
    Excellent,
    Good,
    Fair,
    Poor,
}

impl PerformanceBand {
    pub const ALL: [PerformanceBand; 5] = [
        PerformanceBand::Outstanding,
        PerformanceBand::Excellent,
        PerformanceBand::Good,
        PerformanceBand::Fair,
        PerformanceBand::Poor,
    ];

    pub fn of(rating: f64) -> Self {
        match rating {
            r if r < 2.0 => PerformanceBand::Poor,
            r if r < 3.0 => PerformanceBand::Fair,
            r if r < 4.0 => PerformanceBand::Good,
            r if r < 4.5 => PerformanceBand::Excellent,
            _ => PerformanceBand::Outstanding,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PerformanceBand::Outstanding => "Outstanding (4.5-5.0)",
            PerformanceBand::Excellent => "Excellent (4.0-4.4)",
            PerformanceBand::Good => "Good (3.0-3.9)",
            PerformanceBand::Fair => "Fair (2.0-2.9)",
            PerformanceBand::Poor => "Poor (0-1.9)",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct ReportGenerator<'a> {
    store: &'a EmployeeStore,
}

impl<'a> ReportGenerator<'a> {
    pub fn new(store: &'a EmployeeStore) -> Self {
        Self { store }
    }

    /// Per-department headcount, salary and rating summary. Departments are
    /// listed alphabetically, members by name.
    pub fn department_report(&self) -> String {
        let groups = self.group_by(|e| e.department().to_string());
        if groups.is_empty() {
            return "No employees in any department.\n".to_string();
        }
        render(|out| {
            writeln!(out, "=================== Department Report ===================")?;
            for (department, members) in &groups {
                let active = members.iter().filter(|e| e.is_active()).count();
                writeln!(out)?;
                writeln!(out, "Department: {department}")?;
                writeln!(out, "Number of Employees: {}", members.len())?;
                writeln!(out, "Active Employees: {active}")?;
                writeln!(
                    out,
                    "Average Salary: {}",
                    format_money(mean(members.iter().map(Employee::salary)))
                )?;
                writeln!(
                    out,
                    "Average Performance Rating: {:.2}",
                    mean(members.iter().map(Employee::performance_rating))
                )?;
                writeln!(out, "\nEmployees:")?;
                for employee in members {
                    writeln!(
                        out,
                        "- {} (Experience: {} years, Rating: {:.1})",
                        employee.name(),
                        employee.years_of_experience(),
                        employee.performance_rating()
                    )?;
                }
                writeln!(out, "---------------------------------------------------")?;
            }
            Ok(())
        })
    }

    /// Headcount per salary band. Every band is present, zero or not.
    pub fn salary_distribution(&self) -> Vec<(SalaryBand, usize)> {
        let mut counts: BTreeMap<SalaryBand, usize> =
            SalaryBand::ALL.into_iter().map(|band| (band, 0)).collect();
        for employee in self.store.values() {
            *counts.entry(SalaryBand::of(employee.salary())).or_insert(0) += 1;
        }
        counts.into_iter().collect()
    }

    pub fn salary_distribution_report(&self) -> String {
        let distribution = self.salary_distribution();
        render(|out| {
            writeln!(out, "============= Salary Distribution =============")?;
            for (band, count) in &distribution {
                writeln!(out, "{:<20}: {count} employee(s)", band.label())?;
            }
            writeln!(out, "{RULE}")
        })
    }

    /// Members of every rating band, best band first.
    pub fn performance_groups(&self) -> Vec<(PerformanceBand, Vec<Employee>)> {
        let mut groups = self.group_by(|e| PerformanceBand::of(e.performance_rating()));
        PerformanceBand::ALL
            .into_iter()
            .map(|band| (band, groups.remove(&band).unwrap_or_default()))
            .collect()
    }

    pub fn performance_report(&self) -> String {
        let groups = self.performance_groups();
        render(|out| {
            writeln!(out, "============= Performance Report =============")?;
            for (band, members) in &groups {
                writeln!(out, "\n{}: {} employee(s)", band.label(), members.len())?;
                if members.is_empty() {
                    continue;
                }
                writeln!(out, "{THIN_RULE}")?;
                for employee in members {
                    writeln!(
                        out,
                        "- {} (Dept: {}, Rating: {:.1})",
                        employee.name(),
                        employee.department(),
                        employee.performance_rating()
                    )?;
                }
            }
            writeln!(out, "{RULE}")
        })
    }

    /// Full roster table in the given order.
    pub fn employee_table(&self, employees: &[Employee]) -> String {
        if employees.is_empty() {
            return "No employees to display.\n".to_string();
        }
        render(|out| {
            writeln!(out, "============= Employee List =============")?;
            writeln!(
                out,
                "{:<20} {:<15} {:>12} {:<8} {:<6} {}",
                "Name", "Department", "Salary", "Rating", "Years", "Active"
            )?;
            writeln!(out, "{THIN_RULE}")?;
            for employee in employees {
                writeln!(
                    out,
                    "{:<20} {:<15} {:>12} {:<8.1} {:<6} {}",
                    employee.name(),
                    employee.department(),
                    format_money(employee.salary()),
                    employee.performance_rating(),
                    employee.years_of_experience(),
                    if employee.is_active() { "Yes" } else { "No" }
                )?;
            }
            writeln!(out, "{RULE}")
        })
    }

    pub fn search_results(&self, employees: &[Employee]) -> String {
        if employees.is_empty() {
            return "No matching employees found.\n".to_string();
        }
        render(|out| {
            writeln!(out, "===== Search Results =====")?;
            writeln!(out, "Found {} matching employees:", employees.len())?;
            for employee in employees {
                writeln!(out, "{employee}")?;
            }
            writeln!(out, "=========================")
        })
    }

    fn group_by<K, F>(&self, key: F) -> BTreeMap<K, Vec<Employee>>
    where
        K: Ord,
        F: Fn(&Employee) -> K,
    {
        let mut groups: BTreeMap<K, Vec<Employee>> = BTreeMap::new();
        for employee in self.store.values() {
            groups.entry(key(employee)).or_default().push(employee.clone());
        }
        for members in groups.values_mut() {
            members.sort_by(compare::by_name);
        }
        groups
    }
}

/// Salary table used by the salary manager.
pub fn salary_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return "No employees to display in salary report.\n".to_string();
    }
    render(|out| {
        writeln!(out, "============= SALARY REPORT =============")?;
        writeln!(
            out,
            "{:<20} | {:<15} | {:>12} | RATING",
            "NAME", "DEPARTMENT", "SALARY"
        )?;
        writeln!(out, "{THIN_RULE}")?;
        for employee in employees {
            writeln!(
                out,
                "{:<20} | {:<15} | {:>12} | {:.1}",
                employee.name(),
                employee.department(),
                format_money(employee.salary()),
                employee.performance_rating()
            )?;
        }
        writeln!(out, "=========================================")
    })
}

/// `$1,234,567.89` style amount.
pub fn format_money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

fn render(build: impl FnOnce(&mut String) -> fmt::Result) -> String {
    let mut out = String::new();
    // fmt::Write for String is infallible
    let _ = build(&mut out);
    out
}
