mod config;
mod roster;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use entity::{Employee, EmployeeId};
use platform_obs::{ObsConfig, init_tracing};
use products_hr::{
    EmployeeStore, ReportGenerator, SalaryManager, SearchEngine, SortKey, report::format_money,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::config::{AppConfig, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "hr", version, about = "Employee directory reports and queries")]
struct Cli {
    /// JSON roster to load (falls back to HR_ROSTER_PATH).
    #[arg(long, global = true, value_name = "FILE")]
    roster: Option<PathBuf>,
    /// Output format (falls back to HR_OUTPUT).
    #[arg(long, global = true, value_enum)]
    output: Option<OutputFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every employee.
    List {
        #[arg(long, value_enum, default_value_t = SortArg::Experience)]
        sort: SortArg,
    },
    /// Filter employees.
    #[command(subcommand)]
    Search(SearchCommand),
    /// Print a formatted report.
    Report {
        #[arg(value_enum)]
        kind: ReportKind,
    },
    /// Payroll statistics.
    Stats,
    /// First N employees by natural ordering (least experienced first).
    Top { n: usize },
    /// Apply a salary raise in memory and show the result.
    Raise {
        #[command(subcommand)]
        rule: RaiseRule,
        /// Percentage raise, e.g. 5 for 5%.
        #[arg(long, global = true, default_value_t = 5.0)]
        percent: f64,
    },
    /// Update one field of an employee and show the record.
    Update {
        id: EmployeeId,
        field: String,
        value: String,
    },
}

#[derive(Subcommand, Debug)]
enum SearchCommand {
    Department { department: String },
    Name { fragment: String },
    Rating { min: f64 },
    Salary { min: f64, max: f64 },
    Active,
}

#[derive(Subcommand, Debug)]
enum RaiseRule {
    /// Active employees rated at least MIN_RATING.
    Performance { min_rating: f64 },
    /// Active employees with at least MIN_YEARS of experience.
    Experience { min_years: u32 },
    /// Active employees in DEPARTMENT.
    Department { department: String },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ReportKind {
    Department,
    Salary,
    Performance,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Experience,
    Salary,
    Performance,
    Department,
    Name,
    DepartmentSalary,
    PerformanceExperience,
}

impl From<SortArg> for SortKey {
    fn from(value: SortArg) -> Self {
        match value {
            SortArg::Experience => SortKey::Experience,
            SortArg::Salary => SortKey::Salary,
            SortArg::Performance => SortKey::Performance,
            SortArg::Department => SortKey::Department,
            SortArg::Name => SortKey::Name,
            SortArg::DepartmentSalary => SortKey::DepartmentThenSalary,
            SortArg::PerformanceExperience => SortKey::PerformanceThenExperience,
        }
    }
}

#[derive(Serialize)]
struct RaiseOutcome {
    raised: usize,
    employees: Vec<Employee>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = AppConfig::load()?;
    init_tracing(ObsConfig::default().with_filter(config.log_filter.clone()))?;

    if let Some(path) = cli.roster {
        config.roster_path = Some(path);
    }
    if let Some(output) = cli.output {
        config.output = output;
    }

    let mut store = match &config.roster_path {
        Some(path) => roster::load(path)?,
        None => {
            warn!("no roster given; starting with an empty directory");
            EmployeeStore::new()
        }
    };

    let rendered = run(cli.command, &mut store, config.output)?;
    print!("{rendered}");
    Ok(())
}

fn run(command: Command, store: &mut EmployeeStore, output: OutputFormat) -> Result<String> {
    match command {
        Command::List { sort } => {
            let employees = SearchEngine::new(store).sort_by(SortKey::from(sort).comparator());
            employee_listing(store, &employees, output)
        }
        Command::Search(search) => {
            let engine = SearchEngine::new(store);
            let matches = match search {
                SearchCommand::Department { department } => engine.find_by_department(&department),
                SearchCommand::Name { fragment } => engine.find_by_name(&fragment),
                SearchCommand::Rating { min } => engine.find_by_minimum_rating(min),
                SearchCommand::Salary { min, max } => engine.find_by_salary_range(min, max),
                SearchCommand::Active => engine.find_active_employees(),
            }?;
            match output {
                OutputFormat::Text => Ok(ReportGenerator::new(store).search_results(&matches)),
                OutputFormat::Json => to_json(&matches),
            }
        }
        Command::Report { kind } => {
            let reports = ReportGenerator::new(store);
            Ok(match kind {
                ReportKind::Department => reports.department_report(),
                ReportKind::Salary => reports.salary_distribution_report(),
                ReportKind::Performance => reports.performance_report(),
            })
        }
        Command::Stats => {
            let summary = SalaryManager::new(store).summary();
            match output {
                OutputFormat::Json => to_json(&summary),
                OutputFormat::Text => Ok(format!(
                    "Employees: {}\nAverage salary: {}\nActive payroll: {}\nSalary gap: {}\n",
                    summary.headcount,
                    format_money(summary.average_salary),
                    format_money(summary.total_cost),
                    format_money(summary.salary_gap)
                )),
            }
        }
        Command::Top { n } => {
            let employees = SalaryManager::new(store).top_paid(n)?;
            employee_listing(store, &employees, output)
        }
        Command::Raise { rule, percent } => {
            let mut manager = SalaryManager::new(store);
            let raised = match rule {
                RaiseRule::Performance { min_rating } => {
                    manager.raise_by_performance(min_rating, percent)
                }
                RaiseRule::Experience { min_years } => {
                    manager.raise_by_experience(min_years, percent)
                }
                RaiseRule::Department { department } => {
                    manager.raise_by_department(&department, percent)
                }
            }?;
            info!(raised, percent, "raise applied in memory");
            let employees = SearchEngine::new(store).by_salary();
            match output {
                OutputFormat::Json => to_json(&RaiseOutcome { raised, employees }),
                OutputFormat::Text => Ok(format!(
                    "Raised {raised} employee(s) by {percent}%\n{}",
                    SalaryManager::new(store).format_salary_report(&employees)
                )),
            }
        }
        Command::Update { id, field, value } => {
            store.update_field(&id, &field, &value)?;
            let updated = store
                .get_by_id(&id)
                .with_context(|| format!("employee {id} vanished after update"))?;
            match output {
                OutputFormat::Json => to_json(&updated),
                OutputFormat::Text => Ok(format!("{updated}\n")),
            }
        }
    }
}

fn employee_listing(
    store: &EmployeeStore,
    employees: &[Employee],
    output: OutputFormat,
) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(ReportGenerator::new(store).employee_table(employees)),
        OutputFormat::Json => to_json(&employees),
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}
