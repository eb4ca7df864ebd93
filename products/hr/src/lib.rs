//! HR vertical slice: the in-memory employee store and the query, salary and
//! reporting layers that read through it.
//!
//! ```
//! use entity::{Employee, EmployeeId};
//! use products_hr::{EmployeeStore, SalaryManager, SearchEngine};
//!
//! let mut store = EmployeeStore::new();
//! let id = EmployeeId::new("e-1")?;
//! store.add(Employee::new(id.clone(), "Ada", "IT", 100.0, 4.8, 6)?);
//!
//! let raised = SalaryManager::new(&mut store).raise_by_performance(4.5, 5.0)?;
//! assert_eq!(raised, 1);
//! assert_eq!(SearchEngine::new(&store).find_by_department("it")?.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod compare;
pub mod error;
pub mod report;
pub mod salary;
pub mod search;
pub mod shared;
pub mod store;

pub use compare::{Comparator, SortKey};
pub use error::{HrError, HrResult};
pub use report::{PerformanceBand, ReportGenerator, SalaryBand};
pub use salary::{SalaryManager, SalarySummary};
pub use search::{SearchEngine, Snapshot};
pub use shared::SharedStore;
pub use store::EmployeeStore;
