//! Employee record model shared by the HR slice and its surfaces.

pub mod employee;
pub mod error;
pub mod id;
pub mod update;

pub use employee::{Employee, NewEmployee};
pub use error::{ValidationError, ValidationResult};
pub use id::EmployeeId;
pub use update::FieldUpdate;

/// Highest performance rating an employee can hold.
pub const MAX_RATING: f64 = 5.0;
