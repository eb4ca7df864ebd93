use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::{EmployeeStore, ReportGenerator, SalaryManager, SearchEngine};

/// Store handle for concurrent front ends. One lock serializes every read and
/// write, including snapshot iteration.
#[derive(Clone, Debug, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<EmployeeStore>>,
}

impl SharedStore {
    pub fn new(store: EmployeeStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    pub fn read<R>(&self, f: impl FnOnce(&EmployeeStore) -> R) -> R {
        f(&self.lock())
    }

    pub fn write<R>(&self, f: impl FnOnce(&mut EmployeeStore) -> R) -> R {
        f(&mut self.lock())
    }

    pub fn search<R>(&self, f: impl FnOnce(SearchEngine<'_>) -> R) -> R {
        self.read(|store| f(SearchEngine::new(store)))
    }

    pub fn reports<R>(&self, f: impl FnOnce(ReportGenerator<'_>) -> R) -> R {
        self.read(|store| f(ReportGenerator::new(store)))
    }

    pub fn salaries<R>(&self, f: impl FnOnce(&mut SalaryManager<'_>) -> R) -> R {
        self.write(|store| f(&mut SalaryManager::new(store)))
    }

    fn lock(&self) -> MutexGuard<'_, EmployeeStore> {
        // updates are all-or-nothing, so a poisoned store is still consistent
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
