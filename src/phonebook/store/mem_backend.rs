use super::backend::RecordBackend;
use crate::error::{PhonebookError, Result};
use crate::model::Record;
use std::cell::{Cell, RefCell};

/// In-memory backend for testing.
///
/// Uses `RefCell` for interior mutability since the phonebook is single-threaded,
/// which lets `RecordBackend` keep `&self` for every method.
#[derive(Default)]
pub struct MemBackend {
    table: RefCell<Option<Vec<Record>>>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with an already persisted table.
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            table: RefCell::new(Some(records)),
            ..Self::default()
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Snapshot of what is currently persisted.
    pub fn persisted(&self) -> Option<Vec<Record>> {
        self.table.borrow().clone()
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl RecordBackend for MemBackend {
    fn load(&self) -> Result<Option<Vec<Record>>> {
        Ok(self.table.borrow().clone())
    }

    fn save(&self, records: &[Record]) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(PhonebookError::Store("Simulated write error".to_string()));
        }
        *self.table.borrow_mut() = Some(records.to_vec());
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
