use super::StorageBackend;
use crate::error::{Result, RollbookError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory backend for tests.
///
/// Uses `RefCell` for interior mutability since rollbook is
/// single-threaded; the `StorageBackend` trait can then keep `&self`
/// methods for all backends.
#[derive(Default)]
pub struct MemBackend {
    entries: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent writes fail, for exercising error paths.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(RollbookError::Store("Simulated write error".to_string()));
        }
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_remove_cycle() {
        let backend = MemBackend::new();
        assert_eq!(backend.read("user").unwrap(), None);

        backend.write("user", "{}").unwrap();
        assert_eq!(backend.read("user").unwrap().unwrap(), "{}");

        backend.remove("user").unwrap();
        assert_eq!(backend.read("user").unwrap(), None);
    }

    #[test]
    fn simulated_write_error_fails_writes_only() {
        let backend = MemBackend::new();
        backend.write("token", "t").unwrap();

        backend.set_simulate_write_error(true);
        assert!(backend.write("token", "u").is_err());

        // Reads and the prior value are unaffected
        assert_eq!(backend.read("token").unwrap().unwrap(), "t");
    }
}
