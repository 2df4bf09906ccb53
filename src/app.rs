//! The application's two stores, built once at startup and handed to callers
//! by reference.

use crate::catalog::CatalogOrderStore;
use crate::config::AppConfig;
use crate::db::Database;
use crate::employees::EmployeeStore;
use crate::error::{Result, StoreError};
use crate::storage::KeyValueStore;
use std::sync::Arc;

/// Holds whichever stores have been provided. Reaching for one that was not
/// provided is an error rather than a silently empty store.
#[derive(Default)]
pub struct AppState {
    catalog: Option<CatalogOrderStore>,
    employees: Option<EmployeeStore>,
}

impl AppState {
    /// Opens the SQLite database named by `config` and restores both stores from it.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let db = Database::open(&config.database_path())?;
        db.initialize()?;
        tracing::info!(path = %config.database_path().display(), "Database ready");

        Self::with_storage(Arc::new(db), config)
    }

    pub fn with_storage(storage: Arc<dyn KeyValueStore>, config: &AppConfig) -> Result<Self> {
        let catalog = CatalogOrderStore::open(storage.clone(), &config.catalog_key)?;
        let employees = EmployeeStore::open(storage, &config.employee_key)?;

        Ok(Self {
            catalog: Some(catalog),
            employees: Some(employees),
        })
    }

    pub fn provide_catalog(&mut self, store: CatalogOrderStore) {
        self.catalog = Some(store);
    }

    pub fn provide_employees(&mut self, store: EmployeeStore) {
        self.employees = Some(store);
    }

    pub fn catalog(&self) -> Result<&CatalogOrderStore> {
        self.catalog
            .as_ref()
            .ok_or(StoreError::NotInitialized("CatalogOrderStore"))
    }

    pub fn catalog_mut(&mut self) -> Result<&mut CatalogOrderStore> {
        self.catalog
            .as_mut()
            .ok_or(StoreError::NotInitialized("CatalogOrderStore"))
    }

    pub fn employees(&self) -> Result<&EmployeeStore> {
        self.employees
            .as_ref()
            .ok_or(StoreError::NotInitialized("EmployeeStore"))
    }

    pub fn employees_mut(&mut self) -> Result<&mut EmployeeStore> {
        self.employees
            .as_mut()
            .ok_or(StoreError::NotInitialized("EmployeeStore"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn empty_state_rejects_access() {
        let mut state = AppState::default();

        assert!(matches!(
            state.catalog(),
            Err(StoreError::NotInitialized("CatalogOrderStore"))
        ));
        assert!(matches!(
            state.employees_mut(),
            Err(StoreError::NotInitialized("EmployeeStore"))
        ));
    }

    #[test]
    fn provided_store_becomes_reachable() {
        let mut state = AppState::default();
        state.provide_employees(EmployeeStore::in_memory().unwrap());

        assert_eq!(state.employees().unwrap().employees().len(), 4);
        assert!(state.catalog().is_err());
    }

    #[test]
    fn stores_share_storage_under_distinct_keys() {
        let storage = Arc::new(MemoryStorage::new());
        let config = AppConfig::default();

        let _state = AppState::with_storage(storage.clone(), &config).unwrap();

        let catalog = storage.get("restaurantData").unwrap().unwrap();
        let employees = storage.get("employeeData").unwrap().unwrap();
        assert!(catalog.contains("menuItems"));
        assert!(employees.contains("salaryPayments"));
        assert!(!catalog.contains("salaryPayments"));
    }
}
