use gloo_storage::Storage as GlooStorage;
use motus_domain::StorageError;

use crate::KeyValue;

/// Browser `localStorage` backend.
pub struct Browser;

impl KeyValue for Browser {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        gloo_storage::LocalStorage::raw()
            .get_item(key)
            .map_err(|err| StorageError::Other(format!("{err:?}").into()))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // Browsers reject writes here only when the storage quota is
        // exhausted.
        gloo_storage::LocalStorage::raw()
            .set_item(key, value)
            .map_err(|_| StorageError::QuotaExceeded)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        gloo_storage::LocalStorage::raw()
            .remove_item(key)
            .map_err(|err| StorageError::Other(format!("{err:?}").into()))
    }
}
