#![warn(clippy::pedantic)]

use motus_domain::StorageError;

#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod memory;
pub mod workouts;


/// Key-value backend with string keys and string values. One reserved
/// key holds the serialized workout list.
#[allow(clippy::missing_errors_doc)]
pub trait KeyValue {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<K: KeyValue + ?Sized> KeyValue for &K {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (*self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (*self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (*self).remove(key)
    }
}
