use super::*;
use crate::game::GameError;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;

/// In-process storage. Clones share the same map, which is how several
/// client views of one record are modelled.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage(Arc<Mutex<HashMap<String, String>>>);

impl MemoryStorage {
    fn with<T>(&self, f: impl FnOnce(&mut HashMap<String, String>) -> T) -> Result<T, GameError> {
        self.0
            .lock()
            .map(|mut map| f(&mut map))
            .map_err(|e| GameError::Persistence(e.to_string()))
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, GameError> {
        self.with(|map| map.get(key).cloned())
    }
    fn set(&self, key: &str, value: &str) -> Result<(), GameError> {
        self.with(|map| map.insert(key.to_string(), value.to_string()))
            .map(|_| ())
    }
    fn remove(&self, key: &str) -> Result<(), GameError> {
        self.with(|map| map.remove(key)).map(|_| ())
    }
    fn batch(&self, entries: &[(&str, Option<String>)]) -> Result<(), GameError> {
        self.with(|map| {
            for (key, value) in entries {
                match value {
                    Some(value) => map.insert(key.to_string(), value.clone()),
                    None => map.remove(*key),
                };
            }
        })
    }
}
