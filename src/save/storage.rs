use crate::game::GameError;

/// Flat string key/value persistence, the shape of browser local storage.
pub trait Storage {
    fn get(&self, key: &str) -> Result<Option<String>, GameError>;
    fn set(&self, key: &str, value: &str) -> Result<(), GameError>;
    fn remove(&self, key: &str) -> Result<(), GameError>;
    /// Sets every `Some` entry and removes every `None` entry. Backends that
    /// can apply the whole batch in one write override this.
    fn batch(&self, entries: &[(&str, Option<String>)]) -> Result<(), GameError> {
        for (key, value) in entries {
            match value {
                Some(value) => self.set(key, value)?,
                None => self.remove(key)?,
            }
        }
        Ok(())
    }
}
