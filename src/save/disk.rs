use super::*;
use crate::game::GameError;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Storage backed by one JSON object on disk.
///
/// Every read goes back to the file, so separate processes pointed at the
/// same path see each other's writes. Writes replace the file through a
/// sibling temp file and rename.
#[derive(Debug, Clone)]
pub struct DiskStorage {
    path: PathBuf,
}

impl From<PathBuf> for DiskStorage {
    fn from(path: PathBuf) -> Self {
        Self { path }
    }
}

impl DiskStorage {
    /// `roshambo.json` in the working directory.
    pub fn local() -> Self {
        Self::from(
            std::env::current_dir()
                .unwrap_or_default()
                .join("roshambo.json"),
        )
    }
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
    fn read(&self) -> Result<BTreeMap<String, String>, GameError> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
    fn write(&self, map: &BTreeMap<String, String>) -> Result<(), GameError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let temp = self.path.with_extension("json.tmp");
        std::fs::write(&temp, serde_json::to_string_pretty(map)?)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }
}

impl Storage for DiskStorage {
    fn get(&self, key: &str) -> Result<Option<String>, GameError> {
        self.read().map(|map| map.get(key).cloned())
    }
    fn set(&self, key: &str, value: &str) -> Result<(), GameError> {
        let mut map = self.read()?;
        map.insert(key.to_string(), value.to_string());
        self.write(&map)
    }
    fn remove(&self, key: &str) -> Result<(), GameError> {
        let mut map = self.read()?;
        match map.remove(key) {
            Some(_) => self.write(&map),
            None => Ok(()),
        }
    }
    /// One read and one file replacement for the whole batch.
    fn batch(&self, entries: &[(&str, Option<String>)]) -> Result<(), GameError> {
        let mut map = self.read()?;
        for (key, value) in entries {
            match value {
                Some(value) => map.insert(key.to_string(), value.clone()),
                None => map.remove(*key),
            };
        }
        self.write(&map)
    }
}
