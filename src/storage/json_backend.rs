use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use tracing::warn;

use crate::{
    core::utils::{ensure_dir, PathResolver},
    errors::{FormError, Result},
    utils::persistence::write_atomic,
};

use super::PreferencesStore;

/// File-backed preferences: a single JSON object mapping keys to string values.
#[derive(Debug, Clone)]
pub struct JsonPreferences {
    path: PathBuf,
}

impl JsonPreferences {
    /// Opens (without reading) the preferences file inside `root`, or inside the
    /// default app data directory when `root` is `None`.
    pub fn new(root: Option<PathBuf>, file_name: &str) -> Result<Self> {
        let base = PathResolver::resolve_base(root);
        ensure_dir(&base)?;
        Ok(Self {
            path: base.join(file_name),
        })
    }

    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let data = fs::read_to_string(&self.path)?;
        if data.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        Ok(serde_json::from_str(&data)?)
    }

    fn write_all(&self, values: &BTreeMap<String, String>) -> Result<()> {
        let json = serde_json::to_string_pretty(values)?;
        write_atomic(&self.path, &json)
    }
}

impl PreferencesStore for JsonPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let mut values = self.read_all()?;
        Ok(values.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // A file holding invalid JSON is replaced rather than blocking every write.
        let mut values = match self.read_all() {
            Ok(values) => values,
            Err(FormError::Serde(err)) => {
                warn!(path = %self.path.display(), error = %err, "replacing unreadable preferences");
                BTreeMap::new()
            }
            Err(err) => return Err(err),
        };
        values.insert(key.to_string(), value.to_string());
        self.write_all(&values)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut values = self.read_all()?;
        if values.remove(key).is_some() {
            self.write_all(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn values_survive_reopening() {
        let temp = tempdir().unwrap();
        let store = JsonPreferences::new(Some(temp.path().to_path_buf()), "prefs.json").unwrap();
        store.set("expenses", "[]").unwrap();
        store.set("other", "x").unwrap();

        let reopened = JsonPreferences::at_path(temp.path().join("prefs.json"));
        assert_eq!(reopened.get("expenses").unwrap().as_deref(), Some("[]"));
        assert_eq!(reopened.get("other").unwrap().as_deref(), Some("x"));
        assert_eq!(reopened.get("missing").unwrap(), None);
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let temp = tempdir().unwrap();
        let store = JsonPreferences::at_path(temp.path().join("absent.json"));
        assert_eq!(store.get("expenses").unwrap(), None);
        store.remove("expenses").unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn corrupt_file_is_replaced_on_write() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("prefs.json");
        fs::write(&path, "{not json").unwrap();
        let store = JsonPreferences::at_path(&path);

        assert!(store.get("expenses").is_err());
        store.set("expenses", "[]").unwrap();
        assert_eq!(store.get("expenses").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn read_failure_is_reported_and_file_kept() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("prefs.json");
        let bytes = [0xff, 0xfe, 0x00, 0x7b];
        fs::write(&path, bytes).unwrap();
        let store = JsonPreferences::at_path(&path);

        let err = store.set("expenses", "[]").unwrap_err();
        assert!(matches!(err, FormError::Io(_)));
        assert_eq!(fs::read(&path).unwrap(), bytes);
    }
}
