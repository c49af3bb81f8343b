// Native-only code i.e. gated in mod.rs by #[cfg(not(target_arch = "wasm32"))] so no need to gate internally here

use {
    crate::session::{KeyValueStore, StoreError},
    std::{
        collections::BTreeMap,
        fs::File,
        io::{BufReader, BufWriter, ErrorKind},
        path::{Path, PathBuf},
    },
};

/// A flat JSON object on disk. Every write rewrites the whole file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if entries.is_empty() {
            return match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), entries)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every future write.
        let mut entries = self.load().unwrap_or_default();
        entries.insert(key.to_owned(), value.to_owned());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.load().unwrap_or_default();
        entries.remove(key);
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path() -> PathBuf {
        std::env::temp_dir().join(format!("almasu-kv-{}.json", uuid::Uuid::new_v4()))
    }

    #[test]
    fn survives_reopening() {
        let path = temp_path();
        let mut store = FileStore::new(&path);
        store.set("exchange_data", "{\"a\":1}").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.get("exchange_data").unwrap().as_deref(), Some("{\"a\":1}"));
        assert_eq!(reopened.get("other").unwrap(), None);

        store.remove("exchange_data").unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let store = FileStore::new(temp_path());
        assert_eq!(store.get("exchange_data").unwrap(), None);
    }

    #[test]
    fn corrupt_file_is_an_error_on_read_but_not_on_write() {
        let path = temp_path();
        std::fs::write(&path, "not json").unwrap();
        let mut store = FileStore::new(&path);
        assert!(matches!(store.get("k"), Err(StoreError::Json(_))));

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
        std::fs::remove_file(&path).unwrap();
    }
}
