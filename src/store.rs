//! Durable key-value storage scoped to the site origin.
//!
//! Entries live under `<cache_dir>/<sha256(origin)>/storage.toml` so each
//! origin gets its own slot without filesystem-unsafe names. The file is a
//! flat TOML table; only string values are read back, but other entries are
//! carried through every rewrite.

use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use toml::{Table, Value};
use tracing::warn;

/// Key holding the selected page language.
pub const LANGUAGE_KEY: &str = "ista-language";

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// File-backed store; every `set` rewrites the whole table.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn for_origin(cache_dir: &Path, origin: &str) -> Self {
        FileStore {
            path: origin_dir(cache_dir, origin).join("storage.toml"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whole table, non-string values included; a missing file is empty.
    fn read_entries(&self) -> Result<Table> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Table::new()),
            Err(err) => {
                return Err(err).with_context(|| format!("reading {}", self.path.display()));
            }
        };
        toml::from_str::<Table>(&data)
            .with_context(|| format!("parsing storage file {}", self.path.display()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let entries = self
            .read_entries()
            .inspect_err(|err| warn!("Ignoring unreadable storage file: {err:#}"))
            .ok()?;
        entries.get(key)?.as_str().map(str::to_string)
    }

    /// Refuses to write over a file it cannot decode.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), Value::String(value.to_string()));
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let contents = toml::to_string(&entries).context("serializing storage entries")?;
        fs::write(&self.path, contents)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

/// In-process store that forgets everything on drop.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut store = MemoryStore::default();
        store.entries.insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn origin_dir(cache_dir: &Path, origin: &str) -> PathBuf {
    let mut hasher = Sha256::new();
    hasher.update(origin.as_bytes());
    let hash = format!("{:x}", hasher.finalize());
    cache_dir.join(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_store_survives_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::for_origin(dir.path(), "https://ista.local");
        store.set(LANGUAGE_KEY, "fa").expect("write entry");

        let reopened = FileStore::for_origin(dir.path(), "https://ista.local");
        assert_eq!(reopened.get(LANGUAGE_KEY).as_deref(), Some("fa"));
    }

    #[test]
    fn origins_do_not_share_entries() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::for_origin(dir.path(), "https://a.example");
        store.set(LANGUAGE_KEY, "fa").expect("write entry");

        let other = FileStore::for_origin(dir.path(), "https://b.example");
        assert_eq!(other.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn set_keeps_unrelated_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::for_origin(dir.path(), "https://ista.local");
        store.set("theme", "dark").expect("write theme");
        store.set(LANGUAGE_KEY, "en").expect("write language");

        assert_eq!(store.get("theme").as_deref(), Some("dark"));
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("en"));
    }

    #[test]
    fn corrupted_file_reads_as_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = FileStore::for_origin(dir.path(), "https://ista.local");
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), "not = [valid").expect("write garbage");

        assert_eq!(store.get(LANGUAGE_KEY), None);
    }

    #[test]
    fn set_refuses_to_overwrite_a_corrupted_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::for_origin(dir.path(), "https://ista.local");
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), "not = [valid").expect("write garbage");

        assert!(store.set(LANGUAGE_KEY, "fa").is_err());
        let contents = fs::read_to_string(store.path()).expect("read back");
        assert_eq!(contents, "not = [valid");
    }

    #[test]
    fn set_keeps_non_string_values() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = FileStore::for_origin(dir.path(), "https://ista.local");
        fs::create_dir_all(store.path().parent().expect("parent")).expect("mkdir");
        fs::write(store.path(), "theme = \"dark\"\ncount = 3\n").expect("seed file");

        store.set(LANGUAGE_KEY, "fa").expect("write language");

        let raw = fs::read_to_string(store.path()).expect("read back");
        let table: Table = toml::from_str(&raw).expect("valid toml");
        assert_eq!(table["theme"].as_str(), Some("dark"));
        assert_eq!(table["count"].as_integer(), Some(3));
        assert_eq!(store.get(LANGUAGE_KEY).as_deref(), Some("fa"));
        assert_eq!(store.get("count"), None);
    }
}
