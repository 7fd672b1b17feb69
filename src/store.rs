// src/store.rs
//
// Durable key-value cache (one JSON document per key) and the dataset store
// built on top of it. Unreadable or unparsable entries read as absent.

use std::{
    collections::HashMap,
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tempfile::NamedTempFile;

use crate::catalog;
use crate::config::consts::{COLLEGES_KEY, USER_KEY};
use crate::record::{CollegeRecord, UserProfile};

/// Minimal string key-value storage.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&mut self, key: &str) -> io::Result<()>;
}

/// `<dir>/<key>.json` per key. Writes go through a temp file + rename.
#[derive(Clone, Debug)]
pub struct FileKv {
    dir: PathBuf,
}

impl FileKv {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    fn path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValue for FileKv {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path(key)).ok()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.flush()?;
        tmp.persist(self.path(key)).map_err(|e| e.error)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.path(key)) {
            Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
            _ => Ok(()),
        }
    }
}

/// In-process storage; nothing survives the value.
#[derive(Clone, Debug, Default)]
pub struct MemoryKv {
    map: HashMap<String, String>,
}

impl MemoryKv {
    pub fn new() -> Self { Self::default() }
}

impl KeyValue for MemoryKv {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.map.insert(s!(key), s!(value));
        Ok(())
    }

    fn remove(&mut self, key: &str) -> io::Result<()> {
        self.map.remove(key);
        Ok(())
    }
}

/// Where the working dataset came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Source {
    Sample,
    Stored,
}

/// Owns the cache plus the current working list of colleges.
pub struct DatasetStore<K: KeyValue> {
    kv: K,
    colleges: Vec<CollegeRecord>,
    source: Source,
}

impl<K: KeyValue> DatasetStore<K> {
    /// A stored, non-empty dataset wins over the bundled sample.
    pub fn open(kv: K) -> Self {
        let mut store = Self { kv, colleges: Vec::new(), source: Source::Sample };
        store.reload();
        store
    }

    /// Re-read the working set from the cache (or fall back to the sample).
    pub fn reload(&mut self) {
        match self.load_colleges() {
            Some(list) if !list.is_empty() => {
                logf!("Store: loaded {} stored record(s)", list.len());
                self.colleges = list;
                self.source = Source::Stored;
            }
            _ => {
                self.colleges = catalog::sample();
                self.source = Source::Sample;
                logd!("Store: using bundled sample ({} records)", self.colleges.len());
            }
        }
    }

    pub fn colleges(&self) -> &[CollegeRecord] { &self.colleges }
    pub fn source(&self) -> Source { self.source }
    pub fn kv(&self) -> &K { &self.kv }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = self.kv.get(key)?;
        match serde_json::from_str(&text) {
            Ok(v) => Some(v),
            Err(e) => {
                logd!("Store: {} unreadable, treating as absent ({})", key, e);
                None
            }
        }
    }

    fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> crate::Result<()> {
        let text = serde_json::to_string(value)?;
        self.kv.set(key, &text)?;
        Ok(())
    }

    pub fn load_user(&self) -> Option<UserProfile> {
        self.load(USER_KEY)
    }

    pub fn save_user(&mut self, user: &UserProfile) -> crate::Result<()> {
        self.save(USER_KEY, user)
    }

    pub fn load_colleges(&self) -> Option<Vec<CollegeRecord>> {
        self.load(COLLEGES_KEY)
    }

    pub fn save_colleges(&mut self, list: &[CollegeRecord]) -> crate::Result<()> {
        self.save(COLLEGES_KEY, list)
    }

    /// Persist `list` and make it the working set. Never merges.
    pub fn replace_dataset(&mut self, list: Vec<CollegeRecord>) -> crate::Result<()> {
        self.save_colleges(&list)?;
        self.colleges = list;
        self.source = Source::Stored;
        Ok(())
    }

    /// Drop both keys. The working set is left alone until `reload`.
    pub fn clear(&mut self) -> crate::Result<()> {
        self.kv.remove(USER_KEY)?;
        self.kv.remove(COLLEGES_KEY)?;
        Ok(())
    }
}
