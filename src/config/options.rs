// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Directory holding the key-value cache and the debug log.
    pub store_dir: PathBuf,
    pub export: ExportOptions,
    pub limits: CardLimits,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            store_dir: PathBuf::from(STORE_DIR),
            export: ExportOptions::default(),
            limits: CardLimits::default(),
        }
    }
}

/// How many cards each entry point renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLimits {
    pub initial: usize,
    pub show_all: usize,
    pub upload: usize,
}

impl Default for CardLimits {
    fn default() -> Self {
        Self {
            initial: INITIAL_CARDS,
            show_all: SHOW_ALL_CARDS,
            upload: UPLOAD_CARDS,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    dir: PathBuf,
    file_name: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_name: s!(DEFAULT_EXPORT_FILE),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    /// Parse GUI/CLI text into dir + file name.
    /// A trailing separator (or bare directory) keeps the default file name.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        let p = PathBuf::from(crate::file::normalize_separators(s));
        if crate::file::looks_like_dir_hint(&p) || p.is_dir() {
            self.dir = p;
            return;
        }
        if let Some(parent) = p.parent() {
            self.dir = parent.to_path_buf();
        }
        if let Some(name) = p.file_name() {
            self.file_name = name.to_string_lossy().into_owned();
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }
}
