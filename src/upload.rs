// src/upload.rs
//
// Uploaded file → normalized records. `.json` is a JSON array of flat objects;
// anything else goes through the delimited-text parser.

use std::{fs, path::Path};

use serde_json::Value;

use crate::csv::parse_records;
use crate::error::{Error, Result};
use crate::record::{normalize, raw_from_json, CollegeRecord};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UploadFormat {
    Json,
    Delimited,
}

impl UploadFormat {
    /// Dispatch on extension only, case-insensitively.
    pub fn from_file_name(name: &str) -> Self {
        if name.to_lowercase().ends_with(".json") { Self::Json } else { Self::Delimited }
    }
}

/// A file read off disk, ready for `parse_upload`.
#[derive(Clone, Debug)]
pub struct UploadedFile {
    pub name: String,
    pub text: String,
}

pub fn read_upload(path: &Path) -> Result<UploadedFile> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text).to_string();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(UploadedFile { name, text })
}

/// Parse + normalize. Fails with `InvalidJson` or `NoRecords`; never partially.
pub fn parse_upload(file_name: &str, text: &str) -> Result<Vec<CollegeRecord>> {
    let records: Vec<CollegeRecord> = match UploadFormat::from_file_name(file_name) {
        UploadFormat::Json => {
            let value: Value = serde_json::from_str(text).map_err(|e| {
                logd!("Upload: {} is not JSON ({})", file_name, e);
                Error::InvalidJson
            })?;
            let Value::Array(items) = value else {
                logd!("Upload: {} is JSON but not an array", file_name);
                return Err(Error::InvalidJson);
            };
            items.iter().map(|v| normalize(&raw_from_json(v))).collect()
        }
        UploadFormat::Delimited => parse_records(text).iter().map(normalize).collect(),
    };

    if records.is_empty() {
        return Err(Error::NoRecords);
    }
    logf!("Upload: {} → {} record(s)", file_name, records.len());
    Ok(records)
}
