// src/record.rs
//
// Canonical shapes for colleges and the visiting user, and the normalizer
// that maps loosely-keyed upload rows onto them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::csv::RawRecord;

/// One institution. Every field is a plain string and defaults to "".
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollegeRecord {
    pub name: String,
    pub city: String,
    pub state: String,
    /// Comma-separated course names, kept as one scalar.
    pub courses: String,
    pub fees: String,
    pub cutoff: String,
    pub website: String,
    pub contact: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    pub state: String,
    pub mobile: String,
    pub course: String,
}

impl UserProfile {
    /// Field names in export order.
    pub const FIELDS: [&'static str; 4] = ["name", "state", "mobile", "course"];

    pub fn values(&self) -> [&str; 4] {
        [&self.name, &self.state, &self.mobile, &self.course]
    }
}

/// Map any header-keyed row to a `CollegeRecord`.
/// Keys are matched trimmed and case-insensitively; `college` stands in for
/// `name`, `course` for `courses`. Anything missing becomes "".
pub fn normalize(raw: &RawRecord) -> CollegeRecord {
    let mut low = RawRecord::new();
    for (k, v) in raw {
        low.insert(k.trim().to_lowercase(), v.clone());
    }
    let pick = |keys: &[&str]| -> String {
        keys.iter()
            .filter_map(|k| low.get(*k))
            .find(|v| !v.is_empty())
            .cloned()
            .unwrap_or_default()
    };

    CollegeRecord {
        name: pick(&["name", "college"]),
        city: pick(&["city"]),
        state: pick(&["state"]),
        courses: pick(&["courses", "course"]),
        fees: pick(&["fees"]),
        cutoff: pick(&["cutoff"]),
        website: pick(&["website"]),
        contact: pick(&["contact"]),
    }
}

/// Flatten one JSON array element into a `RawRecord`.
/// Strings pass through, numbers/bools use their JSON text, everything else is "".
/// A non-object element yields an empty row.
pub fn raw_from_json(v: &Value) -> RawRecord {
    let mut rec = RawRecord::new();
    if let Value::Object(map) = v {
        for (k, val) in map {
            let text = match val {
                Value::String(s) => s.clone(),
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => s!(),
            };
            rec.insert(k.clone(), text);
        }
    }
    rec
}
