// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::csv::quoted_row;
use crate::record::UserProfile;

/// `users.csv` body: header line, then one fully-quoted row.
/// No profile → empty text.
pub fn profile_csv(user: Option<&UserProfile>) -> String {
    let Some(u) = user else { return s!() };
    format!("{}\n{}\n", UserProfile::FIELDS.join(","), quoted_row(&u.values()))
}

/// Write the profile export to `path`, creating parent directories.
/// Returns the final path written to.
pub fn write_profile_csv(path: &Path, user: Option<&UserProfile>) -> crate::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, profile_csv(user))?;
    Ok(path.to_path_buf())
}

/// `-o` handling: empty → default name; a directory (or dir-looking text) →
/// default name inside it; otherwise the path as given.
pub fn resolve_single_out_path(user_o: &str, default_filename: &str) -> crate::Result<PathBuf> {
    if user_o.is_empty() { return Ok(PathBuf::from(default_filename)); }
    let p = PathBuf::from(normalize_separators(user_o));
    if looks_like_dir_hint(&p) || p.is_dir() {
        ensure_directory(&p)?;
        Ok(p.join(default_filename))
    } else {
        Ok(p)
    }
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c == '/' || c == '\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> crate::Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        ).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

pub fn looks_like_dir_hint(p: &Path) -> bool {
    let s = p.to_string_lossy();
    s.ends_with('/') || s.ends_with('\\')
}
