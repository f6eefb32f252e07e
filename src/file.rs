// src/file.rs

use std::{
    collections::BTreeMap,
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::config::consts::UNKNOWN_STATE;
use crate::core::sanitize::sanitize_bucket_filename;
use crate::records::LocaleRecord;

/// Write the combined JSON array. Returns the path written to.
pub fn write_records_single(
    path: &Path,
    records: &[LocaleRecord],
) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, serde_json::to_string_pretty(records)?)?;
    Ok(path.to_path_buf())
}

/// One JSON file per `physical_state` under `dir`. Records with an empty or
/// missing state land in the UNKNOWN bucket. Returns the written paths in
/// bucket order.
pub fn write_records_per_state(
    dir: &Path,
    records: &[LocaleRecord],
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    ensure_directory(dir)?;

    let mut by_state: BTreeMap<String, Vec<&LocaleRecord>> = BTreeMap::new();
    for r in records {
        let state = r
            .physical_state
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(UNKNOWN_STATE);
        by_state.entry(s!(state)).or_default().push(r);
    }

    let mut written = Vec::with_capacity(by_state.len());
    for (state, entries) in by_state {
        let stem = sanitize_bucket_filename(&state, UNKNOWN_STATE);
        let path = dir.join(join!(stem, ".json"));
        fs::write(&path, serde_json::to_string_pretty(&entries)?)?;
        written.push(path);
    }
    Ok(written)
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
