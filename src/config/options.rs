// src/config/options.rs
use std::path::PathBuf;

use super::consts::*;

/// Per-run knobs. The CLI builds one of these and hands it to the runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub out: Option<PathBuf>, // output directory; None -> DEFAULT_OUT_DIR
    pub single_file: bool,    // skip the per-state partition
    pub force: bool,          // ignore the change gate
    pub use_cache: bool,      // route GETs through the response cache
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            out: None,
            single_file: false,
            force: false,
            use_cache: true,
        }
    }
}

impl RunOptions {
    pub fn out_dir(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUT_DIR))
    }

    /// Combined JSON array with every record.
    pub fn all_records_path(&self) -> PathBuf {
        self.out_dir().join(ALL_RECORDS_FILE)
    }

    /// Directory for the one-file-per-state partition.
    pub fn states_dir(&self) -> PathBuf {
        self.out_dir().join(STATES_SUBDIR)
    }

    /// Last-updated marker consumed by the change gate.
    pub fn marker_path(&self) -> PathBuf {
        self.out_dir().join(MARKER_FILE)
    }
}
