//! `.env` loading.
//!
//! The file is parsed into a plain map; the process environment is never
//! touched, so nothing leaks between runs.

use crate::error::{Result, ScaffoldError};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Read a dotenv-style key/value file.
///
/// A missing file yields an empty map; required keys are not checked here.
/// A missing `session` simply produces an unauthenticated fetch later on.
pub fn load_env(path: &Path) -> Result<BTreeMap<String, String>> {
    if !path.exists() {
        warn!(path = %path.display(), "env file not found, continuing without year/session");
        return Ok(BTreeMap::new());
    }

    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        ScaffoldError::Config(format!(
            "failed to read env file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let mut values = BTreeMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| {
            ScaffoldError::Config(format!(
                "failed to parse env file '{}': {}",
                path.display(),
                e
            ))
        })?;
        values.insert(key, value);
    }

    debug!(
        path = %path.display(),
        keys = ?values.keys().collect::<Vec<_>>(),
        "loaded env file"
    );
    Ok(values)
}
