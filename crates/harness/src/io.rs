//! Result-set persistence.
//!
//! A persisted result set is a pretty-printed JSON array of records — the
//! contract between a suite run and a later comparison. Parse failures
//! name the offending artifact instead of surfacing a bare I/O error.

use std::fs;
use std::io;
use std::path::Path;

use benchlab_core::{Error, Result, ResultSet};

/// Write a result set to `path` as pretty-printed JSON.
pub fn write_result_set(path: impl AsRef<Path>, results: &ResultSet) -> Result<()> {
    let json = serde_json::to_string_pretty(results)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    fs::write(path, json)?;
    Ok(())
}

/// Read a result set previously written by [`write_result_set`].
pub fn read_result_set(path: impl AsRef<Path>) -> Result<ResultSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}
