//! Catalog store - Write the JSON artifacts under data/

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::error::{CatalogError, Result};
use crate::core::model::Catalog;
use crate::core::paths::{data_dir, DUPLICATES_FILE, TESTS_FILE};

/// Locations of the written artifacts
#[derive(Debug, Clone)]
pub struct WrittenFiles {
    pub tests: PathBuf,
    pub duplicates: PathBuf,
}

/// Ensure the data directory exists
pub fn ensure_data_dir(root: &Path) -> Result<PathBuf> {
    let dir = data_dir(root);
    fs::create_dir_all(&dir).map_err(|source| CatalogError::CreateDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// Serialize with 2-space indentation; non-ASCII text is kept as-is
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = to_json(value)?;
    fs::write(path, json).map_err(|source| CatalogError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Write both artifacts, replacing any previous run's output
pub fn write_catalog(root: &Path, catalog: &Catalog) -> Result<WrittenFiles> {
    let dir = ensure_data_dir(root)?;

    let tests = dir.join(TESTS_FILE);
    let duplicates = dir.join(DUPLICATES_FILE);

    write_json(&tests, &catalog.entries)?;
    write_json(&duplicates, &catalog.duplicates)?;

    Ok(WrittenFiles { tests, duplicates })
}
