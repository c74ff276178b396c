//! Whole-document persistence for the keybind/macro data file.
//!
//! The document is a single JSON file, read once per invocation and rewritten
//! wholesale by the management commands. Concurrent invocations race freely;
//! the last writer wins.

use std::fs::{self, File};
use std::path::Path;

use log::debug;

use crate::definitions::Document;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads the whole macro document from disk.
///
/// A missing file is the empty document, not an error; a fresh install has
/// nothing to load.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read, or contains
/// invalid JSON.
pub fn load_document(path: &String) -> Result<Document> {
    if !Path::exists(Path::new(path)) {
        debug!("No data file at `{path}`, starting with an empty document");
        return Ok(Document::new());
    }

    let reader = get_reader("data", path)?;

    serde_json::from_reader(reader).map_err(|e| {
        Error::json_error(
            "reading".to_string(),
            "data".to_string(),
            path.to_string(),
            e,
        )
    })
}

/// Rewrites the whole macro document to disk, creating parent directories as
/// needed. Pretty-printed so the file stays hand-editable.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created, or
/// serialization fails.
pub fn save_document(path: &str, document: &Document) -> Result<()> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)
            .map_err(|e| Error::io_error("data".to_string(), path.to_string(), e))?;
    }

    let file = File::create(path)
        .map_err(|e| Error::io_error("data".to_string(), path.to_string(), e))?;

    serde_json::to_writer_pretty(file, document).map_err(|e| {
        Error::json_error(
            "writing".to_string(),
            "data".to_string(),
            path.to_string(),
            e,
        )
    })
}
