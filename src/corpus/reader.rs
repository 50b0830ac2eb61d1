use crate::error::Result;
use std::fs;
use std::path::Path;

/// Read one document's raw text content.
///
/// Missing files, permission problems, and non-UTF-8 content all surface
/// as the IO error kind; callers abort the enclosing batch operation
/// rather than skipping the document.
pub fn read_document(path: &Path) -> Result<String> {
    Ok(fs::read_to_string(path)?)
}
