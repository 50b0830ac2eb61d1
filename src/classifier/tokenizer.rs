use crate::corpus::read_document;
use crate::error::Result;
use std::collections::HashSet;
use std::path::Path;

/// Byte length of the `Subject: ` header prefix that leads every corpus
/// document.
const HEADER_PREFIX_LEN: usize = 9;

/// Split one document's text into its set of distinct tokens.
///
/// The header prefix is dropped, carriage returns are removed, and every
/// newline is folded to a space so the remaining subject text and the body
/// form a single space-delimited stream. Splitting on the single space
/// character means consecutive or trailing separators yield an empty-string
/// token; that token is retained as a real feature of the model.
pub fn token_set(text: &str) -> HashSet<String> {
    let body = text.get(HEADER_PREFIX_LEN..).unwrap_or("");
    let body = body.replace('\r', "").replace('\n', " ");
    body.split(' ').map(|t| t.to_string()).collect()
}

/// Read a document from disk and tokenize it.
pub fn tokenize_document(path: &Path) -> Result<HashSet<String>> {
    let text = read_document(path)?;
    Ok(token_set(&text))
}
