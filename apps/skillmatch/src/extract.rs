//! Text Extractor: turns a PDF byte stream into one whitespace-joined string.
//!
//! Pages without extractable text (scanned images, blank pages) are skipped.
//! A document with no text at all yields `""`, which downstream treats as
//! "zero skills found" rather than a failure.

use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::errors::AppError;

/// Extracts the text of every page of an in-memory PDF, joined by a single space.
pub fn extract_text(bytes: &[u8]) -> Result<String, AppError> {
    let pages = catch_backend_panic(|| pdf_extract::extract_text_from_mem_by_pages(bytes))?
        .map_err(|e| AppError::Extraction(format!("Failed to parse PDF: {e}")))?;

    let page_count = pages.len();
    let text = join_pages(pages);

    info!(
        pages = page_count,
        chars = text.len(),
        "Extracted resume text"
    );
    Ok(text)
}

/// Reads a PDF from disk and extracts its text. The file handle is closed
/// before parsing starts.
pub fn extract_text_from_path(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path).map_err(|e| {
        AppError::Extraction(format!("Failed to read PDF '{}': {e}", path.display()))
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Loaded PDF");
    extract_text(&bytes)
}

/// Runs a PDF backend call, turning a panic into `AppError::Extraction`.
/// pdf-extract panics on some malformed inputs instead of returning Err.
fn catch_backend_panic<T, F>(parse: F) -> Result<T, AppError>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(parse)).map_err(|_| {
        warn!("PDF parser panicked");
        AppError::Extraction("PDF parser aborted on malformed input".to_string())
    })
}

fn join_pages(pages: Vec<String>) -> String {
    let mut kept = Vec::with_capacity(pages.len());
    for (idx, page) in pages.iter().enumerate() {
        let trimmed = page.trim();
        if trimmed.is_empty() {
            debug!(page = idx + 1, "Skipping page with no extractable text");
            continue;
        }
        kept.push(trimmed);
    }
    kept.join(" ")
}
