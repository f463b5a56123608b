//! PDF text extraction — the `bytes -> text` collaborator for uploads.
//!
//! `pdf_extract` can panic on malformed input rather than returning an
//! error, so the call is wrapped in a `catch_unwind` boundary and every
//! failure mode comes back as an `AppError`.

use std::panic::{self, AssertUnwindSafe};

use crate::errors::AppError;

/// PDF files start with this signature. Checked before extraction so a
/// mislabelled upload fails fast with a clear message, not a parser error.
const PDF_MAGIC: &[u8] = b"%PDF";

pub fn is_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(PDF_MAGIC)
}

/// Extracts plain text from an in-memory PDF document.
pub fn text_from_pdf(bytes: &[u8]) -> Result<String, AppError> {
    if !is_pdf(bytes) {
        return Err(AppError::Validation(
            "Uploaded file is not a PDF document".to_string(),
        ));
    }

    let data = bytes.to_vec(); // owned copy for the unwind boundary
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(&data)
    }));

    match result {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(AppError::Extraction(e.to_string())),
        Err(_) => Err(AppError::Extraction(
            "PDF extraction panicked (malformed document)".to_string(),
        )),
    }
}
