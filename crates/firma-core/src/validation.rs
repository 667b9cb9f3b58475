//! Filename validation for uploaded PDFs.

/// Validate a caller-supplied PDF filename.
///
/// Rejects anything that is not a plain `.pdf` basename: path separators and
/// parent-directory segments would let a caller write outside the storage
/// directory. The storage layer re-checks keys it is handed, but upload
/// rejects bad names before any bytes touch disk.
pub fn validate_pdf_filename(filename: &str) -> Result<(), String> {
    if filename.is_empty() {
        return Err("Filename must not be empty".to_string());
    }
    if !filename.to_lowercase().ends_with(".pdf") {
        return Err("Filename must end in .pdf".to_string());
    }
    if filename.contains('/') || filename.contains('\\') {
        return Err("Filename must not contain path separators".to_string());
    }
    if filename.contains("..") {
        return Err("Filename must not contain parent-directory segments".to_string());
    }
    Ok(())
}
