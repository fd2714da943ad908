use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

/// Full text of the transcript, pages concatenated in order. The PDF
/// itself is a black box; everything downstream works on this one string.
pub fn document_text(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path)
        .with_context(|| format!("PDF could not be read: {}", path.display()))
}

pub fn document_text_from_bytes(bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes).context("PDF could not be read")
}

/// Locates the transcript when no path was given: exactly one PDF in the
/// working directory, anything else is reported back to the user.
pub fn find_transcript_pdf(dir: &Path) -> Result<PathBuf> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list directory {}", dir.display()))?;
    let mut pdfs = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("pdf"))
            .unwrap_or(false);
        if path.is_file() && is_pdf {
            pdfs.push(path);
        }
    }
    match pdfs.len() {
        0 => bail!("No PDF file found in the current directory."),
        1 => Ok(pdfs.remove(0)),
        _ => bail!("Multiple PDF files found in the current directory. Please keep only one PDF file."),
    }
}
