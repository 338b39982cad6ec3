//! Zip packaging of generated formation documents.

use std::io::{Cursor, Write};
use thiserror::Error;
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::generators::common::sanitize_filename;

const FALLBACK_STEM: &str = "company";

#[derive(Debug, Error)]
pub enum BundleError {
    #[error("failed to build zip archive: {0}")]
    Zip(#[from] zip::result::ZipError),
    #[error("failed to write archive entry: {0}")]
    Io(#[from] std::io::Error),
}

pub fn pdf_entry_name(company_name: &str) -> String {
    format!("{}_certificate.pdf", sanitize_filename(company_name, FALLBACK_STEM))
}

pub fn text_entry_name(company_name: &str) -> String {
    format!("{}_certificate.txt", sanitize_filename(company_name, FALLBACK_STEM))
}

/// Download name for the whole archive.
pub fn archive_filename(company_name: &str) -> String {
    format!(
        "{}_formation_documents.zip",
        sanitize_filename(company_name, FALLBACK_STEM)
    )
}

/// Package the PDF and, when present, the text rendering into a zip archive.
pub fn bundle(company_name: &str, pdf: &[u8], text: Option<&str>) -> Result<Vec<u8>, BundleError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    zip.start_file(pdf_entry_name(company_name), options)?;
    zip.write_all(pdf)?;

    if let Some(text) = text {
        zip.start_file(text_entry_name(company_name), options)?;
        zip.write_all(text.as_bytes())?;
    }

    let archive = zip.finish()?.into_inner();
    log::debug!(
        "Bundled documents for '{}' into {} bytes",
        company_name,
        archive.len()
    );
    Ok(archive)
}
