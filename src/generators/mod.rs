//! Generators module - business logic for creating formation documents.
//!
//! Each supported filing has its own template:
//! - `DelawareCorporation` - Certificate of Incorporation
//! - `DelawareLlc` - Certificate of Formation
//! - `CaliforniaCorporation` - Articles of Incorporation
//! - `CaliforniaLlc` - Articles of Organization
//!
//! Templates only supply clause text. Layout, PDF output and the plain-text
//! rendering are shared.

pub mod california_corporation;
pub mod california_llc;
pub mod common;
pub mod delaware_corporation;
pub mod delaware_llc;
pub mod dispatch;
pub mod document;
pub mod engine;
pub mod layout;
pub mod traits;

pub use common::{Clock, ExecutionDate, FixedClock, SystemClock};
pub use dispatch::{dispatch, DispatchError};
pub use engine::PdfRenderEngine;
pub use traits::CertificateTemplate;

use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to write PDF: {0}")]
    Pdf(String),
    #[error("document does not fit on one page (line at {lowest}pt, floor {floor}pt)")]
    LayoutOverflow { lowest: f32, floor: f32 },
}

/// Result of a successful document generation.
#[derive(Debug, Clone)]
pub struct RenderedCertificate {
    pub title: &'static str,
    pub pdf: Vec<u8>,
    pub text: String,
}
