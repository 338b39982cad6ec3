//! Company formation requests: payload model, validation, the generation
//! pipeline and its HTTP handlers.

pub mod handlers;
pub mod model;
pub mod service;
pub mod validation;


pub use handlers::config;
pub use model::{CompanyType, FormationRequest, Jurisdiction, RawFormationRequest};
pub use service::{FormationPackage, FormationService};
pub use validation::{validate, ValidationError, ValidationErrors};

use thiserror::Error;

use crate::bundle::BundleError;
use crate::generators::{DispatchError, GeneratorError};

const GENERATION_FAILED: &str = "Failed to generate formation documents";

/// Everything that can go wrong between receiving a payload and returning
/// an archive. All variants are reported to the client as 400.
#[derive(Debug, Error)]
pub enum FormationError {
    #[error("Invalid request body: {0}")]
    Payload(String),
    #[error("{0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0}")]
    Dispatch(#[from] DispatchError),
    #[error("rendering failed: {0}")]
    Render(#[from] GeneratorError),
    #[error("bundling failed: {0}")]
    Bundle(#[from] BundleError),
}

impl FormationError {
    /// Message safe to return to the client. Render and bundle details stay
    /// in the logs.
    pub fn public_message(&self) -> String {
        match self {
            FormationError::Render(_) | FormationError::Bundle(_) => GENERATION_FAILED.to_string(),
            other => other.to_string(),
        }
    }
}
