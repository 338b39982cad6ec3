//! The formation pipeline: validate, dispatch, render, bundle.

use std::sync::Arc;

use super::model::{FormationRequest, RawFormationRequest};
use super::validation::validate;
use super::FormationError;
use crate::bundle::{archive_filename, bundle};
use crate::generators::{dispatch, Clock, ExecutionDate, RenderedCertificate, SystemClock};

/// A finished archive ready to be sent to the client.
#[derive(Debug, Clone)]
pub struct FormationPackage {
    pub filename: String,
    pub title: &'static str,
    pub archive: Vec<u8>,
}

/// Stateless apart from the clock that dates execution clauses.
#[derive(Clone)]
pub struct FormationService {
    clock: Arc<dyn Clock>,
}

impl FormationService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    pub fn with_system_clock() -> Self {
        Self::new(Arc::new(SystemClock))
    }

    /// Render the certificate for an already validated request.
    ///
    /// The date is read once so the PDF and text carry the same day.
    pub fn generate(
        &self,
        request: &FormationRequest,
    ) -> Result<RenderedCertificate, FormationError> {
        let template = dispatch(request)?;
        let date = ExecutionDate::from_clock(self.clock.as_ref());
        Ok(template.render(request, &date)?)
    }

    /// Full pipeline from a raw payload to a zip archive.
    pub fn form_company(
        &self,
        raw: &RawFormationRequest,
    ) -> Result<FormationPackage, FormationError> {
        let request = validate(raw)?;
        let rendered = self.generate(&request)?;
        let archive = bundle(
            request.company_name(),
            &rendered.pdf,
            Some(rendered.text.as_str()),
        )?;

        Ok(FormationPackage {
            filename: archive_filename(request.company_name()),
            title: rendered.title,
            archive,
        })
    }
}
