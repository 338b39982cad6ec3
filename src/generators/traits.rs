//! Traits for generator system standardization.

use super::common::ExecutionDate;
use super::document::Certificate;
use super::engine::PdfRenderEngine;
use super::layout::layout_certificate;
use super::{GeneratorError, RenderedCertificate};
use crate::formation::model::{CompanyType, FormationRequest, Jurisdiction};

/// A formation document for one (jurisdiction, company type) pair.
pub trait CertificateTemplate: Sync {
    fn jurisdiction(&self) -> Jurisdiction;

    fn company_type(&self) -> CompanyType;

    fn title(&self) -> &'static str;

    /// Substitute the request into the template's clauses.
    fn fill(&self, request: &FormationRequest, date: &ExecutionDate) -> Certificate;

    /// Fill, lay out and render both the PDF and the text version.
    fn render(
        &self,
        request: &FormationRequest,
        date: &ExecutionDate,
    ) -> Result<RenderedCertificate, GeneratorError> {
        let certificate = self.fill(request, date);
        let page = layout_certificate(&certificate)?;
        let pdf = PdfRenderEngine::render(certificate.title, &page)?;

        Ok(RenderedCertificate {
            title: certificate.title,
            text: certificate.to_text(),
            pdf,
        })
    }
}
