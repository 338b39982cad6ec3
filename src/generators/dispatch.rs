//! Template selection by jurisdiction and company type.

use thiserror::Error;

use super::california_corporation::CaliforniaCorporation;
use super::california_llc::CaliforniaLlc;
use super::delaware_corporation::DelawareCorporation;
use super::delaware_llc::DelawareLlc;
use super::traits::CertificateTemplate;
use crate::formation::model::{CompanyType, FormationRequest, Jurisdiction};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Only Delaware and California entities are supported at this time")]
    UnsupportedJurisdiction(String),
    #[error("Unsupported company type")]
    UnsupportedEntityType(CompanyType),
}

static TEMPLATES: [&dyn CertificateTemplate; 4] = [
    &DelawareCorporation,
    &DelawareLlc,
    &CaliforniaCorporation,
    &CaliforniaLlc,
];

/// All registered templates.
pub fn templates() -> &'static [&'static dyn CertificateTemplate] {
    &TEMPLATES
}

/// Look up the template for a (jurisdiction, company type) pair.
pub fn find_template(
    jurisdiction: Jurisdiction,
    company_type: CompanyType,
) -> Option<&'static dyn CertificateTemplate> {
    TEMPLATES
        .iter()
        .copied()
        .find(|t| t.jurisdiction() == jurisdiction && t.company_type() == company_type)
}

/// Select the template for a validated request.
pub fn dispatch(
    request: &FormationRequest,
) -> Result<&'static dyn CertificateTemplate, DispatchError> {
    let jurisdiction = request.jurisdiction().ok_or_else(|| {
        DispatchError::UnsupportedJurisdiction(request.state_of_formation().to_string())
    })?;

    find_template(jurisdiction, request.company_type())
        .ok_or(DispatchError::UnsupportedEntityType(request.company_type()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::model::RawFormationRequest;
    use crate::formation::validation::validate;
    use std::collections::HashSet;

    fn request(state: &str, kind: &str) -> FormationRequest {
        validate(&RawFormationRequest::new("Acme Corp, Inc.", state, kind, "John Smith")).unwrap()
    }

    #[test]
    fn test_dispatch_titles() {
        let cases = [
            ("DE", "corporation", "CERTIFICATE OF INCORPORATION"),
            ("DE", "LLC", "CERTIFICATE OF FORMATION"),
            ("CA", "corporation", "ARTICLES OF INCORPORATION"),
            ("CA", "LLC", "ARTICLES OF ORGANIZATION"),
        ];

        for (state, kind, title) in cases {
            let template = dispatch(&request(state, kind)).unwrap();
            assert_eq!(template.title(), title, "{} {}", state, kind);
        }
    }

    #[test]
    fn test_templates_are_distinct() {
        let titles: HashSet<&str> = templates().iter().map(|t| t.title()).collect();
        assert_eq!(titles.len(), 4);

        let keys: HashSet<(Jurisdiction, CompanyType)> = templates()
            .iter()
            .map(|t| (t.jurisdiction(), t.company_type()))
            .collect();
        assert_eq!(keys.len(), 4);
    }

    #[test]
    fn test_unsupported_jurisdiction() {
        let err = dispatch(&request("TX", "corporation")).err().unwrap();
        assert_eq!(err, DispatchError::UnsupportedJurisdiction("TX".to_string()));
        assert_eq!(
            err.to_string(),
            "Only Delaware and California entities are supported at this time"
        );

        assert!(dispatch(&request("ny", "LLC")).is_err());
    }
}
