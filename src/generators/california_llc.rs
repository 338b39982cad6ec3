//! California LLC Articles of Organization.

use super::california_corporation::AGENT_FOR_SERVICE;
use super::common::ExecutionDate;
use super::document::{Certificate, Line, Section, Signatory};
use super::traits::CertificateTemplate;
use crate::formation::model::{CompanyType, FormationRequest, Jurisdiction};

pub const TITLE: &str = "ARTICLES OF ORGANIZATION";

pub struct CaliforniaLlc;

impl CertificateTemplate for CaliforniaLlc {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::California
    }

    fn company_type(&self) -> CompanyType {
        CompanyType::Llc
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn fill(&self, request: &FormationRequest, date: &ExecutionDate) -> Certificate {
        let mut agent = vec![Line::Body(
            "ARTICLE III: The name and address in California of the LLC's initial agent for service of process is:"
                .to_string(),
        )];
        agent.extend(AGENT_FOR_SERVICE.iter().map(|l| Line::Value(l.to_string())));

        let sections = vec![
            Section::new(vec![
                Line::Body("ARTICLE I: The name of the limited liability company is:".to_string()),
                Line::Value(request.company_name().to_string()),
            ]),
            Section::new(vec![Line::Body(
                "ARTICLE II: The purpose of the limited liability company is to engage in any lawful business."
                    .to_string(),
            )]),
            Section::new(agent),
        ];

        Certificate::new(
            TITLE,
            sections,
            Signatory::AuthorizedPerson,
            "these Articles of Organization",
            request.incorporator_name(),
            date,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formation::model::RawFormationRequest;
    use crate::formation::validation::validate;
    use chrono::NaiveDate;

    #[test]
    fn test_fill() {
        let request = validate(&RawFormationRequest::new(
            "California Dreaming, LLC",
            "CA",
            "LLC",
            "Emily Chen",
        ))
        .unwrap();
        let date = ExecutionDate::from_date(NaiveDate::from_ymd_opt(2024, 7, 4).unwrap());

        let text = CaliforniaLlc.fill(&request, &date).to_text();
        assert!(text.starts_with("ARTICLES OF ORGANIZATION\n\n"));
        assert!(text.contains("California Dreaming, LLC"));
        assert!(text.contains("engage in any lawful business."));
        assert!(text.contains("the LLC's initial agent for service of process is:\nCalifornia Registered Agent, Inc."));
        assert!(text.contains("IN WITNESS WHEREOF, the undersigned has executed these Articles of Organization this 04 day of\nJuly, 2024."));
        assert!(text.ends_with("Authorized Person:\nEmily Chen"));
    }
}
