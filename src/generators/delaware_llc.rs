//! Delaware LLC Certificate of Formation.

use super::common::ExecutionDate;
use super::delaware_corporation::REGISTERED_OFFICE;
use super::document::{Certificate, Line, Section, Signatory};
use super::traits::CertificateTemplate;
use crate::formation::model::{CompanyType, FormationRequest, Jurisdiction};

pub const TITLE: &str = "CERTIFICATE OF FORMATION";

const REGISTERED_AGENT: [&str; 3] = [
    "Corporation Service Company",
    "251 Little Falls Drive",
    "Wilmington, DE 19808",
];

pub struct DelawareLlc;

impl CertificateTemplate for DelawareLlc {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Delaware
    }

    fn company_type(&self) -> CompanyType {
        CompanyType::Llc
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn fill(&self, request: &FormationRequest, date: &ExecutionDate) -> Certificate {
        let mut agent = vec![Line::Body(
            "THIRD: The name and address of its registered agent in the State of Delaware is:"
                .to_string(),
        )];
        agent.extend(REGISTERED_AGENT.iter().map(|l| Line::Value(l.to_string())));

        let sections = vec![
            Section::new(vec![
                Line::Body("FIRST: The name of the limited liability company is:".to_string()),
                Line::Value(request.company_name().to_string()),
            ]),
            Section::new(vec![
                Line::Body(
                    "SECOND: The address of its registered office in the State of Delaware is:"
                        .to_string(),
                ),
                Line::Value(REGISTERED_OFFICE.to_string()),
            ]),
            Section::new(agent),
            Section::new(vec![Line::Body(
                "FOURTH: The limited liability company shall be managed by its members.".to_string(),
            )]),
        ];

        Certificate::new(
            TITLE,
            sections,
            Signatory::AuthorizedPerson,
            "this Certificate of Formation",
            request.incorporator_name(),
            date,
        )
    }
}
