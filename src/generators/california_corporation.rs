//! California Articles of Incorporation.

use super::common::ExecutionDate;
use super::document::{Certificate, Line, Section, Signatory};
use super::traits::CertificateTemplate;
use crate::formation::model::{CompanyType, FormationRequest, Jurisdiction};

pub const TITLE: &str = "ARTICLES OF INCORPORATION";

/// Initial agent for service of process for California entities.
pub const AGENT_FOR_SERVICE: [&str; 3] = [
    "California Registered Agent, Inc.",
    "123 Main Street",
    "Los Angeles, CA 90001",
];

pub struct CaliforniaCorporation;

impl CertificateTemplate for CaliforniaCorporation {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::California
    }

    fn company_type(&self) -> CompanyType {
        CompanyType::Corporation
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn fill(&self, request: &FormationRequest, date: &ExecutionDate) -> Certificate {
        let mut agent = vec![Line::Body(
            "ARTICLE III: The name and address in California of the corporation's initial agent for service of process is:"
                .to_string(),
        )];
        agent.extend(AGENT_FOR_SERVICE.iter().map(|l| Line::Value(l.to_string())));

        let sections = vec![
            Section::new(vec![
                Line::Body("ARTICLE I: The name of this corporation is:".to_string()),
                Line::Value(request.company_name().to_string()),
            ]),
            Section::new(vec![
                Line::Body(
                    "ARTICLE II: The purpose of the corporation is to engage in any lawful act or activity"
                        .to_string(),
                ),
                Line::Body(
                    "for which a corporation may be organized under the General Corporation Law of California."
                        .to_string(),
                ),
            ]),
            Section::new(agent),
        ];

        Certificate::new(
            TITLE,
            sections,
            Signatory::Incorporator,
            "these Articles of Incorporation",
            request.incorporator_name(),
            date,
        )
    }
}
