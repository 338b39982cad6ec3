//! Delaware Certificate of Incorporation.

use super::common::ExecutionDate;
use super::document::{Certificate, Line, Section, Signatory};
use super::traits::CertificateTemplate;
use crate::formation::model::{CompanyType, FormationRequest, Jurisdiction};

pub const TITLE: &str = "CERTIFICATE OF INCORPORATION";

/// Registered office used for all Delaware entities.
pub const REGISTERED_OFFICE: &str =
    "251 Little Falls Drive, Wilmington, New Castle County, Delaware 19808";

pub struct DelawareCorporation;

impl CertificateTemplate for DelawareCorporation {
    fn jurisdiction(&self) -> Jurisdiction {
        Jurisdiction::Delaware
    }

    fn company_type(&self) -> CompanyType {
        CompanyType::Corporation
    }

    fn title(&self) -> &'static str {
        TITLE
    }

    fn fill(&self, request: &FormationRequest, date: &ExecutionDate) -> Certificate {
        let sections = vec![
            Section::new(vec![
                Line::Body("FIRST: The name of this corporation is:".to_string()),
                Line::Value(request.company_name().to_string()),
            ]),
            Section::new(vec![
                Line::Body(
                    "SECOND: Its registered office in the State of Delaware is located at:"
                        .to_string(),
                ),
                Line::Value(REGISTERED_OFFICE.to_string()),
            ]),
            Section::new(vec![
                Line::Body(
                    "THIRD: The purpose of the corporation is to engage in any lawful act or activity for"
                        .to_string(),
                ),
                Line::Body(
                    "which corporations may be organized under the General Corporation Law of Delaware."
                        .to_string(),
                ),
            ]),
            Section::new(vec![
                Line::Body(
                    "FOURTH: The total number of shares of stock which this corporation is authorized"
                        .to_string(),
                ),
                Line::Body(
                    "to issue is 1,000 shares of Common Stock with $0.01 par value per share."
                        .to_string(),
                ),
            ]),
        ];

        Certificate::new(
            TITLE,
            sections,
            Signatory::Incorporator,
            "this Certificate of Incorporation",
            request.incorporator_name(),
            date,
        )
    }
}
