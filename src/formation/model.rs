use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

/// The 50 states, DC and the five inhabited territories.
pub const US_STATES_AND_TERRITORIES: [&str; 56] = [
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA", "KS",
    "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ", "NM", "NY",
    "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT", "VA", "WA", "WV",
    "WI", "WY", "DC", "PR", "GU", "VI", "AS", "MP",
];

/// Payload as received from JSON or form submissions.
///
/// Every field is optional on the wire so a missing field is reported by the
/// validator with its name instead of failing deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RawFormationRequest {
    #[schema(example = "Acme Corp, Inc.")]
    pub company_name: Option<String>,
    #[schema(example = "DE")]
    pub state_of_formation: Option<String>,
    #[schema(example = "corporation")]
    pub company_type: Option<String>,
    #[schema(example = "John Smith")]
    pub incorporator_name: Option<String>,
}

impl RawFormationRequest {
    pub fn new(
        company_name: &str,
        state_of_formation: &str,
        company_type: &str,
        incorporator_name: &str,
    ) -> Self {
        Self {
            company_name: Some(company_name.to_string()),
            state_of_formation: Some(state_of_formation.to_string()),
            company_type: Some(company_type.to_string()),
            incorporator_name: Some(incorporator_name.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CompanyType {
    #[serde(rename = "corporation")]
    Corporation,
    #[serde(rename = "LLC")]
    Llc,
}

impl CompanyType {
    /// Exact-case parse; `"llc"` or `"Corporation"` are not accepted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "corporation" => Some(Self::Corporation),
            "LLC" => Some(Self::Llc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Corporation => "corporation",
            Self::Llc => "LLC",
        }
    }
}

impl fmt::Display for CompanyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Jurisdictions with formation templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Jurisdiction {
    Delaware,
    California,
}

impl Jurisdiction {
    pub fn from_state_code(code: &str) -> Option<Self> {
        match code {
            "DE" => Some(Self::Delaware),
            "CA" => Some(Self::California),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::Delaware => "DE",
            Self::California => "CA",
        }
    }
}

/// A validated formation request. Only built by `validation::validate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormationRequest {
    pub(crate) company_name: String,
    pub(crate) state_of_formation: String,
    pub(crate) company_type: CompanyType,
    pub(crate) incorporator_name: String,
}

impl FormationRequest {
    pub fn company_name(&self) -> &str {
        &self.company_name
    }

    /// Canonical upper-case two-letter code.
    pub fn state_of_formation(&self) -> &str {
        &self.state_of_formation
    }

    pub fn company_type(&self) -> CompanyType {
        self.company_type
    }

    pub fn incorporator_name(&self) -> &str {
        &self.incorporator_name
    }

    pub fn jurisdiction(&self) -> Option<Jurisdiction> {
        Jurisdiction::from_state_code(&self.state_of_formation)
    }

    /// Back to the wire shape, e.g. to re-validate normalized output.
    pub fn to_raw(&self) -> RawFormationRequest {
        RawFormationRequest::new(
            &self.company_name,
            &self.state_of_formation,
            self.company_type.as_str(),
            &self.incorporator_name,
        )
    }
}
