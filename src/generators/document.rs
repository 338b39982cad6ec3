//! Certificate content model shared by the PDF and text renderings.

use super::common::ExecutionDate;

/// One line of a clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Clause text at the left margin.
    Body(String),
    /// Substituted value or address line, indented under its clause.
    Value(String),
}

impl Line {
    pub fn text(&self) -> &str {
        match self {
            Line::Body(text) | Line::Value(text) => text,
        }
    }
}

/// A numbered article of the certificate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub lines: Vec<Line>,
}

impl Section {
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }
}

/// Who signs the certificate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signatory {
    Incorporator,
    AuthorizedPerson,
}

impl Signatory {
    pub fn label(&self) -> &'static str {
        match self {
            Signatory::Incorporator => "Incorporator:",
            Signatory::AuthorizedPerson => "Authorized Person:",
        }
    }

    /// The dated IN WITNESS WHEREOF lines.
    ///
    /// `document` is how the clause refers to the filing, e.g.
    /// "this Certificate of Formation".
    pub fn execution_clause(&self, document: &str, date: &ExecutionDate) -> Vec<String> {
        let executed = format!("has executed {} this {} day of", document, date.day);
        let mut lines = match self {
            Signatory::Incorporator => vec![
                "IN WITNESS WHEREOF, the undersigned, being the incorporator hereinbefore named,"
                    .to_string(),
                executed,
            ],
            Signatory::AuthorizedPerson => {
                vec![format!("IN WITNESS WHEREOF, the undersigned {}", executed)]
            }
        };
        lines.push(format!("{}.", date.month_year));
        lines
    }
}

/// Filled-in certificate, ready for layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    pub title: &'static str,
    pub sections: Vec<Section>,
    /// IN WITNESS WHEREOF block, already dated.
    pub execution: Vec<String>,
    /// "Incorporator:" or "Authorized Person:".
    pub signature_label: &'static str,
    pub signer: String,
}

impl Certificate {
    pub fn new(
        title: &'static str,
        sections: Vec<Section>,
        signatory: Signatory,
        document: &str,
        signer: &str,
        date: &ExecutionDate,
    ) -> Self {
        Self {
            title,
            sections,
            execution: signatory.execution_clause(document, date),
            signature_label: signatory.label(),
            signer: signer.to_string(),
        }
    }

    /// Plain-text rendering with the same clauses, values and date as the PDF.
    pub fn to_text(&self) -> String {
        let mut blocks: Vec<String> = Vec::with_capacity(self.sections.len() + 3);
        blocks.push(self.title.to_string());

        for section in &self.sections {
            let lines: Vec<&str> = section.lines.iter().map(Line::text).collect();
            blocks.push(lines.join("\n"));
        }

        blocks.push(self.execution.join("\n"));
        blocks.push(format!("{}\n{}", self.signature_label, self.signer));

        blocks.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> ExecutionDate {
        ExecutionDate {
            day: "07".to_string(),
            month_year: "June, 2024".to_string(),
        }
    }

    #[test]
    fn test_incorporator_execution_clause() {
        let lines = Signatory::Incorporator
            .execution_clause("this Certificate of Incorporation", &date());
        assert_eq!(
            lines,
            vec![
                "IN WITNESS WHEREOF, the undersigned, being the incorporator hereinbefore named,",
                "has executed this Certificate of Incorporation this 07 day of",
                "June, 2024.",
            ]
        );
    }

    #[test]
    fn test_authorized_person_execution_clause() {
        let lines = Signatory::AuthorizedPerson
            .execution_clause("these Articles of Organization", &date());
        assert_eq!(
            lines,
            vec![
                "IN WITNESS WHEREOF, the undersigned has executed these Articles of Organization this 07 day of",
                "June, 2024.",
            ]
        );
        assert_eq!(Signatory::AuthorizedPerson.label(), "Authorized Person:");
    }

    #[test]
    fn test_to_text_layout() {
        let certificate = Certificate {
            title: "TITLE",
            sections: vec![
                Section::new(vec![
                    Line::Body("FIRST: name".to_string()),
                    Line::Value("Acme".to_string()),
                ]),
                Section::new(vec![Line::Body("SECOND: other".to_string())]),
            ],
            execution: vec!["signed this 01 day of".to_string(), "May, 2024.".to_string()],
            signature_label: "Incorporator:",
            signer: "Jane Doe".to_string(),
        };

        assert_eq!(
            certificate.to_text(),
            "TITLE\n\nFIRST: name\nAcme\n\nSECOND: other\n\nsigned this 01 day of\nMay, 2024.\n\nIncorporator:\nJane Doe"
        );
    }
}
