//! Fixed single-page layout for certificates.
//!
//! Positions are PDF points with the origin at the bottom-left of a US Letter
//! page. The title is centred, clauses flow down from the top, and the
//! execution and signature blocks are anchored near the bottom.

use super::document::{Certificate, Line};
use super::GeneratorError;

pub const PAGE_WIDTH: f32 = 612.0;
pub const PAGE_HEIGHT: f32 = 792.0;

pub const TITLE_SIZE: f32 = 16.0;
pub const BODY_SIZE: f32 = 12.0;

const TITLE_Y: f32 = 750.0;
const BODY_TOP: f32 = 700.0;
const MARGIN_X: f32 = 50.0;
const INDENT_X: f32 = 70.0;
const RIGHT_EDGE: f32 = PAGE_WIDTH - MARGIN_X;
const LINE_PITCH: f32 = 20.0;
const SECTION_GAP: f32 = 30.0;
const EXECUTION_Y: f32 = 200.0;
const SIGNATURE_Y: f32 = 100.0;
const BOTTOM_MARGIN: f32 = 36.0;

// Average advance widths of Helvetica in em, used to estimate line widths.
const BODY_EM: f32 = 0.5;
const TITLE_EM: f32 = 0.68;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Bold,
    Regular,
}

/// Place `text` with its baseline starting at (`x`, `y`).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub style: FontStyle,
    pub size: f32,
}

impl DrawCommand {
    fn body(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            style: FontStyle::Regular,
            size: BODY_SIZE,
        }
    }
}

/// Ordered draw commands for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub width: f32,
    pub height: f32,
    pub commands: Vec<DrawCommand>,
}

fn estimate_width(text: &str, size: f32, em: f32) -> f32 {
    text.chars().count() as f32 * size * em
}

/// Greedy word wrap so that no line extends past the right margin.
/// Words longer than a whole line are split.
pub fn wrap_text(text: &str, x: f32) -> Vec<String> {
    let max_chars = (((RIGHT_EDGE - x) / (BODY_SIZE * BODY_EM)).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split(' ') {
        let mut word: Vec<char> = word.chars().collect();

        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let word: String = word.into_iter().collect();
        let needed = current.chars().count() + usize::from(!current.is_empty()) + word.chars().count();
        if needed > max_chars && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draws wrapped lines downward from a starting baseline.
struct Column {
    y: f32,
    commands: Vec<DrawCommand>,
}

impl Column {
    fn new(y: f32) -> Self {
        Self {
            y,
            commands: Vec::new(),
        }
    }

    fn line(&mut self, text: &str, x: f32) {
        for part in wrap_text(text, x) {
            self.commands.push(DrawCommand::body(part, x, self.y));
            self.y -= LINE_PITCH;
        }
    }

    /// Baseline of the last line drawn.
    fn lowest(&self) -> f32 {
        self.y + LINE_PITCH
    }

    fn check_floor(&self, floor: f32) -> Result<(), GeneratorError> {
        if self.commands.is_empty() || self.lowest() >= floor {
            Ok(())
        } else {
            Err(GeneratorError::LayoutOverflow {
                lowest: self.lowest(),
                floor,
            })
        }
    }
}

/// Lay a certificate out on a single US Letter page.
pub fn layout_certificate(certificate: &Certificate) -> Result<PageLayout, GeneratorError> {
    let mut commands = Vec::new();

    let title_width = estimate_width(certificate.title, TITLE_SIZE, TITLE_EM);
    commands.push(DrawCommand {
        text: certificate.title.to_string(),
        x: ((PAGE_WIDTH - title_width) / 2.0).max(MARGIN_X),
        y: TITLE_Y,
        style: FontStyle::Bold,
        size: TITLE_SIZE,
    });

    let mut body = Column::new(BODY_TOP);
    for (index, section) in certificate.sections.iter().enumerate() {
        if index > 0 {
            body.y -= SECTION_GAP;
        }
        for line in &section.lines {
            match line {
                Line::Body(text) => body.line(text, MARGIN_X),
                Line::Value(text) => body.line(text, INDENT_X),
            }
        }
    }
    body.check_floor(EXECUTION_Y + LINE_PITCH)?;

    let mut execution = Column::new(EXECUTION_Y);
    for text in &certificate.execution {
        execution.line(text, MARGIN_X);
    }
    execution.check_floor(SIGNATURE_Y + LINE_PITCH)?;

    let mut signature = Column::new(SIGNATURE_Y);
    signature.line(certificate.signature_label, MARGIN_X);
    signature.line(&certificate.signer, INDENT_X);
    signature.check_floor(BOTTOM_MARGIN)?;

    commands.extend(body.commands);
    commands.extend(execution.commands);
    commands.extend(signature.commands);

    Ok(PageLayout {
        width: PAGE_WIDTH,
        height: PAGE_HEIGHT,
        commands,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::document::Section;

    fn certificate(name: &str) -> Certificate {
        Certificate {
            title: "CERTIFICATE OF TEST",
            sections: vec![
                Section::new(vec![
                    Line::Body("FIRST: The name is:".to_string()),
                    Line::Value(name.to_string()),
                ]),
                Section::new(vec![Line::Body("SECOND: Something else.".to_string())]),
            ],
            execution: vec!["executed this 01 day of".to_string(), "May, 2024.".to_string()],
            signature_label: "Incorporator:",
            signer: "Jane Doe".to_string(),
        }
    }

    #[test]
    fn test_layout_positions() {
        let layout = layout_certificate(&certificate("Acme")).unwrap();
        assert_eq!(layout.width, 612.0);
        assert_eq!(layout.height, 792.0);

        let positions: Vec<(&str, f32, f32)> = layout
            .commands
            .iter()
            .map(|c| (c.text.as_str(), c.x, c.y))
            .collect();

        assert_eq!(positions[0].0, "CERTIFICATE OF TEST");
        assert_eq!(positions[0].2, 750.0);
        assert_eq!(positions[1], ("FIRST: The name is:", 50.0, 700.0));
        assert_eq!(positions[2], ("Acme", 70.0, 680.0));
        assert_eq!(positions[3], ("SECOND: Something else.", 50.0, 630.0));
        assert_eq!(positions[4], ("executed this 01 day of", 50.0, 200.0));
        assert_eq!(positions[5], ("May, 2024.", 50.0, 180.0));
        assert_eq!(positions[6], ("Incorporator:", 50.0, 100.0));
        assert_eq!(positions[7], ("Jane Doe", 70.0, 80.0));
    }

    #[test]
    fn test_only_title_is_bold() {
        let layout = layout_certificate(&certificate("Acme")).unwrap();
        assert_eq!(layout.commands[0].style, FontStyle::Bold);
        assert!(layout.commands[1..]
            .iter()
            .all(|c| c.style == FontStyle::Regular && c.size == BODY_SIZE));
    }

    #[test]
    fn test_commands_flow_downward() {
        let layout = layout_certificate(&certificate("Acme")).unwrap();
        for pair in layout.commands.windows(2) {
            assert!(pair[0].y > pair[1].y);
        }
    }

    #[test]
    fn test_wrap_text() {
        assert_eq!(wrap_text("short line", MARGIN_X), vec!["short line"]);
        assert_eq!(wrap_text("", MARGIN_X), vec![""]);

        let long = "word ".repeat(40);
        let lines = wrap_text(long.trim_end(), MARGIN_X);
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= 85));
        assert_eq!(lines.join(" "), long.trim_end());
    }

    #[test]
    fn test_wrap_splits_long_words() {
        let word = "A".repeat(200);
        let lines = wrap_text(&word, INDENT_X);
        assert_eq!(lines.concat(), word);
        assert!(lines.iter().all(|l| l.chars().count() <= 82));
    }

    #[test]
    fn test_overflowing_body_is_rejected() {
        let name = "Acme Holdings ".repeat(200);
        let result = layout_certificate(&certificate(&name));
        assert!(matches!(
            result,
            Err(GeneratorError::LayoutOverflow { .. })
        ));
    }
}
