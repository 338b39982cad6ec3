//! PDF rendering engine.
//!
//! Turns a laid-out page into PDF bytes using the built-in Helvetica faces,
//! so no font files are needed at runtime.

use printpdf::{BuiltinFont, Mm, PdfDocument, Pt};

use super::layout::{FontStyle, PageLayout};
use super::GeneratorError;

/// Stateless engine for rendering page layouts to PDF.
pub struct PdfRenderEngine;

impl PdfRenderEngine {
    /// Render a single page.
    ///
    /// # Arguments
    /// * `document_title` - PDF metadata title.
    /// * `page` - Draw commands and page size in points.
    pub fn render(document_title: &str, page: &PageLayout) -> Result<Vec<u8>, GeneratorError> {
        let (doc, page_index, layer_index) = PdfDocument::new(
            document_title,
            Mm::from(Pt(page.width)),
            Mm::from(Pt(page.height)),
            "Layer 1",
        );

        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| GeneratorError::Pdf(e.to_string()))?;
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| GeneratorError::Pdf(e.to_string()))?;

        let layer = doc.get_page(page_index).get_layer(layer_index);
        for command in &page.commands {
            let font = match command.style {
                FontStyle::Bold => &bold,
                FontStyle::Regular => &regular,
            };
            layer.use_text(
                command.text.as_str(),
                command.size,
                Mm::from(Pt(command.x)),
                Mm::from(Pt(command.y)),
                font,
            );
        }

        let bytes = doc
            .save_to_bytes()
            .map_err(|e| GeneratorError::Pdf(e.to_string()))?;
        log::debug!("Rendered '{}' to {} PDF bytes", document_title, bytes.len());
        Ok(bytes)
    }
}
