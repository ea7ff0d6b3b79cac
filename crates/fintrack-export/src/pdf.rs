use printpdf::{BuiltinFont, Mm, PdfDocument};

use crate::error::ExportError;

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 20.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const BODY_SIZE: f32 = 11.0;
const TITLE_SIZE: f32 = 18.0;

/// Generate a PDF from rendered text output.
///
/// One text line per input line on an A4 page in the built-in Helvetica
/// face; the first line is set larger as the document title. A new page is
/// started when the current one fills.
pub fn generate_pdf(rendered: &str) -> Result<Vec<u8>, ExportError> {
    let (doc, page, layer) = PdfDocument::new(
        "Report",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "report",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut current = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT_MM - MARGIN_MM;

    for (index, line) in rendered.lines().enumerate() {
        if y < MARGIN_MM {
            let (page, layer) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "report");
            current = doc.get_page(page).get_layer(layer);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        if !line.is_empty() {
            let size = if index == 0 { TITLE_SIZE } else { BODY_SIZE };
            current.use_text(line, size, Mm(MARGIN_MM), Mm(y), &font);
        }
        y -= LINE_HEIGHT_MM;
    }

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}
