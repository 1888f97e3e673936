//! A4 PDF backend for composed block sequences.

use std::io::BufWriter;

use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, IndirectFontRef, Mm,
    PdfDocument, PdfDocumentReference, PdfLayerReference, Px,
};

use super::error::RenderError;
use crate::assets::LogoImage;
use crate::report::{Block, ColumnLine};

// A4 portrait, 0.75in side margins, 0.5in top and bottom, 3.25in columns.
const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_SIDE: f64 = 19.05;
const MARGIN_TOP: f64 = 12.7;
const MARGIN_BOTTOM: f64 = 12.7;
const COLUMN_WIDTH: f64 = 82.55;
const ITEM_INDENT: f64 = 5.3;

const PT_TO_MM: f64 = 0.352_778;

// Letterhead logo box, 1.5in x 0.4in.
const LOGO_WIDTH: f64 = 38.1;
const LOGO_HEIGHT: f64 = 10.16;
// Embedded images are placed at 300 dpi before scaling.
const IMAGE_DPI: f64 = 300.0;

const TITLE_SIZE: f64 = 12.0;
const SECTION_SIZE: f64 = 11.0;
const ITEM_SIZE: f64 = 10.0;
const DATE_SIZE: f64 = 9.0;

const TITLE_LINE: f64 = 6.0;
const SECTION_LINE: f64 = 6.5;
const ITEM_LINE: f64 = 5.3;
const ROW_SPACING: f64 = 5.0;

const SIGNATURE_RULE: &str = "________________________________________";

/// Stateless PDF renderer for block sequences.
pub struct PdfRenderer;

impl PdfRenderer {
    /// Render a block sequence into finished PDF bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the PDF backend fails; the request carries no
    /// partial artifact in that case.
    pub fn render(blocks: &[Block]) -> Result<Vec<u8>, RenderError> {
        let (doc, page, layer) = PdfDocument::new(
            "Relatorio de Contagem",
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::backend(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::backend(e.to_string()))?;

        let current_layer = doc.get_page(page).get_layer(layer);
        let mut canvas = Canvas {
            doc,
            layer: current_layer,
            regular,
            bold,
            y: PAGE_HEIGHT - MARGIN_TOP,
        };

        for block in blocks {
            canvas.draw_block(block);
        }

        let Canvas { doc, .. } = canvas;
        let mut bytes = Vec::new();
        {
            let mut writer = BufWriter::new(&mut bytes);
            doc.save(&mut writer)
                .map_err(|e| RenderError::backend(e.to_string()))?;
        }
        Ok(bytes)
    }
}

/// Descending draw cursor over the current page.
struct Canvas {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f64,
}

impl Canvas {
    fn draw_block(&mut self, block: &Block) {
        match block {
            Block::Logo(logo) => self.draw_logo(logo),
            Block::Title(text) => {
                self.advance(TITLE_LINE);
                self.centered(text, TITLE_SIZE, true);
            }
            Block::DateLine(text) => {
                self.advance(TITLE_LINE);
                self.right_aligned(text, DATE_SIZE);
                // Breathing room between the header and the count layout.
                self.y -= ROW_SPACING;
            }
            Block::SectionHeading(text) => {
                self.advance(SECTION_LINE);
                self.text(text, SECTION_SIZE, MARGIN_SIDE, true);
                self.y -= 2.0;
            }
            Block::Columns { left, right } => self.draw_columns(left, right),
            Block::GrandTotal(text) => {
                self.y -= ROW_SPACING;
                self.advance(TITLE_LINE);
                self.centered(text, TITLE_SIZE, true);
            }
            Block::Gap(points) => {
                let gap = f64::from(*points) * PT_TO_MM;
                self.ensure_space(gap);
                self.y -= gap;
            }
            Block::Signature(name) => {
                self.advance(TITLE_LINE);
                self.centered(SIGNATURE_RULE, TITLE_SIZE, true);
                self.advance(TITLE_LINE);
                self.centered(name, TITLE_SIZE, true);
            }
        }
    }

    fn draw_logo(&mut self, logo: &LogoImage) {
        self.ensure_space(LOGO_HEIGHT + ROW_SPACING);
        self.y -= LOGO_HEIGHT;

        let xobject = ImageXObject {
            width: Px(logo.width as usize),
            height: Px(logo.height as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: logo.rgb.clone(),
            image_filter: None,
            clipping_bbox: None,
        };
        let natural_width = f64::from(logo.width) * 25.4 / IMAGE_DPI;
        let natural_height = f64::from(logo.height) * 25.4 / IMAGE_DPI;

        Image::from(xobject).add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm((PAGE_WIDTH - LOGO_WIDTH) / 2.0)),
                translate_y: Some(Mm(self.y)),
                scale_x: Some(LOGO_WIDTH / natural_width),
                scale_y: Some(LOGO_HEIGHT / natural_height),
                ..Default::default()
            },
        );
        self.y -= ROW_SPACING;
    }

    /// Columns advance row by row so a column taller than the remaining
    /// page continues at the top of the next one instead of drawing
    /// below the bottom margin.
    fn draw_columns(&mut self, left: &[ColumnLine], right: &[ColumnLine]) {
        for row in 0..left.len().max(right.len()) {
            let left_line = left.get(row);
            let right_line = right.get(row);
            let step = line_height(left_line).max(line_height(right_line));
            self.advance(step);

            if let Some(line) = left_line {
                self.draw_cell(line, MARGIN_SIDE);
            }
            if let Some(line) = right_line {
                self.draw_cell(line, MARGIN_SIDE + COLUMN_WIDTH);
            }
        }
        self.y -= ROW_SPACING;
    }

    fn draw_cell(&self, line: &ColumnLine, x: f64) {
        match line {
            ColumnLine::Heading(text) => self.text_at(text, SECTION_SIZE, x, self.y, true),
            ColumnLine::Item(text) => {
                self.text_at(text, ITEM_SIZE, x + ITEM_INDENT, self.y, false);
            }
            ColumnLine::Gap => {}
        }
    }

    /// Move the cursor down for one line, breaking the page when the
    /// bottom margin would be crossed.
    fn advance(&mut self, line_height: f64) {
        self.ensure_space(line_height);
        self.y -= line_height;
    }

    fn ensure_space(&mut self, needed: f64) {
        if self.y - needed < MARGIN_BOTTOM {
            let (page, layer) = self
                .doc
                .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            self.layer = self.doc.get_page(page).get_layer(layer);
            self.y = PAGE_HEIGHT - MARGIN_TOP;
        }
    }

    fn text(&mut self, text: &str, size: f64, x: f64, bold: bool) {
        self.text_at(text, size, x, self.y, bold);
    }

    fn text_at(&self, text: &str, size: f64, x: f64, y: f64, bold: bool) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(y), font);
    }

    fn centered(&mut self, text: &str, size: f64, bold: bool) {
        let x = (PAGE_WIDTH - text_width(text, size)) / 2.0;
        self.text(text, size, x, bold);
    }

    fn right_aligned(&mut self, text: &str, size: f64) {
        let x = PAGE_WIDTH - MARGIN_SIDE - text_width(text, size);
        self.text(text, size, x, false);
    }
}

/// Height one cell consumes; a row steps by its tallest cell.
fn line_height(line: Option<&ColumnLine>) -> f64 {
    match line {
        Some(ColumnLine::Heading(_)) => SECTION_LINE,
        Some(ColumnLine::Item(_)) => ITEM_LINE,
        Some(ColumnLine::Gap) => ROW_SPACING,
        None => 0.0,
    }
}

/// Approximate Helvetica advance width; built-in fonts carry no metrics,
/// and half the point size is close enough to center headings.
fn text_width(text: &str, size: f64) -> f64 {
    size * 0.5 * PT_TO_MM * text.chars().count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_blocks() -> Vec<Block> {
        vec![
            Block::Title("ABACO DOMPORQUITO S/A".to_string()),
            Block::Title("RELATORIO DE CONTAGEM".to_string()),
            Block::DateLine("DATA E HORA: 28/08/2026, 14:30:00".to_string()),
            Block::SectionHeading("CONTAGEM:".to_string()),
            Block::Columns {
                left: vec![
                    ColumnLine::Heading("PERNIL (TOTAL: 5)".to_string()),
                    ColumnLine::Item("Dianteiro: 5".to_string()),
                    ColumnLine::Gap,
                    ColumnLine::Heading("CARRÉ (TOTAL: 1)".to_string()),
                    ColumnLine::Item("Inteiro: 1".to_string()),
                ],
                right: vec![
                    ColumnLine::Heading("PALETA (TOTAL: 2)".to_string()),
                    ColumnLine::Item("Traseiro: 2".to_string()),
                ],
            },
            Block::GrandTotal("TOTAL GERAL: 8 ITENS".to_string()),
            Block::Gap(60),
            Block::Signature("Maria".to_string()),
        ]
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let bytes = PdfRenderer::render(&sample_blocks()).expect("render");
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_with_logo() {
        let mut blocks = sample_blocks();
        blocks.insert(
            0,
            Block::Logo(LogoImage {
                rgb: vec![255; 6],
                width: 2,
                height: 1,
            }),
        );
        let bytes = PdfRenderer::render(&blocks).expect("render");
        assert!(bytes.starts_with(b"%PDF"));
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|window| window == needle)
    }

    #[test]
    fn test_tall_column_breaks_across_pages() {
        // 120 item rows at 5.3mm each against 271.6mm of usable page
        // height: 51 rows per page, so the single column must continue
        // onto a third page instead of drawing below the bottom margin.
        let items: Vec<ColumnLine> = (0..120)
            .map(|i| ColumnLine::Item(format!("Item {i}: {i}")))
            .collect();
        let blocks = vec![Block::Columns {
            left: items,
            right: Vec::new(),
        }];

        let bytes = PdfRenderer::render(&blocks).expect("render");
        assert!(bytes.starts_with(b"%PDF"));
        // The page tree dictionary carries the final page count in clear.
        assert!(contains(&bytes, b"/Count 3"));
    }
}
