//! # PDF Rendering
//!
//! Lays a [`QuotationDocument`] out on A4 pages with printpdf's built-in
//! Helvetica. Every string arrives preformatted; this module only positions
//! text.
//!
//! The built-in fonts have no `₹` glyph, so amounts print with `Rs.`.

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};
use quote_core::document::QuotationDocument;
use quote_core::{CGST_RATE, CURRENCY_SYMBOL, SGST_RATE};

use crate::error::AppError;
use crate::workflow::{DocumentRenderer, RenderedArtifact};

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_RIGHT: f32 = 195.0;
const TOP: f32 = 280.0;
/// Rows stop here and continue on a new page.
const BOTTOM: f32 = 40.0;

// Item table columns (x positions, mm)
const X_POS: f32 = 15.0;
const X_ITEM: f32 = 23.0;
const X_QTY: f32 = 80.0;
const X_RATE: f32 = 95.0;
const X_AMOUNT: f32 = 115.0;
const X_CGST: f32 = 137.0;
const X_SGST: f32 = 156.0;
const X_TOTAL: f32 = 175.0;

/// Characters per line of 10pt Helvetica across the full width.
const WRAP_FULL: usize = 95;
/// Characters per line in the ship-to column (x = 110mm).
const WRAP_SHIP_TO: usize = 45;
const X_SHIP_TO: f32 = 110.0;

/// Renders quotations to PDF.
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer;

impl PdfRenderer {
    pub fn new() -> Self {
        PdfRenderer
    }
}

impl DocumentRenderer for PdfRenderer {
    fn render(&self, document: &QuotationDocument) -> Result<RenderedArtifact, AppError> {
        let bytes = render_pdf(document)?;
        Ok(RenderedArtifact {
            bytes,
            content_type: "application/pdf".to_string(),
        })
    }
}

/// Replaces characters the built-in fonts can't draw.
fn printable(text: &str) -> String {
    text.replace(CURRENCY_SYMBOL, "Rs.")
}

fn render_error(e: impl ToString) -> AppError {
    AppError::Render(e.to_string())
}

/// Writing position on the current page.
struct Cursor<'a> {
    doc: &'a PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
}

impl Cursor<'_> {
    fn text(&self, text: &str, size: f32, x: f32) {
        self.layer
            .use_text(printable(text), size, Mm(x), Mm(self.y), &self.regular);
    }

    fn bold(&self, text: &str, size: f32, x: f32) {
        self.layer
            .use_text(printable(text), size, Mm(x), Mm(self.y), &self.bold);
    }

    fn rule(&self) {
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT), Mm(self.y)), false),
                (Point::new(Mm(MARGIN_RIGHT), Mm(self.y)), false),
            ],
            is_closed: false,
        });
    }

    fn down(&mut self, mm: f32) {
        self.y -= mm;
    }

    /// Starts a new page when fewer than `needed` mm remain.
    fn ensure_room(&mut self, needed: f32) {
        if self.y - needed >= BOTTOM {
            return;
        }
        let (page, layer) = self
            .doc
            .add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = TOP;
    }
}

fn render_pdf(document: &QuotationDocument) -> Result<Vec<u8>, AppError> {
    let title = format!("Quotation {}", document.quotation_no);
    let (doc, page1, layer1) = PdfDocument::new(&title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(render_error)?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(render_error)?;

    {
        let mut cursor = Cursor {
            doc: &doc,
            layer: doc.get_page(page1).get_layer(layer1),
            regular,
            bold,
            y: TOP,
        };

        write_header(&mut cursor, document);
        write_rows(&mut cursor, document);
        write_totals(&mut cursor, document);
        write_notes(&mut cursor, document);
    }

    let mut writer = std::io::BufWriter::new(Vec::<u8>::new());
    doc.save(&mut writer).map_err(render_error)?;
    writer.into_inner().map_err(render_error)
}

fn write_header(c: &mut Cursor<'_>, document: &QuotationDocument) {
    c.bold("QUOTATION", 22.0, MARGIN_LEFT);
    c.bold(&document.quotation_no, 12.0, 150.0);
    c.down(7.0);
    c.text(&format!("Date: {}", document.quotation_date), 10.0, 150.0);
    c.down(5.0);
    c.text(&format!("Valid until: {}", document.expiry_date), 10.0, 150.0);

    c.down(8.0);
    c.rule();
    c.down(8.0);

    c.bold("Bill To", 11.0, MARGIN_LEFT);
    c.bold("Ship To", 11.0, X_SHIP_TO);
    c.down(6.0);

    let bill_to: Vec<String> = match &document.bill_to {
        Some(party) => [
            party.name.clone(),
            party.contact_details.clone(),
            party.city.clone(),
            if party.gst_number.is_empty() {
                String::new()
            } else {
                format!("GSTIN: {}", party.gst_number)
            },
        ]
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect(),
        None => vec!["-".to_string()],
    };
    let ship_to = if document.ship_to.is_empty() {
        vec!["-".to_string()]
    } else {
        wrap(&document.ship_to, WRAP_SHIP_TO)
    };

    for i in 0..bill_to.len().max(ship_to.len()) {
        if let Some(line) = bill_to.get(i) {
            c.text(line, 10.0, MARGIN_LEFT);
        }
        if let Some(line) = ship_to.get(i) {
            c.text(line, 10.0, X_SHIP_TO);
        }
        c.down(5.0);
    }

    c.down(6.0);
}

fn write_table_heading(c: &mut Cursor<'_>) {
    c.bold("#", 9.0, X_POS);
    c.bold("Item", 9.0, X_ITEM);
    c.bold("Qty", 9.0, X_QTY);
    c.bold("Rate", 9.0, X_RATE);
    c.bold("Amount", 9.0, X_AMOUNT);
    c.bold(&tax_label("CGST", CGST_RATE.percentage()), 9.0, X_CGST);
    c.bold(&tax_label("SGST", SGST_RATE.percentage()), 9.0, X_SGST);
    c.bold("Total", 9.0, X_TOTAL);
    c.down(3.0);
    c.rule();
    c.down(6.0);
}

fn write_rows(c: &mut Cursor<'_>, document: &QuotationDocument) {
    write_table_heading(c);

    for row in &document.rows {
        if c.y - 6.0 < BOTTOM {
            c.ensure_room(6.0);
            write_table_heading(c);
        }
        c.text(&row.position.to_string(), 9.0, X_POS);
        c.text(&truncate(&row.item, 30), 9.0, X_ITEM);
        c.text(&row.quantity, 9.0, X_QTY);
        c.text(&row.rate, 9.0, X_RATE);
        c.text(&row.amount, 9.0, X_AMOUNT);
        c.text(&row.cgst, 9.0, X_CGST);
        c.text(&row.sgst, 9.0, X_SGST);
        c.bold(&row.total, 9.0, X_TOTAL);
        c.down(6.0);
    }

    c.down(2.0);
    c.rule();
}

fn write_totals(c: &mut Cursor<'_>, document: &QuotationDocument) {
    let totals = &document.totals;
    let discount_label = format!("Discount ({})", totals.discount_percent);
    let sgst_label = tax_label("SGST", SGST_RATE.percentage());
    let cgst_label = tax_label("CGST", CGST_RATE.percentage());
    let lines = [
        ("Subtotal", totals.subtotal.as_str()),
        (discount_label.as_str(), totals.discount.as_str()),
        ("Taxable Amount", totals.taxable.as_str()),
        (sgst_label.as_str(), totals.sgst.as_str()),
        (cgst_label.as_str(), totals.cgst.as_str()),
    ];

    c.ensure_room(60.0);
    c.down(8.0);
    for (label, value) in lines {
        c.text(label, 10.0, 120.0);
        c.text(value, 10.0, X_TOTAL);
        c.down(6.0);
    }

    c.down(1.0);
    c.bold("Grand Total", 12.0, 120.0);
    c.bold(&totals.total, 12.0, X_TOTAL);
    c.down(10.0);

    c.bold("Amount in words:", 10.0, MARGIN_LEFT);
    c.down(5.0);
    c.text(&totals.in_words, 10.0, MARGIN_LEFT);
}

fn write_notes(c: &mut Cursor<'_>, document: &QuotationDocument) {
    if document.notes.trim().is_empty() {
        return;
    }

    c.down(12.0);
    c.ensure_room(12.0);
    c.bold("Terms & Notes", 11.0, MARGIN_LEFT);
    c.down(6.0);

    for line in document.notes.lines().flat_map(|line| wrap(line, WRAP_FULL)) {
        c.ensure_room(5.0);
        c.text(&line, 10.0, MARGIN_LEFT);
        c.down(5.0);
    }
}

fn tax_label(name: &str, percent: f64) -> String {
    format!("{} {}%", name, percent)
}

/// Breaks `text` into lines of at most `max_chars`, on spaces where possible.
/// A blank input still yields one (empty) line.
fn wrap(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            lines.push(word.drain(..max_chars).collect());
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current.is_empty() {
            word.len()
        } else {
            current.chars().count() + 1 + word.len()
        };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.extend(word);
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    cut.push_str("...");
    cut
}

// =============================================================================
// Unit Tests
// =============================================================================
