//! Single-page PDF rendering of the Federal (SF-424A style) table.
//!
//! Letter page, one-inch margins, Helvetica. Categories are rendered as
//! rows under a ruled header, with a grand-total line at the bottom.
//! Layout coordinates are whole points.

use budgetgen_shared::types::format_usd;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use super::error::ExportError;
use crate::table::BudgetTable;

const PAGE_WIDTH: i64 = 612;
const PAGE_HEIGHT: i64 = 792;
const MARGIN: i64 = 72;
const RULE_RIGHT: i64 = PAGE_WIDTH - MARGIN;
const AMOUNT_X: i64 = 420;
const ROW_STEP: i64 = 16;
// Single page: stop laying out rows before running into the bottom margin.
const BOTTOM_LIMIT: i64 = MARGIN + 48;

const FALLBACK_ORGANIZATION: &str = "Sample Nonprofit Organization";
const FALLBACK_PROGRAM: &str = "Community Support Program";

/// Renders the Federal table as a single-page PDF.
///
/// # Errors
///
/// Returns `ExportError::Pdf` if the document cannot be assembled.
pub fn render_federal_pdf(
    table: &BudgetTable,
    organization_name: Option<&str>,
    program_title: Option<&str>,
) -> Result<Vec<u8>, ExportError> {
    let organization = non_blank(organization_name).unwrap_or(FALLBACK_ORGANIZATION);
    let program = non_blank(program_title).unwrap_or(FALLBACK_PROGRAM);
    let schema = table.kind().schema();

    let mut ops: Vec<Operation> = Vec::new();
    let mut y = PAGE_HEIGHT - MARGIN;

    text(&mut ops, BOLD, 14, MARGIN, y, "Federal Grant Budget (SF-424A Format)");
    y -= 29;
    text(&mut ops, REGULAR, 11, MARGIN, y, &format!("Organization: {organization}"));
    y -= 18;
    text(&mut ops, REGULAR, 11, MARGIN, y, &format!("Program: {program}"));
    y -= 25;

    text(&mut ops, BOLD, 10, MARGIN, y, schema.category_header);
    text(&mut ops, BOLD, 10, AMOUNT_X, y, "Amount");
    y -= ROW_STEP;
    rule(&mut ops, MARGIN, RULE_RIGHT, y);
    y -= 12;

    for row in table.rows() {
        if y < BOTTOM_LIMIT {
            break;
        }
        let category: String = row.category.chars().take(60).collect();
        text(&mut ops, REGULAR, 10, MARGIN, y, &category);
        text(&mut ops, REGULAR, 10, AMOUNT_X, y, &format_usd(row.amount));
        y -= ROW_STEP;
    }

    y -= 4;
    rule(&mut ops, MARGIN, RULE_RIGHT, y);
    y -= ROW_STEP;
    text(&mut ops, BOLD, 10, MARGIN, y, "TOTAL PROJECT COSTS");
    text(&mut ops, BOLD, 10, AMOUNT_X, y, &format_usd(table.total()));

    build_document(ops)
}

const REGULAR: &str = "F1";
const BOLD: &str = "F2";

fn text(ops: &mut Vec<Operation>, font: &str, size: i64, x: i64, y: i64, value: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(value)]));
    ops.push(Operation::new("ET", vec![]));
}

fn rule(ops: &mut Vec<Operation>, x1: i64, x2: i64, y: i64) {
    ops.push(Operation::new("m", vec![x1.into(), y.into()]));
    ops.push(Operation::new("l", vec![x2.into(), y.into()]));
    ops.push(Operation::new("S", vec![]));
}

fn build_document(ops: Vec<Operation>) -> Result<Vec<u8>, ExportError> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_regular = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let font_bold = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            REGULAR => font_regular,
            BOLD => font_bold,
        },
    });

    let content = Content { operations: ops };
    let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "Contents" => content_id,
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
            "Resources" => resources_id,
            "MediaBox" => vec![
                0.into(),
                0.into(),
                PAGE_WIDTH.into(),
                PAGE_HEIGHT.into(),
            ],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{TableKind, TableManager};

    fn federal_manager() -> TableManager {
        let mut manager = TableManager::new();
        manager.seed(TableKind::Federal);
        manager
    }

    #[test]
    fn test_pdf_is_a_single_page_document() {
        let manager = federal_manager();
        let bytes = manager
            .export_pdf(TableKind::Federal, None, None)
            .unwrap();
        assert!(bytes.starts_with(b"%PDF-"));

        let doc = Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), 1);
    }

    #[test]
    fn test_pdf_embeds_table_text() {
        let manager = federal_manager();
        let bytes = manager
            .export_pdf(
                TableKind::Federal,
                Some("River Valley Services"),
                Some("Housing Outreach"),
            )
            .unwrap();
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("Helvetica"));
        assert!(raw.contains("River Valley Services"));
        assert!(raw.contains("Housing Outreach"));
        assert!(raw.contains("Personnel"));
        assert!(raw.contains("TOTAL PROJECT COSTS"));
        assert!(raw.contains("$319,594.00"));
    }

    #[test]
    fn test_blank_organization_falls_back_to_sample_names() {
        let manager = federal_manager();
        let bytes = manager
            .export_pdf(TableKind::Federal, Some("   "), None)
            .unwrap();
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains(FALLBACK_ORGANIZATION));
        assert!(raw.contains(FALLBACK_PROGRAM));
    }

    #[test]
    fn test_empty_table_still_renders() {
        let manager = TableManager::new();
        let bytes = manager
            .export_pdf(TableKind::Federal, None, None)
            .unwrap();
        let raw = String::from_utf8_lossy(&bytes);
        assert!(raw.contains("$0.00"));
    }
}
