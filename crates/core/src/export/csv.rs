//! CSV serialization for budget tables.
//!
//! Output is UTF-8: a header row with the table's column names, one row
//! per budget row with the amount at two decimal places, and a trailing
//! `Total` row. Cell values that could be read as spreadsheet formulas
//! are neutralized before quoting.

use budgetgen_shared::types::format_amount;

use crate::table::BudgetTable;

/// Encodes a table as CSV bytes. Always succeeds.
#[must_use]
pub fn table_to_csv(table: &BudgetTable) -> Vec<u8> {
    let schema = table.kind().schema();
    let mut out = String::new();

    push_record(&mut out, schema.category_header, schema.amount_header);
    for row in table.rows() {
        push_record(&mut out, &row.category, &format_amount(row.amount));
    }
    push_record(&mut out, "Total", &format_amount(table.total()));

    out.into_bytes()
}

fn push_record(out: &mut String, category: &str, amount: &str) {
    out.push_str(&escape(category));
    out.push(',');
    // Amounts are digits and a dot; they never need quoting.
    out.push_str(amount);
    out.push('\n');
}

/// True when a leading character would make spreadsheets evaluate the
/// cell as a formula.
fn should_neutralize(value: &str) -> bool {
    let trimmed = value.trim_start();
    if trimmed.is_empty() || trimmed.starts_with('\'') {
        return false;
    }
    matches!(
        trimmed.chars().next(),
        Some('=') | Some('+') | Some('-') | Some('@')
    )
}

fn neutralize_formula(value: &str) -> String {
    if should_neutralize(value) {
        format!("'{value}")
    } else {
        value.to_string()
    }
}

fn escape(value: &str) -> String {
    let safe = neutralize_formula(value);
    if safe.contains(',') || safe.contains('"') || safe.contains('\n') || safe.contains('\r') {
        format!("\"{}\"", safe.replace('"', "\"\""))
    } else {
        safe
    }
}
