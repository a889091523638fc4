//! Sample data seeding.
//!
//! Document "extraction" is simulated: generation installs these fixed
//! sample rows instead of parsing the uploaded PDFs. Seeding is an
//! explicit step, decoupled from the upload signal, and runs at most once
//! per session and table.

use rust_decimal::Decimal;

use super::types::{BudgetRow, FEDERAL_OBJECT_CLASSES, TableKind};

/// The fixed sample rows for a table.
#[must_use]
pub fn sample_rows(kind: TableKind) -> Vec<BudgetRow> {
    match kind {
        TableKind::Operating => rows(&[
            ("Personnel (Salaries)", 450_000),
            ("Fringe Benefits", 135_000),
            ("Program Supplies", 45_000),
            ("Equipment", 30_000),
            ("Travel", 15_000),
            ("Communications", 12_000),
            ("Utilities", 18_000),
            ("Rent/Facilities", 60_000),
            ("Administrative Costs", 75_000),
        ]),
        TableKind::Program => rows(&[
            ("Program Director (1.0 FTE)", 78_000),
            ("Case Managers (2.0 FTE)", 100_800),
            ("Administrative Assistant (0.5 FTE)", 18_000),
            ("Fringe Benefits (30%)", 59_040),
            ("Program Materials", 15_000),
            ("Client Transportation", 12_500),
            ("Training & Professional Development", 5_000),
            ("Office Supplies", 4_800),
            ("Communications", 2_400),
            ("Indirect Costs (10%)", 29_554),
        ]),
        // One row per SF-424A object class. Grand totals are derived at
        // display/export time, never stored as rows.
        TableKind::Federal => {
            let amounts: [i64; 9] = [196_800, 59_040, 12_500, 0, 19_800, 0, 0, 2_400, 29_054];
            FEDERAL_OBJECT_CLASSES
                .iter()
                .zip(amounts)
                .map(|(category, amount)| BudgetRow {
                    category: (*category).to_string(),
                    amount: Decimal::from(amount),
                })
                .collect()
        }
    }
}

fn rows(entries: &[(&str, i64)]) -> Vec<BudgetRow> {
    entries
        .iter()
        .map(|(category, amount)| BudgetRow {
            category: (*category).to_string(),
            amount: Decimal::from(*amount),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_operating_sample_total() {
        let total: Decimal = sample_rows(TableKind::Operating)
            .iter()
            .map(|row| row.amount)
            .sum();
        assert_eq!(total, dec!(840000));
    }

    #[test]
    fn test_program_sample_total() {
        let total: Decimal = sample_rows(TableKind::Program)
            .iter()
            .map(|row| row.amount)
            .sum();
        assert_eq!(total, dec!(325094));
    }

    #[test]
    fn test_federal_covers_every_object_class() {
        let rows = sample_rows(TableKind::Federal);
        assert_eq!(rows.len(), FEDERAL_OBJECT_CLASSES.len());
        for (row, class) in rows.iter().zip(FEDERAL_OBJECT_CLASSES) {
            assert_eq!(row.category, class);
        }
        let total: Decimal = rows.iter().map(|row| row.amount).sum();
        assert_eq!(total, dec!(319594));
    }

    #[test]
    fn test_sample_categories_are_unique() {
        for kind in TableKind::ALL {
            let rows = sample_rows(kind);
            let mut categories: Vec<&str> =
                rows.iter().map(|row| row.category.as_str()).collect();
            categories.sort_unstable();
            categories.dedup();
            assert_eq!(categories.len(), rows.len(), "duplicate seed in {kind}");
        }
    }
}
