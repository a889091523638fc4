//! The budget table manager.
//!
//! A flat CRUD layer over the three independent tables. Every mutation is
//! validated up front and leaves state untouched on rejection; totals are
//! recomputed immediately after each successful mutation.

use std::str::FromStr;

use rust_decimal::Decimal;

use super::error::TableError;
use super::types::{BudgetRow, BudgetTable, TableKind};
use crate::export::{self, ExportError};

/// Parses a raw amount string as a non-negative decimal.
///
/// Input is rounded to two decimal places on entry so stored amounts are
/// always displayable at cent precision.
///
/// # Errors
///
/// Returns `TableError::InvalidAmount` when the input is not a number or
/// is negative.
pub fn parse_amount(raw: &str) -> Result<Decimal, TableError> {
    let invalid = || TableError::InvalidAmount {
        input: raw.to_string(),
    };
    let value = Decimal::from_str(raw.trim()).map_err(|_| invalid())?;
    if value.is_sign_negative() {
        return Err(invalid());
    }
    Ok(value.round_dp(2))
}

/// Holds the three budget tables and exposes the operations on them.
#[derive(Debug, Clone)]
pub struct TableManager {
    operating: BudgetTable,
    program: BudgetTable,
    federal: BudgetTable,
}

impl TableManager {
    /// Creates a manager with three empty, unseeded tables.
    #[must_use]
    pub fn new() -> Self {
        Self {
            operating: BudgetTable::new(TableKind::Operating),
            program: BudgetTable::new(TableKind::Program),
            federal: BudgetTable::new(TableKind::Federal),
        }
    }

    /// Read access to one table.
    #[must_use]
    pub const fn table(&self, kind: TableKind) -> &BudgetTable {
        match kind {
            TableKind::Operating => &self.operating,
            TableKind::Program => &self.program,
            TableKind::Federal => &self.federal,
        }
    }

    const fn table_mut(&mut self, kind: TableKind) -> &mut BudgetTable {
        match kind {
            TableKind::Operating => &mut self.operating,
            TableKind::Program => &mut self.program,
            TableKind::Federal => &mut self.federal,
        }
    }

    /// Seeds one table with its sample rows; no-op if already seeded.
    ///
    /// Returns `true` if this call performed the seeding.
    pub fn seed(&mut self, kind: TableKind) -> bool {
        self.table_mut(kind).seed()
    }

    /// Seeds all three tables (each at most once per session).
    pub fn seed_all(&mut self) {
        for kind in TableKind::ALL {
            self.seed(kind);
        }
    }

    /// Replaces the category and/or amount of one row.
    ///
    /// The raw amount is validated here, at the edit boundary: a
    /// non-numeric or negative amount is rejected with
    /// `TableError::InvalidAmount` before anything is mutated.
    ///
    /// # Errors
    ///
    /// See [`parse_amount`] and [`BudgetTable::edit_row`].
    pub fn edit_cell(
        &mut self,
        kind: TableKind,
        index: usize,
        new_category: Option<&str>,
        new_amount: Option<&str>,
    ) -> Result<(), TableError> {
        let amount = new_amount.map(parse_amount).transpose()?;
        self.table_mut(kind).edit_row(index, new_category, amount)
    }

    /// Appends a row with a validated amount.
    ///
    /// # Errors
    ///
    /// See [`parse_amount`] and [`BudgetTable::add_row`].
    pub fn add_row(
        &mut self,
        kind: TableKind,
        category: &str,
        amount: &str,
    ) -> Result<(), TableError> {
        let amount = parse_amount(amount)?;
        self.table_mut(kind).add_row(category, amount)
    }

    /// Removes and returns one row.
    ///
    /// # Errors
    ///
    /// See [`BudgetTable::delete_row`].
    pub fn delete_row(&mut self, kind: TableKind, index: usize) -> Result<BudgetRow, TableError> {
        self.table_mut(kind).delete_row(index)
    }

    /// Sum of all row amounts in one table; zero when empty.
    #[must_use]
    pub const fn totals(&self, kind: TableKind) -> Decimal {
        self.table(kind).total()
    }

    /// Encodes one table as CSV bytes.
    #[must_use]
    pub fn export_csv(&self, kind: TableKind) -> Vec<u8> {
        export::csv::table_to_csv(self.table(kind))
    }

    /// Renders the Federal table as a single-page PDF.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::UnsupportedTable` for the Operating and
    /// Program tables; PDF export is Federal-only.
    pub fn export_pdf(
        &self,
        kind: TableKind,
        organization_name: Option<&str>,
        program_title: Option<&str>,
    ) -> Result<Vec<u8>, ExportError> {
        if kind != TableKind::Federal {
            return Err(ExportError::UnsupportedTable(kind));
        }
        export::pdf::render_federal_pdf(self.table(kind), organization_name, program_title)
    }
}

impl Default for TableManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[rstest::rstest]
    #[case("2500", dec!(2500))]
    #[case(" 2500.50 ", dec!(2500.50))]
    #[case("0", dec!(0))]
    #[case("10.555", dec!(10.56))]
    fn test_parse_amount_accepts_decimals(#[case] raw: &str, #[case] expected: Decimal) {
        assert_eq!(parse_amount(raw).unwrap(), expected);
    }

    #[rstest::rstest]
    #[case("")]
    #[case("abc")]
    #[case("12abc")]
    #[case("$100")]
    #[case("1,000")]
    #[case("1.2.3")]
    fn test_parse_amount_rejects_garbage(#[case] input: &str) {
        let err = parse_amount(input).unwrap_err();
        assert!(
            matches!(err, TableError::InvalidAmount { .. }),
            "{input:?} should be invalid"
        );
    }

    #[test]
    fn test_parse_amount_rejects_negative() {
        assert!(matches!(
            parse_amount("-5"),
            Err(TableError::InvalidAmount { .. })
        ));
    }

    #[test]
    fn test_edit_cell_invalid_amount_leaves_row_unchanged() {
        let mut manager = TableManager::new();
        manager.add_row(TableKind::Federal, "Travel", "2000").unwrap();

        let err = manager
            .edit_cell(TableKind::Federal, 0, None, Some("not-a-number"))
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidAmount { .. }));

        let table = manager.table(TableKind::Federal);
        assert_eq!(table.rows()[0].amount, dec!(2000));
        assert_eq!(table.total(), dec!(2000));
    }

    #[test]
    fn test_totals_track_mutations() {
        let mut manager = TableManager::new();
        manager
            .add_row(TableKind::Operating, "Rent", "1200")
            .unwrap();
        manager
            .add_row(TableKind::Operating, "Utilities", "300")
            .unwrap();
        assert_eq!(manager.totals(TableKind::Operating), dec!(1500));

        manager
            .edit_cell(TableKind::Operating, 1, None, Some("450"))
            .unwrap();
        assert_eq!(manager.totals(TableKind::Operating), dec!(1650));

        manager.delete_row(TableKind::Operating, 0).unwrap();
        assert_eq!(manager.totals(TableKind::Operating), dec!(450));
    }

    #[test]
    fn test_tables_are_independent() {
        let mut manager = TableManager::new();
        manager
            .add_row(TableKind::Operating, "Rent", "1200")
            .unwrap();
        assert_eq!(manager.totals(TableKind::Program), Decimal::ZERO);
        assert_eq!(manager.totals(TableKind::Federal), Decimal::ZERO);
        // Same category in another table is not a duplicate
        manager.add_row(TableKind::Program, "Rent", "800").unwrap();
    }

    #[test]
    fn test_pdf_export_is_federal_only() {
        let mut manager = TableManager::new();
        manager.seed_all();
        assert!(manager.export_pdf(TableKind::Federal, None, None).is_ok());
        assert!(matches!(
            manager.export_pdf(TableKind::Operating, None, None),
            Err(ExportError::UnsupportedTable(TableKind::Operating))
        ));
        assert!(matches!(
            manager.export_pdf(TableKind::Program, None, None),
            Err(ExportError::UnsupportedTable(TableKind::Program))
        ));
    }
}
