//! Budget table data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::TableError;

/// The three tables of a budget package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    /// Annual operating budget.
    Operating,
    /// Program budget (line items for one program).
    Program,
    /// Federal grant budget in SF-424A object-class layout.
    Federal,
}

/// Fixed column layout of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    /// Human-readable table title.
    pub title: &'static str,
    /// Header of the category column.
    pub category_header: &'static str,
    /// Header of the amount column.
    pub amount_header: &'static str,
}

const OPERATING_SCHEMA: TableSchema = TableSchema {
    title: "Annual Operating Budget",
    category_header: "Category",
    amount_header: "Amount",
};

const PROGRAM_SCHEMA: TableSchema = TableSchema {
    title: "Program Budget",
    category_header: "Line Item",
    amount_header: "Total",
};

const FEDERAL_SCHEMA: TableSchema = TableSchema {
    title: "Federal Grant Budget (SF-424A)",
    category_header: "Budget Category",
    amount_header: "Total",
};

/// SF-424A object-class cost categories, in form order.
pub const FEDERAL_OBJECT_CLASSES: [&str; 9] = [
    "Personnel",
    "Fringe Benefits",
    "Travel",
    "Equipment",
    "Supplies",
    "Contractual",
    "Construction",
    "Other",
    "Indirect Charges",
];

impl TableKind {
    /// All table kinds, in display order.
    pub const ALL: [Self; 3] = [Self::Operating, Self::Program, Self::Federal];

    /// URL/identifier slug for this table.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Operating => "operating",
            Self::Program => "program",
            Self::Federal => "federal",
        }
    }

    /// Column layout of this table.
    #[must_use]
    pub const fn schema(self) -> &'static TableSchema {
        match self {
            Self::Operating => &OPERATING_SCHEMA,
            Self::Program => &PROGRAM_SCHEMA,
            Self::Federal => &FEDERAL_SCHEMA,
        }
    }
}

impl std::fmt::Display for TableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for TableKind {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "operating" => Ok(Self::Operating),
            "program" => Ok(Self::Program),
            "federal" => Ok(Self::Federal),
            _ => Err(TableError::UnknownTable(s.to_string())),
        }
    }
}

/// A single category/amount row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRow {
    /// Category label, unique within its table.
    pub category: String,
    /// Budgeted amount, non-negative, two-decimal precision.
    pub amount: Decimal,
}

/// An editable budget table with a derived total.
///
/// Row order is insertion order. The total is recomputed after every
/// mutation, so reads never observe a stale sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetTable {
    kind: TableKind,
    rows: Vec<BudgetRow>,
    total: Decimal,
    seeded: bool,
}

impl BudgetTable {
    /// Creates an empty, unseeded table.
    #[must_use]
    pub fn new(kind: TableKind) -> Self {
        Self {
            kind,
            rows: Vec::new(),
            total: Decimal::ZERO,
            seeded: false,
        }
    }

    /// Which of the three tables this is.
    #[must_use]
    pub const fn kind(&self) -> TableKind {
        self.kind
    }

    /// Current rows, in display order.
    #[must_use]
    pub fn rows(&self) -> &[BudgetRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sum of all row amounts; zero for an empty table.
    #[must_use]
    pub const fn total(&self) -> Decimal {
        self.total
    }

    /// True once sample rows have been seeded this session.
    #[must_use]
    pub const fn is_seeded(&self) -> bool {
        self.seeded
    }

    /// Installs the sample rows exactly once per session.
    ///
    /// Returns `true` if the table was seeded by this call, `false` if it
    /// had already been seeded (the call is then a no-op, so user edits
    /// are never clobbered).
    pub fn seed(&mut self) -> bool {
        if self.seeded {
            return false;
        }
        self.rows = super::seed::sample_rows(self.kind);
        self.seeded = true;
        self.recompute_total();
        true
    }

    /// Appends a new row.
    ///
    /// # Errors
    ///
    /// Returns `TableError::EmptyCategory` for a blank label and
    /// `TableError::DuplicateCategory` when the category already exists in
    /// this table (case-sensitive exact match). The table is unchanged on
    /// error.
    pub fn add_row(&mut self, category: &str, amount: Decimal) -> Result<(), TableError> {
        let category = normalize_category(category)?;
        if self.position_of(&category).is_some() {
            return Err(TableError::DuplicateCategory(category));
        }
        self.rows.push(BudgetRow { category, amount });
        self.recompute_total();
        Ok(())
    }

    /// Replaces the category and/or amount of the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TableError::RowOutOfBounds` when `index` does not reference
    /// an existing row, `TableError::EmptyCategory` for a blank rename, and
    /// `TableError::DuplicateCategory` when the rename collides with a
    /// different row. The row is unchanged on error.
    pub fn edit_row(
        &mut self,
        index: usize,
        new_category: Option<&str>,
        new_amount: Option<Decimal>,
    ) -> Result<(), TableError> {
        if index >= self.rows.len() {
            return Err(TableError::RowOutOfBounds {
                index,
                len: self.rows.len(),
            });
        }

        let category = match new_category {
            Some(raw) => {
                let category = normalize_category(raw)?;
                match self.position_of(&category) {
                    Some(existing) if existing != index => {
                        return Err(TableError::DuplicateCategory(category));
                    }
                    _ => Some(category),
                }
            }
            None => None,
        };

        let row = &mut self.rows[index];
        if let Some(category) = category {
            row.category = category;
        }
        if let Some(amount) = new_amount {
            row.amount = amount;
        }
        self.recompute_total();
        Ok(())
    }

    /// Removes and returns the row at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TableError::RowOutOfBounds` when `index` does not reference
    /// an existing row.
    pub fn delete_row(&mut self, index: usize) -> Result<BudgetRow, TableError> {
        if index >= self.rows.len() {
            return Err(TableError::RowOutOfBounds {
                index,
                len: self.rows.len(),
            });
        }
        let row = self.rows.remove(index);
        self.recompute_total();
        Ok(row)
    }

    fn position_of(&self, category: &str) -> Option<usize> {
        self.rows.iter().position(|row| row.category == category)
    }

    fn recompute_total(&mut self) {
        self.total = self.rows.iter().map(|row| row.amount).sum();
    }
}

fn normalize_category(raw: &str) -> Result<String, TableError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TableError::EmptyCategory);
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::str::FromStr;

    #[test]
    fn test_kind_slug_round_trip() {
        for kind in TableKind::ALL {
            assert_eq!(TableKind::from_str(kind.slug()).unwrap(), kind);
        }
        assert_eq!(TableKind::from_str("Federal").unwrap(), TableKind::Federal);
        assert!(matches!(
            TableKind::from_str("weekly"),
            Err(TableError::UnknownTable(_))
        ));
    }

    #[test]
    fn test_new_table_is_empty_with_zero_total() {
        let table = BudgetTable::new(TableKind::Operating);
        assert!(table.is_empty());
        assert_eq!(table.total(), Decimal::ZERO);
        assert!(!table.is_seeded());
    }

    #[test]
    fn test_add_row_recomputes_total() {
        let mut table = BudgetTable::new(TableKind::Operating);
        table.add_row("Rent", dec!(1200)).unwrap();
        table.add_row("Utilities", dec!(300.50)).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), dec!(1500.50));
    }

    #[test]
    fn test_add_duplicate_category_leaves_table_unchanged() {
        let mut table = BudgetTable::new(TableKind::Operating);
        table.add_row("Rent", dec!(1200)).unwrap();
        let err = table.add_row("Rent", dec!(800)).unwrap_err();
        assert_eq!(err, TableError::DuplicateCategory("Rent".into()));
        assert_eq!(table.len(), 1);
        assert_eq!(table.total(), dec!(1200));
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut table = BudgetTable::new(TableKind::Operating);
        table.add_row("Rent", dec!(1200)).unwrap();
        // "rent" is a different category under exact matching
        table.add_row("rent", dec!(800)).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_edit_row_amount() {
        let mut table = BudgetTable::new(TableKind::Federal);
        table.add_row("Travel", dec!(2000)).unwrap();
        table.edit_row(0, None, Some(dec!(2500))).unwrap();
        assert_eq!(table.rows()[0].amount, dec!(2500));
        assert_eq!(table.total(), dec!(2500));
    }

    #[test]
    fn test_edit_row_rename_to_same_category_is_allowed() {
        let mut table = BudgetTable::new(TableKind::Federal);
        table.add_row("Travel", dec!(2000)).unwrap();
        table.edit_row(0, Some("Travel"), Some(dec!(2500))).unwrap();
        assert_eq!(table.rows()[0].category, "Travel");
    }

    #[test]
    fn test_edit_row_rename_collision_rejected() {
        let mut table = BudgetTable::new(TableKind::Federal);
        table.add_row("Travel", dec!(2000)).unwrap();
        table.add_row("Personnel", dec!(10000)).unwrap();
        let err = table.edit_row(1, Some("Travel"), None).unwrap_err();
        assert_eq!(err, TableError::DuplicateCategory("Travel".into()));
        assert_eq!(table.rows()[1].category, "Personnel");
    }

    #[test]
    fn test_edit_row_out_of_bounds() {
        let mut table = BudgetTable::new(TableKind::Program);
        let err = table.edit_row(0, None, Some(dec!(1))).unwrap_err();
        assert_eq!(err, TableError::RowOutOfBounds { index: 0, len: 0 });
    }

    #[test]
    fn test_delete_row_removes_contribution() {
        let mut table = BudgetTable::new(TableKind::Operating);
        table.add_row("Rent", dec!(1200)).unwrap();
        table.add_row("Utilities", dec!(300)).unwrap();
        let removed = table.delete_row(0).unwrap();
        assert_eq!(removed.category, "Rent");
        assert_eq!(table.len(), 1);
        assert_eq!(table.total(), dec!(300));
    }

    #[test]
    fn test_delete_row_out_of_bounds() {
        let mut table = BudgetTable::new(TableKind::Operating);
        table.add_row("Rent", dec!(1200)).unwrap();
        let err = table.delete_row(5).unwrap_err();
        assert_eq!(err, TableError::RowOutOfBounds { index: 5, len: 1 });
    }

    #[test]
    fn test_blank_category_rejected() {
        let mut table = BudgetTable::new(TableKind::Operating);
        assert_eq!(
            table.add_row("   ", dec!(10)).unwrap_err(),
            TableError::EmptyCategory
        );
        assert!(table.is_empty());
    }

    #[test]
    fn test_seed_is_idempotent() {
        let mut table = BudgetTable::new(TableKind::Federal);
        assert!(table.seed());
        let before = table.rows().to_vec();

        table.edit_row(0, None, Some(dec!(1))).unwrap();
        assert!(!table.seed());
        assert_ne!(table.rows(), before.as_slice());
        assert_eq!(table.len(), before.len());
    }

    #[test]
    fn test_seed_does_not_resurrect_deleted_rows() {
        let mut table = BudgetTable::new(TableKind::Operating);
        table.seed();
        while !table.is_empty() {
            table.delete_row(0).unwrap();
        }
        assert!(!table.seed());
        assert!(table.is_empty());
        assert_eq!(table.total(), Decimal::ZERO);
    }
}
