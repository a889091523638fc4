//! Budget table error types.

use budgetgen_shared::AppError;
use thiserror::Error;

/// Table-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The table identifier does not name one of the three tables.
    #[error("Unknown table: {0}")]
    UnknownTable(String),

    /// The amount did not parse as a non-negative number.
    #[error("Invalid amount {input:?}: must be a non-negative number")]
    InvalidAmount {
        /// The rejected raw input.
        input: String,
    },

    /// A category label must be non-empty.
    #[error("Category must not be empty")]
    EmptyCategory,

    /// The category already exists in this table (case-sensitive match).
    #[error("Category already exists in this table: {0}")]
    DuplicateCategory(String),

    /// The row index does not reference an existing row.
    #[error("Row index {index} is out of bounds (table has {len} rows)")]
    RowOutOfBounds {
        /// The rejected row index.
        index: usize,
        /// Current number of rows in the table.
        len: usize,
    },
}

impl From<TableError> for AppError {
    fn from(err: TableError) -> Self {
        match &err {
            TableError::UnknownTable(_) | TableError::RowOutOfBounds { .. } => {
                Self::NotFound(err.to_string())
            }
            TableError::InvalidAmount { .. } | TableError::EmptyCategory => {
                Self::Validation(err.to_string())
            }
            TableError::DuplicateCategory(_) => Self::Conflict(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_mapping() {
        assert_eq!(
            AppError::from(TableError::UnknownTable("weekly".into())).status_code(),
            404
        );
        assert_eq!(
            AppError::from(TableError::InvalidAmount {
                input: "abc".into()
            })
            .status_code(),
            400
        );
        assert_eq!(
            AppError::from(TableError::DuplicateCategory("Rent".into())).status_code(),
            409
        );
        assert_eq!(
            AppError::from(TableError::RowOutOfBounds { index: 9, len: 3 }).status_code(),
            404
        );
    }

    #[test]
    fn test_display_names_the_input() {
        let err = TableError::InvalidAmount {
            input: "12,x".into(),
        };
        assert!(err.to_string().contains("12,x"));

        let err = TableError::RowOutOfBounds { index: 4, len: 2 };
        assert_eq!(
            err.to_string(),
            "Row index 4 is out of bounds (table has 2 rows)"
        );
    }
}
