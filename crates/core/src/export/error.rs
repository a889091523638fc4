//! Export error types.

use budgetgen_shared::AppError;
use thiserror::Error;

use crate::table::TableKind;

/// Export-related errors.
#[derive(Debug, Error)]
pub enum ExportError {
    /// PDF export is only defined for the Federal table.
    #[error("PDF export is not available for the {0} table")]
    UnsupportedTable(TableKind),

    /// The PDF document could not be assembled.
    #[error("PDF rendering failed: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The PDF document could not be serialized to bytes.
    #[error("PDF serialization failed: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match &err {
            ExportError::UnsupportedTable(_) => Self::UnsupportedExport(err.to_string()),
            ExportError::Pdf(_) => Self::Internal(err.to_string()),
            ExportError::Io(_) => Self::Internal(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_table_maps_to_422() {
        let err = AppError::from(ExportError::UnsupportedTable(TableKind::Program));
        assert_eq!(err.status_code(), 422);
        assert_eq!(err.error_code(), "UNSUPPORTED_EXPORT");
    }
}
