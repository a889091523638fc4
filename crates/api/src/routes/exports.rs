//! Export download routes.

use axum::{
    Router,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
    routing::get,
};
use tracing::info;
use uuid::Uuid;

use crate::routes::tables::parse_kind;
use crate::{AppState, error::ApiError};
use budgetgen_core::table::TableKind;

/// Creates the export routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/sessions/{session_id}/tables/{table}/export.csv",
            get(export_csv),
        )
        .route(
            "/sessions/{session_id}/tables/{table}/export.pdf",
            get(export_pdf),
        )
}

const fn csv_filename(kind: TableKind) -> &'static str {
    match kind {
        TableKind::Operating => "operating_budget.csv",
        TableKind::Program => "program_budget.csv",
        TableKind::Federal => "federal_budget.csv",
    }
}

fn attachment(filename: &str) -> String {
    format!("attachment; filename=\"{filename}\"")
}

/// GET `/sessions/{session_id}/tables/{table}/export.csv`
/// Download one table as CSV.
async fn export_csv(
    State(state): State<AppState>,
    Path((session_id, table)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = parse_kind(&table)?;
    let bytes = state
        .sessions
        .with_session(session_id, |session| session.tables().export_csv(kind))?;

    info!(session_id = %session_id, table = %kind, "CSV exported");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, attachment(csv_filename(kind))),
        ],
        bytes,
    ))
}

/// GET `/sessions/{session_id}/tables/{table}/export.pdf`
/// Download the Federal table as a single-page SF-424A-style PDF.
///
/// PDF export exists only for the Federal table; other tables are
/// rejected with `UNSUPPORTED_EXPORT`.
async fn export_pdf(
    State(state): State<AppState>,
    Path((session_id, table)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse, ApiError> {
    let kind = parse_kind(&table)?;
    let bytes = state
        .sessions
        .with_session(session_id, |session| {
            let organization = session.organization();
            session.tables().export_pdf(
                kind,
                organization.name.as_deref(),
                organization.program_title.as_deref(),
            )
        })??;

    info!(session_id = %session_id, table = %kind, "PDF exported");
    Ok((
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                attachment("federal_budget_sf424a.pdf"),
            ),
        ],
        bytes,
    ))
}
