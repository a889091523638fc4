//! Budget table routes: reads and in-place edits.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, patch, post},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{AppState, error::ApiError};
use budgetgen_core::table::{BudgetTable, TableKind};
use budgetgen_shared::types::format_amount;

/// Creates the table routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions/{session_id}/tables/{table}", get(get_table))
        .route(
            "/sessions/{session_id}/tables/{table}/rows",
            post(add_row),
        )
        .route(
            "/sessions/{session_id}/tables/{table}/rows/{index}",
            patch(edit_row),
        )
        .route(
            "/sessions/{session_id}/tables/{table}/rows/{index}",
            delete(delete_row),
        )
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for editing a row in place.
///
/// Amounts arrive as strings and are validated in the core, so malformed
/// numbers map to a `VALIDATION_ERROR` instead of a deserialization
/// failure.
#[derive(Debug, Deserialize)]
pub struct EditRowRequest {
    /// New category label, if the label cell was edited.
    pub category: Option<String>,
    /// New amount, if the amount cell was edited.
    pub amount: Option<String>,
}

/// Request body for appending a row.
#[derive(Debug, Deserialize)]
pub struct AddRowRequest {
    /// Category label.
    pub category: String,
    /// Amount.
    pub amount: String,
}

/// Response for one row.
#[derive(Debug, Serialize)]
pub struct RowResponse {
    /// Category label.
    pub category: String,
    /// Amount with two decimals.
    pub amount: String,
}

/// Response for a table.
#[derive(Debug, Serialize)]
pub struct TableResponse {
    /// Table identifier slug.
    pub table: String,
    /// Human-readable table title.
    pub title: String,
    /// Column headers, category then amount.
    pub columns: [String; 2],
    /// Rows in display order.
    pub rows: Vec<RowResponse>,
    /// Sum of all row amounts, two decimals.
    pub total: String,
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn table_view(table: &BudgetTable) -> TableResponse {
    let schema = table.kind().schema();
    TableResponse {
        table: table.kind().slug().to_string(),
        title: schema.title.to_string(),
        columns: [
            schema.category_header.to_string(),
            schema.amount_header.to_string(),
        ],
        rows: table
            .rows()
            .iter()
            .map(|row| RowResponse {
                category: row.category.clone(),
                amount: format_amount(row.amount),
            })
            .collect(),
        total: format_amount(table.total()),
    }
}

pub(crate) fn parse_kind(raw: &str) -> Result<TableKind, ApiError> {
    raw.parse::<TableKind>().map_err(ApiError::from)
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/sessions/{session_id}/tables/{table}`
/// Current rows and total of one table.
async fn get_table(
    State(state): State<AppState>,
    Path((session_id, table)): Path<(Uuid, String)>,
) -> Result<Json<TableResponse>, ApiError> {
    let kind = parse_kind(&table)?;
    let response = state
        .sessions
        .with_session(session_id, |session| table_view(session.tables().table(kind)))?;
    Ok(Json(response))
}

/// POST `/sessions/{session_id}/tables/{table}/rows`
/// Append a row.
async fn add_row(
    State(state): State<AppState>,
    Path((session_id, table)): Path<(Uuid, String)>,
    Json(payload): Json<AddRowRequest>,
) -> Result<(StatusCode, Json<TableResponse>), ApiError> {
    let kind = parse_kind(&table)?;
    let response = state
        .sessions
        .with_session_mut(session_id, |session| {
            session
                .tables_mut()
                .add_row(kind, &payload.category, &payload.amount)
                .map(|()| table_view(session.tables().table(kind)))
        })??;

    info!(session_id = %session_id, table = %kind, category = %payload.category, "Row added");
    Ok((StatusCode::CREATED, Json(response)))
}

/// PATCH `/sessions/{session_id}/tables/{table}/rows/{index}`
/// Edit the category and/or amount of one row.
async fn edit_row(
    State(state): State<AppState>,
    Path((session_id, table, index)): Path<(Uuid, String, usize)>,
    Json(payload): Json<EditRowRequest>,
) -> Result<Json<TableResponse>, ApiError> {
    let kind = parse_kind(&table)?;
    let response = state
        .sessions
        .with_session_mut(session_id, |session| {
            session
                .tables_mut()
                .edit_cell(
                    kind,
                    index,
                    payload.category.as_deref(),
                    payload.amount.as_deref(),
                )
                .map(|()| table_view(session.tables().table(kind)))
        })??;

    info!(session_id = %session_id, table = %kind, row = index, "Row updated");
    Ok(Json(response))
}

/// DELETE `/sessions/{session_id}/tables/{table}/rows/{index}`
/// Remove one row.
async fn delete_row(
    State(state): State<AppState>,
    Path((session_id, table, index)): Path<(Uuid, String, usize)>,
) -> Result<Json<TableResponse>, ApiError> {
    let kind = parse_kind(&table)?;
    let response = state
        .sessions
        .with_session_mut(session_id, |session| {
            session
                .tables_mut()
                .delete_row(kind, index)
                .map(|_| table_view(session.tables().table(kind)))
        })??;

    info!(session_id = %session_id, table = %kind, row = index, "Row deleted");
    Ok(Json(response))
}
