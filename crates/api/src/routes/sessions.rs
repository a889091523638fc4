//! Session lifecycle routes.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::{AppState, error::ApiError};
use budgetgen_core::session::{DocumentKind, DocumentSlot, OrganizationInfo, Session};
use budgetgen_core::table::TableKind;
use budgetgen_shared::types::format_amount;

/// Creates the session routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sessions", post(create_session))
        .route("/sessions/{session_id}", get(get_session))
        .route("/sessions/{session_id}", delete(delete_session))
        .route(
            "/sessions/{session_id}/organization",
            put(set_organization),
        )
        .route("/sessions/{session_id}/generate", post(generate_budgets))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body for setting organization info.
#[derive(Debug, Deserialize)]
pub struct OrganizationRequest {
    /// Organization name.
    pub organization_name: Option<String>,
    /// Program title.
    pub program_title: Option<String>,
}

/// Response for one uploaded-document placeholder.
#[derive(Debug, Serialize)]
pub struct DocumentResponse {
    /// Original filename.
    pub filename: String,
    /// MIME type.
    pub content_type: String,
    /// Upload size in bytes.
    pub size_bytes: u64,
    /// Upload timestamp (ISO 8601).
    pub uploaded_at: String,
}

/// Upload placeholders for both program documents.
#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
    /// Program Design document, if uploaded.
    pub program_design: Option<DocumentResponse>,
    /// Statement of Need document, if uploaded.
    pub statement_of_need: Option<DocumentResponse>,
}

/// Current totals of the three tables, for the summary tiles.
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    /// Annual operating total.
    pub operating: String,
    /// Program budget total.
    pub program: String,
    /// Federal budget total.
    pub federal: String,
}

/// Response for a session.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    /// Session ID.
    pub id: Uuid,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Organization name, if set.
    pub organization_name: Option<String>,
    /// Program title, if set.
    pub program_title: Option<String>,
    /// Upload placeholders.
    pub documents: DocumentsResponse,
    /// Whether budgets have been generated.
    pub generated: bool,
    /// Per-table totals with two-decimal amounts.
    pub totals: TotalsResponse,
}

// ============================================================================
// Helper Functions
// ============================================================================

pub(crate) fn document_view(slot: &DocumentSlot) -> DocumentResponse {
    DocumentResponse {
        filename: slot.filename.clone(),
        content_type: slot.content_type.clone(),
        size_bytes: slot.size_bytes,
        uploaded_at: slot.uploaded_at.to_rfc3339(),
    }
}

pub(crate) fn session_view(session: &Session) -> SessionResponse {
    let organization = session.organization();
    SessionResponse {
        id: session.id(),
        created_at: session.created_at().to_rfc3339(),
        organization_name: organization.name.clone(),
        program_title: organization.program_title.clone(),
        documents: DocumentsResponse {
            program_design: session
                .document(DocumentKind::ProgramDesign)
                .map(document_view),
            statement_of_need: session
                .document(DocumentKind::StatementOfNeed)
                .map(document_view),
        },
        generated: session.is_generated(),
        totals: TotalsResponse {
            operating: format_amount(session.tables().totals(TableKind::Operating)),
            program: format_amount(session.tables().totals(TableKind::Program)),
            federal: format_amount(session.tables().totals(TableKind::Federal)),
        },
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/sessions`
/// Create a fresh session with empty tables.
async fn create_session(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<SessionResponse>), ApiError> {
    let session_id = state.sessions.create();
    let response = state.sessions.with_session(session_id, session_view)?;

    info!(session_id = %session_id, "Session created");
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET `/sessions/{session_id}`
/// Current session view: documents, totals, generation state.
async fn get_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state.sessions.with_session(session_id, session_view)?;
    Ok(Json(response))
}

/// DELETE `/sessions/{session_id}`
/// Discard the session and everything it owns.
async fn delete_session(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.sessions.remove(session_id)?;
    info!(session_id = %session_id, "Session discarded");
    Ok(StatusCode::NO_CONTENT)
}

/// PUT `/sessions/{session_id}/organization`
/// Set the organization name and program title.
async fn set_organization(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(payload): Json<OrganizationRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state.sessions.with_session_mut(session_id, |session| {
        session.set_organization(OrganizationInfo {
            name: payload.organization_name,
            program_title: payload.program_title,
        });
        session_view(session)
    })?;
    Ok(Json(response))
}

/// POST `/sessions/{session_id}/generate`
/// Seed the three tables with sample budgets.
///
/// This is the simulated-extraction step: both documents must be present,
/// but neither is ever parsed.
async fn generate_budgets(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionResponse>, ApiError> {
    let response = state.sessions.with_session_mut(session_id, |session| {
        session.generate().map(|()| session_view(session))
    })??;

    info!(session_id = %session_id, "Budgets generated");
    Ok(Json(response))
}
