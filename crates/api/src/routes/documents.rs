//! Program document upload routes.
//!
//! Uploads are constrained to PDF content. Only the placeholder metadata
//! is kept; the file body is read for validation and then discarded.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::post,
};
use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use crate::{AppState, error::ApiError};
use crate::routes::sessions::{DocumentResponse, document_view};
use budgetgen_core::session::{DocumentKind, DocumentSlot};
use budgetgen_shared::AppError;

/// Creates the document upload routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/sessions/{session_id}/documents/{document}",
        post(upload_document),
    )
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> ApiError {
    AppError::Validation(format!("Malformed multipart upload: {err}")).into()
}

/// POST `/sessions/{session_id}/documents/{document}`
/// Register an uploaded program document.
async fn upload_document(
    State(state): State<AppState>,
    Path((session_id, document)): Path<(Uuid, String)>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<DocumentResponse>), ApiError> {
    let kind: DocumentKind = document.parse()?;

    let mut slot: Option<DocumentSlot> = None;
    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let Some(filename) = field.file_name().map(ToString::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field.bytes().await.map_err(bad_multipart)?;
        slot = Some(DocumentSlot {
            filename,
            content_type,
            size_bytes: data.len() as u64,
            uploaded_at: Utc::now(),
        });
        break;
    }

    let slot = slot.ok_or_else(|| {
        AppError::Validation("Multipart upload must include a file field".to_string())
    })?;
    let response = document_view(&slot);
    let max_file_size = state.config.upload.max_file_size;

    state
        .sessions
        .with_session_mut(session_id, |session| {
            session.attach_document(kind, slot, max_file_size)
        })??;

    info!(
        session_id = %session_id,
        document = %kind,
        filename = %response.filename,
        size_bytes = response.size_bytes,
        "Document registered"
    );
    Ok((StatusCode::CREATED, Json(response)))
}
