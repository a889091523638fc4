//! Session data types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::SessionError;
use crate::table::TableManager;

/// Accepted MIME type for program document uploads.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// The two program documents a user uploads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// The program design document.
    ProgramDesign,
    /// The statement of need document.
    StatementOfNeed,
}

impl DocumentKind {
    /// Both document kinds, in upload-form order.
    pub const ALL: [Self; 2] = [Self::ProgramDesign, Self::StatementOfNeed];

    /// URL/identifier slug for this document.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::ProgramDesign => "program-design",
            Self::StatementOfNeed => "statement-of-need",
        }
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "program-design" => Ok(Self::ProgramDesign),
            "statement-of-need" => Ok(Self::StatementOfNeed),
            _ => Err(SessionError::UnknownDocument(s.to_string())),
        }
    }
}

/// Placeholder for one uploaded document.
///
/// Only metadata is held; the file content is observed (for validation)
/// and discarded. Nothing is ever parsed out of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSlot {
    /// Original filename as submitted.
    pub filename: String,
    /// MIME type as submitted.
    pub content_type: String,
    /// Upload size in bytes.
    pub size_bytes: u64,
    /// When the upload was registered.
    pub uploaded_at: DateTime<Utc>,
}

/// Organization fields rendered into the Federal PDF header.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationInfo {
    /// Organization name.
    pub name: Option<String>,
    /// Program title.
    pub program_title: Option<String>,
}

/// One user's in-memory interaction state.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    organization: OrganizationInfo,
    tables: TableManager,
    program_design: Option<DocumentSlot>,
    statement_of_need: Option<DocumentSlot>,
    generated: bool,
}

impl Session {
    /// Creates a fresh session with empty tables and no uploads.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            organization: OrganizationInfo::default(),
            tables: TableManager::new(),
            program_design: None,
            statement_of_need: None,
            generated: false,
        }
    }

    /// Session ID.
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Organization info for PDF headers and display.
    #[must_use]
    pub const fn organization(&self) -> &OrganizationInfo {
        &self.organization
    }

    /// Replaces the organization info.
    pub fn set_organization(&mut self, organization: OrganizationInfo) {
        self.organization = organization;
    }

    /// The placeholder for one document kind, if uploaded.
    #[must_use]
    pub const fn document(&self, kind: DocumentKind) -> Option<&DocumentSlot> {
        match kind {
            DocumentKind::ProgramDesign => self.program_design.as_ref(),
            DocumentKind::StatementOfNeed => self.statement_of_need.as_ref(),
        }
    }

    /// Registers an upload placeholder after validating it.
    ///
    /// A re-upload of the same kind replaces the previous placeholder.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::InvalidContentType` unless the media type is
    /// `application/pdf`, and `SessionError::FileTooLarge` when the upload
    /// exceeds `max_file_size`. The slot is unchanged on error.
    pub fn attach_document(
        &mut self,
        kind: DocumentKind,
        slot: DocumentSlot,
        max_file_size: u64,
    ) -> Result<(), SessionError> {
        let media_type = slot
            .content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim();
        if !media_type.eq_ignore_ascii_case(PDF_CONTENT_TYPE) {
            return Err(SessionError::InvalidContentType(slot.content_type));
        }
        if slot.size_bytes > max_file_size {
            return Err(SessionError::FileTooLarge {
                size: slot.size_bytes,
                limit: max_file_size,
            });
        }

        match kind {
            DocumentKind::ProgramDesign => self.program_design = Some(slot),
            DocumentKind::StatementOfNeed => self.statement_of_need = Some(slot),
        }
        Ok(())
    }

    /// True once both program documents are present.
    #[must_use]
    pub const fn documents_ready(&self) -> bool {
        self.program_design.is_some() && self.statement_of_need.is_some()
    }

    /// Seeds the three tables with sample data.
    ///
    /// This is the simulated-extraction step: it requires both documents
    /// to be present but never reads them. Safe to call repeatedly; seeded
    /// tables are left alone.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::DocumentsMissing` until both documents have
    /// been uploaded.
    pub fn generate(&mut self) -> Result<(), SessionError> {
        if !self.documents_ready() {
            return Err(SessionError::DocumentsMissing);
        }
        self.tables.seed_all();
        self.generated = true;
        Ok(())
    }

    /// True once budgets have been generated for this session.
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        self.generated
    }

    /// Read access to the table manager.
    #[must_use]
    pub const fn tables(&self) -> &TableManager {
        &self.tables
    }

    /// Mutable access to the table manager.
    pub const fn tables_mut(&mut self) -> &mut TableManager {
        &mut self.tables
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
