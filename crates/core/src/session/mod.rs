//! Session state and registry.
//!
//! A session is the in-memory lifetime of one user's interaction: it owns
//! the three budget tables, the two uploaded-document placeholders, and
//! the organization info rendered into the Federal PDF. Nothing is ever
//! persisted; dropping the session discards all of it.

pub mod error;
pub mod store;
pub mod types;

pub use error::SessionError;
pub use store::SessionStore;
pub use types::{DocumentKind, DocumentSlot, OrganizationInfo, Session};
