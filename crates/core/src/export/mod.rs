//! Export encoders for budget tables.
//!
//! CSV is available for every table; PDF rendering exists only for the
//! Federal SF-424A-style table. Both are pure, synchronous transformations
//! of current in-memory state.

pub mod csv;
pub mod error;
pub mod pdf;

pub use error::ExportError;
