//! Shared type definitions.

pub mod money;

pub use money::{format_amount, format_usd};
