//! Core domain types and logic.

pub mod error;
pub mod numeric;
pub mod position;
pub mod reporting;
pub mod security;
pub mod transaction;
