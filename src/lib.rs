//! ytdroi: annualized year-to-date return on investment of an account.
//!
//! Hexagonal architecture: domain logic in [`domain`], collaborator traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod ports;
