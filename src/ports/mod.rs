//! Collaborator traits consumed by the domain.

pub mod config_port;
pub mod date_port;
pub mod price_port;
