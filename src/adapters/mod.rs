//! Concrete adapter implementations for ports.

pub mod clock_adapter;
pub mod csv_adapter;
pub mod env_config_adapter;
pub mod file_config_adapter;
pub mod memory_config_adapter;
pub mod price_table_adapter;
pub mod random_price_adapter;
