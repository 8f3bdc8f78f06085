//! CLI library components for the RFID converter.

pub mod config;
pub mod logging;
pub mod pipeline;
pub mod types;
