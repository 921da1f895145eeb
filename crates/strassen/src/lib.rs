//! Strassen-rs library: application logic for the Strassen demo binary.

pub mod app;
pub mod config;
pub mod errors;
