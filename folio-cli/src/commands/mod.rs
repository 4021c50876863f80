//! Command implementations for folioctl

pub mod serve;

// Re-export main dispatcher functions for flat access from main.rs
pub use serve::run_serve;
