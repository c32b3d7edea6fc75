//! Backends module - File system access
//!
//! Provides:
//! - scan: Input discovery with walkdir

pub mod scan;
