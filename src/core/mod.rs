//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Report model (ReportBlock, BatchSummary)
//! - Error types
//! - File reading
//! - Line tokenizers for integers, floats and words
//! - The report writer
//! - Common utilities

pub mod error;
pub mod file_reader;
pub mod model;
pub mod render;
pub mod tokenizer;
pub mod util;
