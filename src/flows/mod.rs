//! Flows module - Batch jobs and the driver that runs them
//!
//! Provides:
//! - batch: Discovery → read → tokenize → compute → report, shared by all jobs
//! - convert: Decimal to binary/hexadecimal
//! - stats: Mean, median, mode, variance, standard deviation
//! - wordcount: Word frequencies

pub mod batch;
pub mod convert;
pub mod stats;
pub mod wordcount;
