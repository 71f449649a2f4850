//! Error handling and extraction statistics.
//!
//! This module provides:
//! - Terminal extraction errors and their kinds
//! - The transport error reported by document fetchers
//! - Skip reasons for candidates recovered locally during parsing
//! - Skip counters for one extraction

mod stats;
mod types;

// Re-export public API
pub use stats::ExtractionStats;
pub use types::{
    ExtractionError, FailureKind, InitializationError, SkipReason, TransportError,
};
