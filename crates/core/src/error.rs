//! Error types for tategaki.
//!
//! The layout algorithms themselves are total; errors only come from the
//! edges of the crate (parameter validation, converting raw upstream records,
//! page lookups and thread pool setup).

use thiserror::Error;

/// Primary error type for reading-order operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TategakiError {
    #[error("invalid {name} threshold: {value} (expected a finite value in (0, 1])")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("bounding box needs 4 coordinates, got {0}")]
    InvalidCoordinates(usize),

    #[error("polygon has no points")]
    EmptyPolygon,

    #[error("page {0} not found")]
    PageNotFound(u32),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Convenience Result type alias for TategakiError.
pub type Result<T> = std::result::Result<T, TategakiError>;
