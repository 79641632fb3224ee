//! Core module containing fundamental types for ps3mem
//!
//! Provides the building blocks used throughout the crate: guest address
//! handling, byte-order conversion, process information, and error types.

pub mod endian;
pub mod types;

// Re-export commonly used types for convenience
pub use types::{GuestAddress, MemoryError, MemoryResult, ProcessInfo};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");
