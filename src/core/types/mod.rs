//! Core type definitions for ps3mem
//!
//! Address wrappers, process information, and error types used
//! throughout the crate.

mod address;
mod error;
mod process_info;

// Re-export all public types
pub use address::GuestAddress;
pub use error::{MemoryError, MemoryResult};
pub use process_info::ProcessInfo;

// Common type aliases
pub type ProcessId = u32;
