//! Remote memory inspection and mutation for PS3 targets
//!
//! Attaches to a running RPCS3 emulator process (or a devkit via the
//! target-manager API) and exposes its guest memory by 32-bit address:
//! typed big-endian reads and writes, bounded string extraction, and
//! multi-hop pointer resolution.
//!
//! ```no_run
//! use ps3mem::{BackendKind, GuestAddress, Ps3Client};
//!
//! # fn main() -> ps3mem::MemoryResult<()> {
//! let mut client = Ps3Client::with_backend(BackendKind::Rpcs3)?;
//! if client.connect()? {
//!     let health = client.read_f32(GuestAddress::new(0x0113_5F04))?;
//!     let base = client.get_pointer(GuestAddress::new(0x0110_0000), &[0x48, -0x4])?;
//!     client.write_u32(base, health as u32 + 100)?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod backend;
pub mod client;
pub mod config;
pub mod core;
pub mod process;
pub mod sys;

// Re-export main types
pub use crate::backend::{BackendKind, EmulatorLayout, MemoryBackend, Rpcs3Backend, TmapiBackend};
pub use crate::client::Ps3Client;
pub use crate::config::{Config, ConfigError};
pub use crate::core::types::{GuestAddress, MemoryError, MemoryResult, ProcessId, ProcessInfo};
