//! Target process discovery and handle management
//!
//! Safe abstractions for finding a target process by name and holding an
//! open handle to it for cross-process memory access.

pub mod enumerator;
pub mod handle;

pub use enumerator::{enumerate_processes, find_by_name};
pub use handle::ProcessHandle;
