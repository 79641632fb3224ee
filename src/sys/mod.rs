//! OS primitives for cross-process memory access
//!
//! All unsafe FFI calls are contained within this module. The contract with
//! the rest of the crate is small: open a target process, move byte buffers
//! in and out of its address space, release the handle.

#[cfg(target_os = "linux")]
pub mod linux;
#[cfg(windows)]
pub mod windows;
