//! Linux cross-process memory access via process_vm_readv/process_vm_writev
//!
//! Requires the same UID as the target or CAP_SYS_PTRACE. Unlike the
//! Windows path there is no handle to hold open; the PID is checked
//! against /proc when the target is opened.

use crate::core::types::{MemoryError, MemoryResult};
use std::path::Path;

/// Checks that a process with the given PID currently exists
pub fn process_exists(pid: u32) -> bool {
    Path::new(&format!("/proc/{}", pid)).exists()
}

/// Reads from another process's memory, returning the bytes transferred
pub fn read_process_memory(pid: u32, address: u64, buffer: &mut [u8]) -> MemoryResult<usize> {
    let local = libc::iovec {
        iov_base: buffer.as_mut_ptr() as *mut libc::c_void,
        iov_len: buffer.len(),
    };
    let remote = libc::iovec {
        iov_base: address as usize as *mut libc::c_void,
        iov_len: buffer.len(),
    };

    let transferred =
        unsafe { libc::process_vm_readv(pid as libc::pid_t, &local, 1, &remote, 1, 0) };

    if transferred < 0 {
        Err(MemoryError::read_failed(
            format!("0x{:X}", address),
            std::io::Error::last_os_error().to_string(),
        ))
    } else {
        Ok(transferred as usize)
    }
}

/// Writes into another process's memory, returning the bytes transferred
pub fn write_process_memory(pid: u32, address: u64, data: &[u8]) -> MemoryResult<usize> {
    let local = libc::iovec {
        iov_base: data.as_ptr() as *mut libc::c_void,
        iov_len: data.len(),
    };
    let remote = libc::iovec {
        iov_base: address as usize as *mut libc::c_void,
        iov_len: data.len(),
    };

    let transferred =
        unsafe { libc::process_vm_writev(pid as libc::pid_t, &local, 1, &remote, 1, 0) };

    if transferred < 0 {
        Err(MemoryError::write_failed(
            format!("0x{:X}", address),
            std::io::Error::last_os_error().to_string(),
        ))
    } else {
        Ok(transferred as usize)
    }
}
