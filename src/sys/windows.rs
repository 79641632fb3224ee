//! Kernel32 bindings for process and memory operations

use crate::core::types::{MemoryError, MemoryResult};
use std::ptr;
use winapi::shared::minwindef::{FALSE, LPCVOID, LPVOID};
use winapi::um::handleapi::CloseHandle;
use winapi::um::memoryapi::{ReadProcessMemory, WriteProcessMemory};
use winapi::um::processthreadsapi::OpenProcess;
use winapi::um::winnt::{HANDLE, PROCESS_ALL_ACCESS};

/// Safe wrapper around a raw process HANDLE with RAII cleanup
pub struct Handle {
    handle: HANDLE,
}

impl Handle {
    /// Wraps a raw handle
    pub fn new(handle: HANDLE) -> Self {
        Handle { handle }
    }

    /// Creates a null handle
    pub fn null() -> Self {
        Handle {
            handle: ptr::null_mut(),
        }
    }

    /// Checks if the handle is null
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// Returns the raw handle
    pub fn raw(&self) -> HANDLE {
        self.handle
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            // Ignore errors on cleanup
            unsafe {
                CloseHandle(self.handle);
            }
        }
    }
}

// HANDLEs are process-local
unsafe impl Send for Handle {}

/// Opens a process with full read/write access
pub fn open_process_all_access(pid: u32) -> MemoryResult<Handle> {
    unsafe {
        let handle = OpenProcess(PROCESS_ALL_ACCESS, FALSE, pid);
        if handle.is_null() {
            Err(MemoryError::Io(std::io::Error::last_os_error()))
        } else {
            Ok(Handle::new(handle))
        }
    }
}

/// Reads from another process's memory, returning the bytes transferred
pub fn read_process_memory(
    handle: &Handle,
    address: u64,
    buffer: &mut [u8],
) -> MemoryResult<usize> {
    let mut bytes_read = 0usize;

    let result = unsafe {
        ReadProcessMemory(
            handle.raw(),
            address as usize as LPCVOID,
            buffer.as_mut_ptr() as LPVOID,
            buffer.len(),
            &mut bytes_read,
        )
    };

    if result == FALSE {
        Err(MemoryError::read_failed(
            format!("0x{:X}", address),
            std::io::Error::last_os_error().to_string(),
        ))
    } else {
        Ok(bytes_read)
    }
}

/// Writes into another process's memory, returning the bytes transferred
pub fn write_process_memory(handle: &Handle, address: u64, data: &[u8]) -> MemoryResult<usize> {
    let mut bytes_written = 0usize;

    let result = unsafe {
        WriteProcessMemory(
            handle.raw(),
            address as usize as LPVOID,
            data.as_ptr() as LPCVOID,
            data.len(),
            &mut bytes_written,
        )
    };

    if result == FALSE {
        Err(MemoryError::write_failed(
            format!("0x{:X}", address),
            std::io::Error::last_os_error().to_string(),
        ))
    } else {
        Ok(bytes_written)
    }
}
