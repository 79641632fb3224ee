//! Process handle with RAII semantics
//!
//! On Windows this owns an OpenProcess handle that is closed on drop. On
//! Linux the kernel addresses the target by PID, so there is no OS resource
//! to hold; the handle just records the PID it validated at open time.

use crate::core::types::{MemoryError, MemoryResult, ProcessId};
use crate::sys;
use std::fmt;

/// Handle to a target process opened for memory read/write
pub struct ProcessHandle {
    pid: ProcessId,
    #[cfg(windows)]
    handle: sys::windows::Handle,
}

impl ProcessHandle {
    /// Opens a process for reading and writing its memory
    #[cfg(windows)]
    pub fn open_for_read_write(pid: ProcessId) -> MemoryResult<Self> {
        let handle = sys::windows::open_process_all_access(pid)?;
        Ok(ProcessHandle { pid, handle })
    }

    /// Opens a process for reading and writing its memory
    #[cfg(target_os = "linux")]
    pub fn open_for_read_write(pid: ProcessId) -> MemoryResult<Self> {
        if !sys::linux::process_exists(pid) {
            return Err(MemoryError::ProcessNotFound(format!("PID {}", pid)));
        }
        Ok(ProcessHandle { pid })
    }

    /// Returns the process ID
    pub fn pid(&self) -> ProcessId {
        self.pid
    }

    /// Checks if the handle is still usable
    pub fn is_valid(&self) -> bool {
        #[cfg(windows)]
        {
            !self.handle.is_null()
        }
        #[cfg(target_os = "linux")]
        {
            sys::linux::process_exists(self.pid)
        }
    }

    /// Reads memory at a host address, returning the bytes transferred
    pub fn read_memory(&self, address: u64, buffer: &mut [u8]) -> MemoryResult<usize> {
        if !self.is_valid() {
            return Err(MemoryError::InvalidHandle(format!(
                "process {} is gone",
                self.pid
            )));
        }

        #[cfg(windows)]
        {
            sys::windows::read_process_memory(&self.handle, address, buffer)
        }
        #[cfg(target_os = "linux")]
        {
            sys::linux::read_process_memory(self.pid, address, buffer)
        }
    }

    /// Writes memory at a host address, returning the bytes transferred
    pub fn write_memory(&self, address: u64, data: &[u8]) -> MemoryResult<usize> {
        if !self.is_valid() {
            return Err(MemoryError::InvalidHandle(format!(
                "process {} is gone",
                self.pid
            )));
        }

        #[cfg(windows)]
        {
            sys::windows::write_process_memory(&self.handle, address, data)
        }
        #[cfg(target_os = "linux")]
        {
            sys::linux::write_process_memory(self.pid, address, data)
        }
    }
}

impl fmt::Debug for ProcessHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessHandle")
            .field("pid", &self.pid)
            .field("valid", &self.is_valid())
            .finish()
    }
}
