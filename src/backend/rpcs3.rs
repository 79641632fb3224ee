//! Memory backend against a local RPCS3 emulator process
//!
//! RPCS3 maps the emulated console's memory into its own virtual address
//! space at fixed offsets, so reaching guest memory from outside is a matter
//! of finding the process, opening it for read/write, and translating guest
//! addresses into the emulator's layout before each OS-level access.

use crate::backend::MemoryBackend;
use crate::core::types::{GuestAddress, MemoryError, MemoryResult};
use crate::process::{self, ProcessHandle};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Default process name the backend attaches to
pub const DEFAULT_PROCESS_NAME: &str = "rpcs3";

/// Where the emulator maps guest memory inside its own address space.
///
/// These offsets were observed on a specific RPCS3 build: the region below
/// `low_boundary` (console low memory) and the rest (main memory) are mapped
/// at different host bases. They are transport parameters, not console
/// constants, and other builds may need different values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmulatorLayout {
    /// Guest addresses strictly below this use `low_base`
    pub low_boundary: u32,
    /// Host base offset for the low-memory region
    pub low_base: u64,
    /// Host base offset for main memory
    pub main_base: u64,
}

impl Default for EmulatorLayout {
    fn default() -> Self {
        EmulatorLayout {
            low_boundary: 0x0079_2000,
            low_base: 0x4_0000_0000,
            main_base: 0x3_0000_0000,
        }
    }
}

impl EmulatorLayout {
    /// Translates a guest address into the emulator's host address space
    pub fn translate(&self, address: GuestAddress) -> u64 {
        let guest = u64::from(address.as_u32());
        if address.as_u32() < self.low_boundary {
            guest + self.low_base
        } else {
            guest + self.main_base
        }
    }
}

/// Backend that reads and writes a running RPCS3 process's memory
pub struct Rpcs3Backend {
    process_name: String,
    layout: EmulatorLayout,
    handle: Option<ProcessHandle>,
    connected: bool,
}

impl Rpcs3Backend {
    /// Creates a backend targeting the default "rpcs3" process
    pub fn new() -> Self {
        Self::with_process_name(DEFAULT_PROCESS_NAME)
    }

    /// Creates a backend targeting a custom process name
    pub fn with_process_name(name: impl Into<String>) -> Self {
        Rpcs3Backend {
            process_name: name.into(),
            layout: EmulatorLayout::default(),
            handle: None,
            connected: false,
        }
    }

    /// Creates a backend with an explicit memory layout
    pub fn with_layout(name: impl Into<String>, layout: EmulatorLayout) -> Self {
        Rpcs3Backend {
            process_name: name.into(),
            layout,
            handle: None,
            connected: false,
        }
    }

    /// The process name this backend attaches to
    pub fn process_name(&self) -> &str {
        &self.process_name
    }

    /// The memory layout used for address translation
    pub fn layout(&self) -> EmulatorLayout {
        self.layout
    }

    fn handle(&self) -> MemoryResult<&ProcessHandle> {
        self.handle
            .as_ref()
            .filter(|_| self.connected)
            .ok_or_else(|| MemoryError::InvalidHandle("backend is not connected".to_string()))
    }
}

impl Default for Rpcs3Backend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend for Rpcs3Backend {
    fn name(&self) -> &'static str {
        "RPCS3"
    }

    fn connect(&mut self) -> bool {
        // Reconnecting replaces any live handle
        if self.connected {
            self.disconnect();
        }

        let info = match process::find_by_name(&self.process_name) {
            Ok(Some(info)) => info,
            Ok(None) => {
                warn!(process = %self.process_name, "target process not found");
                return false;
            }
            Err(err) => {
                warn!(process = %self.process_name, error = %err, "process lookup failed");
                return false;
            }
        };

        match ProcessHandle::open_for_read_write(info.pid) {
            Ok(handle) if handle.is_valid() => {
                debug!(process = %info, "attached to emulator process");
                self.handle = Some(handle);
                self.connected = true;
                true
            }
            Ok(_) => {
                warn!(process = %info, "opened handle is invalid");
                false
            }
            Err(err) => {
                warn!(process = %info, error = %err, "failed to open process");
                false
            }
        }
    }

    fn disconnect(&mut self) {
        if self.connected {
            debug!(process = %self.process_name, "detaching from emulator process");
            // Dropping the handle releases the OS resource
            self.handle = None;
            self.connected = false;
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn read_raw(&self, address: GuestAddress, length: usize) -> MemoryResult<Vec<u8>> {
        let handle = self.handle()?;
        let host = self.layout.translate(address);

        let mut buffer = vec![0u8; length];
        let transferred = handle.read_memory(host, &mut buffer)?;
        if transferred != length {
            return Err(MemoryError::short_transfer(address, length, transferred));
        }

        Ok(buffer)
    }

    fn write_raw(&self, address: GuestAddress, data: &[u8]) -> MemoryResult<()> {
        let handle = self.handle()?;
        let host = self.layout.translate(address);

        let transferred = handle.write_memory(host, data)?;
        if transferred != data.len() {
            return Err(MemoryError::short_transfer(address, data.len(), transferred));
        }

        Ok(())
    }
}

impl fmt::Display for Rpcs3Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[RPCS3] - Connected: {}", self.connected)
    }
}
