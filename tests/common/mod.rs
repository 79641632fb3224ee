//! Shared test backend over an in-process byte buffer
//!
//! Implements the backend contract against plain memory so the typed
//! encode/decode, string scanning, and pointer resolution paths can be
//! exercised without a live emulator. Guest addresses index the buffer
//! directly; there is no address translation here.

// Each test binary uses a different slice of this helper
#![allow(dead_code)]

use ps3mem::{GuestAddress, MemoryBackend, MemoryError, MemoryResult};
use std::cell::RefCell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

pub const MOCK_MEMORY_SIZE: usize = 64 * 1024;

pub struct MockBackend {
    memory: RefCell<Vec<u8>>,
    connected: Arc<AtomicBool>,
}

impl MockBackend {
    pub fn new() -> Self {
        MockBackend {
            memory: RefCell::new(vec![0u8; MOCK_MEMORY_SIZE]),
            connected: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Handle on the connection flag, for observing the backend after the
    /// client has taken ownership of it
    pub fn connected_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.connected)
    }

    /// Fills a region with a byte value, bypassing the contract
    pub fn fill(&self, address: GuestAddress, value: u8, length: usize) {
        let start = address.as_u32() as usize;
        let mut memory = self.memory.borrow_mut();
        memory[start..start + length].fill(value);
    }

    fn check_bounds(&self, address: GuestAddress, length: usize) -> MemoryResult<usize> {
        let start = address.as_u32() as usize;
        if start + length > MOCK_MEMORY_SIZE {
            return Err(MemoryError::read_failed(address, "out of mock memory"));
        }
        Ok(start)
    }
}

impl MemoryBackend for MockBackend {
    fn name(&self) -> &'static str {
        "Mock"
    }

    fn connect(&mut self) -> bool {
        self.connected.store(true, Ordering::SeqCst);
        true
    }

    fn disconnect(&mut self) {
        self.connected.store(false, Ordering::SeqCst);
    }

    fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    fn read_raw(&self, address: GuestAddress, length: usize) -> MemoryResult<Vec<u8>> {
        let start = self.check_bounds(address, length)?;
        Ok(self.memory.borrow()[start..start + length].to_vec())
    }

    fn write_raw(&self, address: GuestAddress, data: &[u8]) -> MemoryResult<()> {
        let start = self.check_bounds(address, data.len())?;
        self.memory.borrow_mut()[start..start + data.len()].copy_from_slice(data);
        Ok(())
    }
}
