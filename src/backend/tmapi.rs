//! Devkit backend over the vendor target-manager API
//!
//! The target-manager tooling ships as proprietary vendor software, so this
//! backend is only the contract surface the rest of the crate talks to.
//! Connection state is tracked locally; memory traffic is a placeholder
//! until the vendor library is linked in (reads yield zeroed buffers, the
//! transport's undefined-bytes case).

use crate::backend::MemoryBackend;
use crate::core::types::{GuestAddress, MemoryResult};
use std::fmt;
use tracing::debug;

/// Backend forwarding to the devkit target-manager API
pub struct TmapiBackend {
    connected: bool,
}

impl TmapiBackend {
    /// Creates a disconnected devkit backend
    pub fn new() -> Self {
        TmapiBackend { connected: false }
    }
}

impl Default for TmapiBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBackend for TmapiBackend {
    fn name(&self) -> &'static str {
        "TMAPI"
    }

    fn connect(&mut self) -> bool {
        debug!("connecting to devkit via target manager");
        self.connected = true;
        self.connected
    }

    fn disconnect(&mut self) {
        if self.connected {
            debug!("disconnecting from devkit");
            self.connected = false;
        }
    }

    fn is_connected(&self) -> bool {
        self.connected
    }

    fn read_raw(&self, _address: GuestAddress, length: usize) -> MemoryResult<Vec<u8>> {
        Ok(vec![0u8; length])
    }

    fn write_raw(&self, _address: GuestAddress, _data: &[u8]) -> MemoryResult<()> {
        Ok(())
    }
}

impl fmt::Display for TmapiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[TMAPI] - Connected: {}", self.connected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut backend = TmapiBackend::new();
        assert!(!backend.is_connected());

        assert!(backend.connect());
        assert!(backend.is_connected());

        backend.disconnect();
        assert!(!backend.is_connected());

        // Double disconnect stays quiet
        backend.disconnect();
        assert!(!backend.is_connected());
    }

    #[test]
    fn test_placeholder_reads_are_zeroed() {
        let mut backend = TmapiBackend::new();
        backend.connect();

        let bytes = backend.read_raw(GuestAddress::new(0x1000), 8).unwrap();
        assert_eq!(bytes, vec![0u8; 8]);

        assert!(backend.write_raw(GuestAddress::new(0x1000), &[1, 2, 3]).is_ok());
    }
}
