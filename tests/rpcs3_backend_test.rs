//! Integration tests for the RPCS3 backend lifecycle
//!
//! Attaching to an emulator needs one running, so these tests exercise the
//! lifecycle against processes that always exist (or never do) instead.

use ps3mem::{GuestAddress, MemoryBackend, MemoryError, Rpcs3Backend};

#[test]
fn connect_to_missing_process_is_soft_failure() {
    let mut backend = Rpcs3Backend::with_process_name("no-such-emulator-anywhere");

    assert!(!backend.connect());
    assert!(!backend.is_connected());

    // Still usable: a second attempt behaves the same
    assert!(!backend.connect());
    assert!(!backend.is_connected());
}

#[test]
fn disconnect_without_connect_is_a_noop() {
    let mut backend = Rpcs3Backend::new();
    backend.disconnect();
    backend.disconnect();
    assert!(!backend.is_connected());
}

#[test]
fn typed_read_while_disconnected_is_hard_failure() {
    let backend = Rpcs3Backend::new();
    let result = backend.read_u32(GuestAddress::new(0x0010_0000));
    assert!(matches!(result, Err(MemoryError::InvalidHandle(_))));
}

#[cfg(target_os = "linux")]
mod live_process {
    use super::*;
    use std::process::{Child, Command};

    struct ChildGuard(Child);

    impl Drop for ChildGuard {
        fn drop(&mut self) {
            let _ = self.0.kill();
            let _ = self.0.wait();
        }
    }

    #[test]
    fn attach_to_live_process_by_name() {
        let child = Command::new("sleep").arg("30").spawn().unwrap();
        let _guard = ChildGuard(child);

        let mut backend = Rpcs3Backend::with_process_name("sleep");
        assert!(backend.connect());
        assert!(backend.is_connected());

        // Reads go through translation into an address range a plain
        // process does not map, so the transport must report a failure
        // rather than fabricate data.
        let result = backend.read_u32(GuestAddress::new(0x0010_0000));
        assert!(result.is_err());

        backend.disconnect();
        assert!(!backend.is_connected());
        backend.disconnect();
        assert!(!backend.is_connected());
    }

    #[test]
    fn reconnect_replaces_existing_attachment() {
        let child = Command::new("sleep").arg("30").spawn().unwrap();
        let _guard = ChildGuard(child);

        let mut backend = Rpcs3Backend::with_process_name("sleep");
        assert!(backend.connect());

        // Connecting again tears down the old handle first
        assert!(backend.connect());
        assert!(backend.is_connected());
    }
}
