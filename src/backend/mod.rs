//! Memory backend contract and implementations
//!
//! A backend owns the connection to one target (emulator process or devkit)
//! and exposes typed reads and writes over its guest address space. The
//! typed operations are provided on top of the two raw primitives each
//! backend supplies, so every backend gets identical encoding, string
//! scanning, and pointer resolution behavior.

pub mod rpcs3;
pub mod tmapi;

pub use rpcs3::{EmulatorLayout, Rpcs3Backend};
pub use tmapi::TmapiBackend;

use crate::core::endian;
use crate::core::types::{GuestAddress, MemoryError, MemoryResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Block size used when scanning for a string's null terminator
pub const STRING_BLOCK_SIZE: usize = 40;

/// Cumulative scan limit before a string read is abandoned
pub const STRING_SCAN_LIMIT: usize = 1024;

/// The available backend kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// RPCS3 emulator process on the local machine
    Rpcs3,
    /// Devkit reachable through the target-manager API
    Tmapi,
    /// Console-control API; no implementation is wired up
    Ccapi,
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Rpcs3 => "rpcs3",
            BackendKind::Tmapi => "tmapi",
            BackendKind::Ccapi => "ccapi",
        };
        write!(f, "{}", name)
    }
}

fn to_array<const N: usize>(address: GuestAddress, bytes: Vec<u8>) -> MemoryResult<[u8; N]> {
    let actual = bytes.len();
    bytes
        .try_into()
        .map_err(|_| MemoryError::short_transfer(address, N, actual))
}

/// Capability contract every memory backend satisfies.
///
/// `connect` reports failure through its return value and leaves the backend
/// disconnected; every other operation surfaces failures as [`MemoryError`].
pub trait MemoryBackend {
    /// Backend identifier for logs and display
    fn name(&self) -> &'static str;

    /// Attempts attachment to the target. Never fails hard: an unreachable
    /// target yields `false` and a disconnected backend.
    fn connect(&mut self) -> bool;

    /// Releases the connection. Idempotent; a no-op when not connected.
    fn disconnect(&mut self);

    /// Current attachment state
    fn is_connected(&self) -> bool;

    /// Reads `length` raw bytes starting at a guest address
    fn read_raw(&self, address: GuestAddress, length: usize) -> MemoryResult<Vec<u8>>;

    /// Writes raw bytes starting at a guest address
    fn write_raw(&self, address: GuestAddress, data: &[u8]) -> MemoryResult<()>;

    fn read_i8(&self, address: GuestAddress) -> MemoryResult<i8> {
        let [b] = to_array(address, self.read_raw(address, 1)?)?;
        Ok(b as i8)
    }

    fn read_u8(&self, address: GuestAddress) -> MemoryResult<u8> {
        let [b] = to_array(address, self.read_raw(address, 1)?)?;
        Ok(b)
    }

    /// Reads a boolean: any nonzero byte decodes as `true`
    fn read_bool(&self, address: GuestAddress) -> MemoryResult<bool> {
        Ok(self.read_u8(address)? != 0)
    }

    fn read_i16(&self, address: GuestAddress) -> MemoryResult<i16> {
        let bytes = to_array(address, self.read_raw(address, 2)?)?;
        Ok(endian::decode(bytes, i16::from_ne_bytes))
    }

    fn read_u16(&self, address: GuestAddress) -> MemoryResult<u16> {
        let bytes = to_array(address, self.read_raw(address, 2)?)?;
        Ok(endian::decode(bytes, u16::from_ne_bytes))
    }

    fn read_i32(&self, address: GuestAddress) -> MemoryResult<i32> {
        let bytes = to_array(address, self.read_raw(address, 4)?)?;
        Ok(endian::decode(bytes, i32::from_ne_bytes))
    }

    fn read_u32(&self, address: GuestAddress) -> MemoryResult<u32> {
        let bytes = to_array(address, self.read_raw(address, 4)?)?;
        Ok(endian::decode(bytes, u32::from_ne_bytes))
    }

    fn read_i64(&self, address: GuestAddress) -> MemoryResult<i64> {
        let bytes = to_array(address, self.read_raw(address, 8)?)?;
        Ok(endian::decode(bytes, i64::from_ne_bytes))
    }

    fn read_u64(&self, address: GuestAddress) -> MemoryResult<u64> {
        let bytes = to_array(address, self.read_raw(address, 8)?)?;
        Ok(endian::decode(bytes, u64::from_ne_bytes))
    }

    fn read_f32(&self, address: GuestAddress) -> MemoryResult<f32> {
        let bytes = to_array(address, self.read_raw(address, 4)?)?;
        Ok(endian::decode(bytes, f32::from_ne_bytes))
    }

    fn read_f64(&self, address: GuestAddress) -> MemoryResult<f64> {
        let bytes = to_array(address, self.read_raw(address, 8)?)?;
        Ok(endian::decode(bytes, f64::from_ne_bytes))
    }

    /// Reads a raw byte buffer of the given length
    fn read_bytes(&self, address: GuestAddress, length: usize) -> MemoryResult<Vec<u8>> {
        self.read_raw(address, length)
    }

    /// Reads a null-terminated UTF-8 string.
    ///
    /// Memory is scanned in [`STRING_BLOCK_SIZE`] chunks until a null byte
    /// shows up; the text before it is returned without the terminator.
    /// Scanning past [`STRING_SCAN_LIMIT`] bytes without finding one fails
    /// with [`MemoryError::StringOverflow`], which bounds the cost of
    /// reading a corrupt or unterminated region.
    fn read_string(&self, address: GuestAddress) -> MemoryResult<String> {
        let mut collected = Vec::new();
        let mut scanned = 0usize;

        loop {
            let block = self.read_raw(address.offset(scanned as i32), STRING_BLOCK_SIZE)?;

            if let Some(null_pos) = block.iter().position(|&b| b == 0) {
                collected.extend_from_slice(&block[..null_pos]);
                return Ok(String::from_utf8(collected)?);
            }

            collected.extend_from_slice(&block);
            scanned += STRING_BLOCK_SIZE;

            if scanned > STRING_SCAN_LIMIT {
                return Err(MemoryError::string_overflow(address, STRING_SCAN_LIMIT));
            }
        }
    }

    fn write_i8(&self, address: GuestAddress, value: i8) -> MemoryResult<()> {
        self.write_raw(address, &[value as u8])
    }

    fn write_u8(&self, address: GuestAddress, value: u8) -> MemoryResult<()> {
        self.write_raw(address, &[value])
    }

    /// Writes a boolean as a single 1/0 byte
    fn write_bool(&self, address: GuestAddress, value: bool) -> MemoryResult<()> {
        self.write_u8(address, u8::from(value))
    }

    fn write_i16(&self, address: GuestAddress, value: i16) -> MemoryResult<()> {
        self.write_raw(address, &endian::encode(value, i16::to_ne_bytes))
    }

    fn write_u16(&self, address: GuestAddress, value: u16) -> MemoryResult<()> {
        self.write_raw(address, &endian::encode(value, u16::to_ne_bytes))
    }

    fn write_i32(&self, address: GuestAddress, value: i32) -> MemoryResult<()> {
        self.write_raw(address, &endian::encode(value, i32::to_ne_bytes))
    }

    fn write_u32(&self, address: GuestAddress, value: u32) -> MemoryResult<()> {
        self.write_raw(address, &endian::encode(value, u32::to_ne_bytes))
    }

    fn write_i64(&self, address: GuestAddress, value: i64) -> MemoryResult<()> {
        self.write_raw(address, &endian::encode(value, i64::to_ne_bytes))
    }

    fn write_u64(&self, address: GuestAddress, value: u64) -> MemoryResult<()> {
        self.write_raw(address, &endian::encode(value, u64::to_ne_bytes))
    }

    fn write_f32(&self, address: GuestAddress, value: f32) -> MemoryResult<()> {
        self.write_raw(address, &endian::encode(value, f32::to_ne_bytes))
    }

    fn write_f64(&self, address: GuestAddress, value: f64) -> MemoryResult<()> {
        self.write_raw(address, &endian::encode(value, f64::to_ne_bytes))
    }

    /// Writes a raw byte buffer
    fn write_bytes(&self, address: GuestAddress, data: &[u8]) -> MemoryResult<()> {
        self.write_raw(address, data)
    }

    /// Writes a string followed by a single null terminator.
    ///
    /// Overwriting a longer string leaves its stale tail beyond the new
    /// terminator; callers that care must clear the region themselves.
    fn write_string(&self, address: GuestAddress, value: &str) -> MemoryResult<()> {
        let mut bytes = value.as_bytes().to_vec();
        bytes.push(0);
        self.write_raw(address, &bytes)
    }

    /// Resolves a pointer chain.
    ///
    /// For each offset, left to right: read the u32 pointer stored at the
    /// current address, then add the signed offset (wrapping in the guest
    /// space). The address after the last offset is returned without being
    /// dereferenced. Nothing is cached; each call rereads the chain.
    fn get_pointer(&self, address: GuestAddress, offsets: &[i32]) -> MemoryResult<GuestAddress> {
        let mut current = address;
        for &offset in offsets {
            let base = self.read_u32(current)?;
            current = GuestAddress::new(base).offset(offset);
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_kind_display() {
        assert_eq!(BackendKind::Rpcs3.to_string(), "rpcs3");
        assert_eq!(BackendKind::Tmapi.to_string(), "tmapi");
        assert_eq!(BackendKind::Ccapi.to_string(), "ccapi");
    }

    #[test]
    fn test_to_array_rejects_short_buffer() {
        let addr = GuestAddress::new(0x1000);
        let result: MemoryResult<[u8; 4]> = to_array(addr, vec![1, 2]);
        match result.unwrap_err() {
            MemoryError::ShortTransfer {
                expected, actual, ..
            } => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 2);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_scan_constants() {
        // The scan limit is a whole number of blocks plus a remainder, so
        // the overflow check must trigger strictly after the limit
        assert_eq!(STRING_BLOCK_SIZE, 40);
        assert_eq!(STRING_SCAN_LIMIT, 1024);
    }
}
