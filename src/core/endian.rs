//! Byte-order conversion between the target's wire format and the host.
//!
//! PS3 targets are big-endian (Cell PowerPC), so every multi-byte value
//! crossing the transport is big-endian on the wire. These helpers are
//! parameterized by the native-order converter for the width, which makes
//! `decode` and `encode` exact inverses on any host.

/// Converts a wire-order (big-endian) byte sequence to host order
pub fn to_host_order<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    if cfg!(target_endian = "little") {
        bytes.reverse();
    }
    bytes
}

/// Converts a host-order byte sequence to wire order (big-endian)
pub fn to_wire_order<const N: usize>(mut bytes: [u8; N]) -> [u8; N] {
    if cfg!(target_endian = "little") {
        bytes.reverse();
    }
    bytes
}

/// Decodes a wire-order byte sequence using a native-order converter
pub fn decode<T, const N: usize>(bytes: [u8; N], from_native: fn([u8; N]) -> T) -> T {
    from_native(to_host_order(bytes))
}

/// Encodes a value into wire-order bytes using a native-order converter
pub fn encode<T, const N: usize>(value: T, to_native: fn(T) -> [u8; N]) -> [u8; N] {
    to_wire_order(to_native(value))
}
