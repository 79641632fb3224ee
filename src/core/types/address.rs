//! Guest address wrapper type

use serde::{Deserialize, Serialize};
use std::fmt;

/// A 32-bit offset into the target's guest address space.
///
/// This is never a host pointer. Backends translate it into their own
/// transport-specific addressing before touching the target process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GuestAddress(pub u32);

impl GuestAddress {
    /// Creates a new guest address
    pub const fn new(value: u32) -> Self {
        GuestAddress(value)
    }

    /// Returns the raw u32 value
    pub const fn as_u32(&self) -> u32 {
        self.0
    }

    /// Adds a signed offset to the address, wrapping on overflow
    pub const fn offset(&self, offset: i32) -> Self {
        GuestAddress(self.0.wrapping_add_signed(offset))
    }
}

impl fmt::Display for GuestAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl fmt::LowerHex for GuestAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08x}", self.0)
    }
}

impl fmt::UpperHex for GuestAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

impl From<u32> for GuestAddress {
    fn from(value: u32) -> Self {
        GuestAddress::new(value)
    }
}
