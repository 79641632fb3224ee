//! Process information type used during target discovery

use serde::{Deserialize, Serialize};
use std::fmt;

/// Basic information about a running process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessInfo {
    /// Process ID
    pub pid: u32,
    /// Executable name as reported by the OS
    pub name: String,
}

impl ProcessInfo {
    /// Creates a new ProcessInfo
    pub fn new(pid: u32, name: String) -> Self {
        ProcessInfo { pid, name }
    }

    /// Checks whether this process matches a target name.
    ///
    /// Matching is case-insensitive and tolerates a trailing `.exe` on the
    /// reported name, so looking up "rpcs3" finds "rpcs3.exe" on Windows.
    pub fn matches_name(&self, wanted: &str) -> bool {
        if self.name.eq_ignore_ascii_case(wanted) {
            return true;
        }

        // Compare as bytes: process names are arbitrary UTF-8, so splitting
        // the str four bytes from the end could land inside a character
        let name = self.name.as_bytes();
        if name.len() > 4 && name[name.len() - 4..].eq_ignore_ascii_case(b".exe") {
            return name[..name.len() - 4].eq_ignore_ascii_case(wanted.as_bytes());
        }

        false
    }
}

impl fmt::Display for ProcessInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (PID {})", self.name, self.pid)
    }
}
