//! Process enumeration and lookup by name

use crate::core::types::{MemoryResult, ProcessInfo};

/// Enumerate all running processes
#[cfg(windows)]
pub fn enumerate_processes() -> MemoryResult<Vec<ProcessInfo>> {
    use crate::core::types::MemoryError;
    use std::mem;
    use winapi::shared::minwindef::FALSE;
    use winapi::um::handleapi::{CloseHandle, INVALID_HANDLE_VALUE};
    use winapi::um::tlhelp32::{
        CreateToolhelp32Snapshot, Process32First, Process32Next, PROCESSENTRY32,
        TH32CS_SNAPPROCESS,
    };

    unsafe {
        let snapshot = CreateToolhelp32Snapshot(TH32CS_SNAPPROCESS, 0);
        if snapshot.is_null() || snapshot == INVALID_HANDLE_VALUE {
            return Err(MemoryError::Io(std::io::Error::last_os_error()));
        }

        let mut processes = Vec::new();
        let mut entry: PROCESSENTRY32 = mem::zeroed();
        entry.dwSize = mem::size_of::<PROCESSENTRY32>() as u32;

        let mut more = Process32First(snapshot, &mut entry);
        while more != FALSE {
            // Convert the executable name from the fixed-size i8 array
            let name = {
                let bytes = &entry.szExeFile;
                let null_pos = bytes.iter().position(|&c| c == 0).unwrap_or(bytes.len());
                let name_u8: Vec<u8> = bytes[..null_pos].iter().map(|&c| c as u8).collect();
                String::from_utf8_lossy(&name_u8).into_owned()
            };

            processes.push(ProcessInfo::new(entry.th32ProcessID, name));
            more = Process32Next(snapshot, &mut entry);
        }

        CloseHandle(snapshot);
        Ok(processes)
    }
}

/// Enumerate all running processes
#[cfg(target_os = "linux")]
pub fn enumerate_processes() -> MemoryResult<Vec<ProcessInfo>> {
    use std::fs;

    let mut processes = Vec::new();

    for entry in fs::read_dir("/proc")? {
        let entry = entry?;
        let file_name = entry.file_name();
        let Some(pid) = file_name.to_str().and_then(|s| s.parse::<u32>().ok()) else {
            continue;
        };

        // comm holds the executable name, newline-terminated; processes can
        // exit between the readdir and the read, so skip failures.
        let comm_path = entry.path().join("comm");
        let Ok(comm) = fs::read_to_string(comm_path) else {
            continue;
        };

        processes.push(ProcessInfo::new(pid, comm.trim_end().to_string()));
    }

    Ok(processes)
}

/// Find the first process matching the given name.
///
/// First match wins when several processes share the name, mirroring how
/// name-based attachment behaves for single-instance emulators.
pub fn find_by_name(name: &str) -> MemoryResult<Option<ProcessInfo>> {
    let processes = enumerate_processes()?;
    Ok(processes.into_iter().find(|p| p.matches_name(name)))
}
