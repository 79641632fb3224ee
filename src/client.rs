//! Client facade over the selected memory backend
//!
//! Owns exactly one backend instance and forwards every contract call to
//! it. Backends can be swapped at runtime; the previous one is disconnected
//! first, so two backends are never connected through the same client.

use crate::backend::{BackendKind, MemoryBackend, Rpcs3Backend, TmapiBackend};
use crate::config::Config;
use crate::core::types::{GuestAddress, MemoryError, MemoryResult};
use tracing::debug;

/// Facade that routes memory operations to the active backend.
///
/// Each client carries its own backend selection, so independent clients
/// can target different backends at the same time.
#[derive(Default)]
pub struct Ps3Client {
    backend: Option<Box<dyn MemoryBackend>>,
    active_kind: Option<BackendKind>,
}

impl Ps3Client {
    /// Creates a client with no backend selected.
    ///
    /// Every memory operation fails with [`MemoryError::NoBackendSelected`]
    /// until [`select_backend`](Self::select_backend) is called.
    pub fn new() -> Self {
        Ps3Client {
            backend: None,
            active_kind: None,
        }
    }

    /// Creates a client with the given backend kind already selected
    pub fn with_backend(kind: BackendKind) -> MemoryResult<Self> {
        let mut client = Self::new();
        client.select_backend(kind)?;
        Ok(client)
    }

    /// Selects the backend kind to route operations through.
    ///
    /// A connected previous backend is disconnected before the switch.
    /// Selecting a kind without an implementation fails immediately with
    /// [`MemoryError::UnsupportedBackend`] and leaves the current backend
    /// in place.
    pub fn select_backend(&mut self, kind: BackendKind) -> MemoryResult<()> {
        self.select_backend_with_config(kind, &Config::default())
    }

    /// Selects a backend kind, configuring it from the given [`Config`]
    pub fn select_backend_with_config(
        &mut self,
        kind: BackendKind,
        config: &Config,
    ) -> MemoryResult<()> {
        let new_backend: Box<dyn MemoryBackend> = match kind {
            BackendKind::Rpcs3 => Box::new(Rpcs3Backend::with_layout(
                config.process_name.clone(),
                config.layout,
            )),
            BackendKind::Tmapi => Box::new(TmapiBackend::new()),
            BackendKind::Ccapi => {
                return Err(MemoryError::UnsupportedBackend(kind.to_string()));
            }
        };

        self.store_backend(new_backend);
        self.active_kind = Some(kind);
        debug!(backend = %kind, "backend selected");
        Ok(())
    }

    /// Installs a caller-supplied backend, disconnecting any current one
    pub fn set_backend(&mut self, backend: Box<dyn MemoryBackend>) {
        self.store_backend(backend);
        self.active_kind = None;
    }

    fn store_backend(&mut self, backend: Box<dyn MemoryBackend>) {
        if let Some(old) = self.backend.as_mut() {
            if old.is_connected() {
                old.disconnect();
            }
        }
        self.backend = Some(backend);
    }

    /// The currently selected backend kind, if chosen through
    /// [`select_backend`](Self::select_backend)
    pub fn active_kind(&self) -> Option<BackendKind> {
        self.active_kind
    }

    /// The active backend's name, or "None" when nothing is selected
    pub fn active_backend(&self) -> &'static str {
        self.backend.as_ref().map_or("None", |b| b.name())
    }

    fn backend(&self) -> MemoryResult<&dyn MemoryBackend> {
        self.backend
            .as_deref()
            .ok_or(MemoryError::NoBackendSelected)
    }

    fn backend_mut(&mut self) -> MemoryResult<&mut dyn MemoryBackend> {
        match self.backend.as_deref_mut() {
            Some(backend) => Ok(backend),
            None => Err(MemoryError::NoBackendSelected),
        }
    }

    /// Attempts to connect the active backend
    pub fn connect(&mut self) -> MemoryResult<bool> {
        Ok(self.backend_mut()?.connect())
    }

    /// Disconnects the active backend
    pub fn disconnect(&mut self) -> MemoryResult<()> {
        self.backend_mut()?.disconnect();
        Ok(())
    }

    /// Whether the active backend is connected; false with no backend
    pub fn is_connected(&self) -> bool {
        self.backend.as_ref().is_some_and(|b| b.is_connected())
    }

    pub fn read_i8(&self, address: GuestAddress) -> MemoryResult<i8> {
        self.backend()?.read_i8(address)
    }

    pub fn read_u8(&self, address: GuestAddress) -> MemoryResult<u8> {
        self.backend()?.read_u8(address)
    }

    pub fn read_bool(&self, address: GuestAddress) -> MemoryResult<bool> {
        self.backend()?.read_bool(address)
    }

    pub fn read_i16(&self, address: GuestAddress) -> MemoryResult<i16> {
        self.backend()?.read_i16(address)
    }

    pub fn read_u16(&self, address: GuestAddress) -> MemoryResult<u16> {
        self.backend()?.read_u16(address)
    }

    pub fn read_i32(&self, address: GuestAddress) -> MemoryResult<i32> {
        self.backend()?.read_i32(address)
    }

    pub fn read_u32(&self, address: GuestAddress) -> MemoryResult<u32> {
        self.backend()?.read_u32(address)
    }

    pub fn read_i64(&self, address: GuestAddress) -> MemoryResult<i64> {
        self.backend()?.read_i64(address)
    }

    pub fn read_u64(&self, address: GuestAddress) -> MemoryResult<u64> {
        self.backend()?.read_u64(address)
    }

    pub fn read_f32(&self, address: GuestAddress) -> MemoryResult<f32> {
        self.backend()?.read_f32(address)
    }

    pub fn read_f64(&self, address: GuestAddress) -> MemoryResult<f64> {
        self.backend()?.read_f64(address)
    }

    pub fn read_bytes(&self, address: GuestAddress, length: usize) -> MemoryResult<Vec<u8>> {
        self.backend()?.read_bytes(address, length)
    }

    pub fn read_string(&self, address: GuestAddress) -> MemoryResult<String> {
        self.backend()?.read_string(address)
    }

    pub fn write_i8(&self, address: GuestAddress, value: i8) -> MemoryResult<()> {
        self.backend()?.write_i8(address, value)
    }

    pub fn write_u8(&self, address: GuestAddress, value: u8) -> MemoryResult<()> {
        self.backend()?.write_u8(address, value)
    }

    pub fn write_bool(&self, address: GuestAddress, value: bool) -> MemoryResult<()> {
        self.backend()?.write_bool(address, value)
    }

    pub fn write_i16(&self, address: GuestAddress, value: i16) -> MemoryResult<()> {
        self.backend()?.write_i16(address, value)
    }

    pub fn write_u16(&self, address: GuestAddress, value: u16) -> MemoryResult<()> {
        self.backend()?.write_u16(address, value)
    }

    pub fn write_i32(&self, address: GuestAddress, value: i32) -> MemoryResult<()> {
        self.backend()?.write_i32(address, value)
    }

    pub fn write_u32(&self, address: GuestAddress, value: u32) -> MemoryResult<()> {
        self.backend()?.write_u32(address, value)
    }

    pub fn write_i64(&self, address: GuestAddress, value: i64) -> MemoryResult<()> {
        self.backend()?.write_i64(address, value)
    }

    pub fn write_u64(&self, address: GuestAddress, value: u64) -> MemoryResult<()> {
        self.backend()?.write_u64(address, value)
    }

    pub fn write_f32(&self, address: GuestAddress, value: f32) -> MemoryResult<()> {
        self.backend()?.write_f32(address, value)
    }

    pub fn write_f64(&self, address: GuestAddress, value: f64) -> MemoryResult<()> {
        self.backend()?.write_f64(address, value)
    }

    pub fn write_bytes(&self, address: GuestAddress, data: &[u8]) -> MemoryResult<()> {
        self.backend()?.write_bytes(address, data)
    }

    pub fn write_string(&self, address: GuestAddress, value: &str) -> MemoryResult<()> {
        self.backend()?.write_string(address, value)
    }

    /// Resolves a pointer chain through the active backend
    pub fn get_pointer(
        &self,
        address: GuestAddress,
        offsets: &[i32],
    ) -> MemoryResult<GuestAddress> {
        self.backend()?.get_pointer(address, offsets)
    }
}
