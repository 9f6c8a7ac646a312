//! Dummy texture backend for testing and development.
//!
//! This backend doesn't perform actual GPU operations but provides a valid
//! implementation for exercising the registry without GPU hardware. It keeps
//! allocation bookkeeping so tests can observe when resources are created
//! and released.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::backend::traits::{TextureBackend, TextureHandle};
use crate::backend::types::TextureFormat;
use crate::error::BackendResult;

/// Dummy texture backend.
#[derive(Debug, Default)]
pub struct DummyBackend {
    next_handle: AtomicU64,
    allocated: AtomicUsize,
    freed: AtomicUsize,
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of textures allocated so far.
    pub fn allocated(&self) -> usize {
        self.allocated.load(Ordering::Relaxed)
    }

    /// Total number of textures released so far.
    pub fn freed(&self) -> usize {
        self.freed.load(Ordering::Relaxed)
    }

    /// Allocations that have not been released yet.
    pub fn live(&self) -> usize {
        self.allocated() - self.freed()
    }
}

impl TextureBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy Backend"
    }

    fn alloc_texture(
        &self,
        data: &[f32],
        width: u32,
        height: u32,
        format: TextureFormat,
    ) -> BackendResult<TextureHandle> {
        log::trace!(
            "DummyBackend: creating texture {}x{} ({:?}, {} elements)",
            width,
            height,
            format,
            data.len()
        );
        self.allocated.fetch_add(1, Ordering::Relaxed);
        let id = self.next_handle.fetch_add(1, Ordering::Relaxed);
        Ok(TextureHandle::new(id))
    }

    fn free_texture(&self, handle: TextureHandle) {
        log::trace!("DummyBackend: releasing texture {:?}", handle);
        self.freed.fetch_add(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_distinct() {
        let backend = DummyBackend::new();
        let a = backend
            .alloc_texture(&[0.0; 4], 1, 1, TextureFormat::RgbaFloat)
            .unwrap();
        let b = backend
            .alloc_texture(&[0.0; 4], 1, 1, TextureFormat::RgbaFloat)
            .unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_bookkeeping() {
        let backend = DummyBackend::new();
        let handle = backend
            .alloc_texture(&[0.0; 4], 1, 1, TextureFormat::RgbaFloat)
            .unwrap();
        assert_eq!(backend.allocated(), 1);
        assert_eq!(backend.live(), 1);

        backend.free_texture(handle);
        assert_eq!(backend.freed(), 1);
        assert_eq!(backend.live(), 0);
    }
}
