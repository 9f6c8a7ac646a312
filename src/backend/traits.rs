//! Core backend abstraction traits
//!
//! These traits define the interface the registry expects from whichever
//! rendering backend actually owns the GPU.

use crate::backend::types::TextureFormat;
use crate::error::BackendResult;

/// Handle to a GPU texture.
///
/// Handles are minted by backends and meaningless outside them; the registry
/// stores and returns them without ever interpreting the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(u64);

impl TextureHandle {
    /// Wrap a backend-chosen id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// The backend-chosen id.
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Allocation and release primitives supplied by the rendering backend.
///
/// The registry calls [`alloc_texture`](Self::alloc_texture) when a texture
/// is first registered with pixel data, and
/// [`free_texture`](Self::free_texture) when a record's last reference is
/// dropped or the registry is cleared. Ownership of a handle transfers into
/// the registry on allocation and back to the backend on release.
pub trait TextureBackend: Send + Sync + 'static {
    /// Backend name for diagnostics.
    fn name(&self) -> &'static str;

    /// Allocate and upload a `width` x `height` texture from `data`,
    /// interpreted according to `format`.
    ///
    /// `data` must hold at least `format.min_data_len(width, height)`
    /// elements and both dimensions must be nonzero; validating the caller's
    /// buffer is the backend's concern.
    fn alloc_texture(
        &self,
        data: &[f32],
        width: u32,
        height: u32,
        format: TextureFormat,
    ) -> BackendResult<TextureHandle>;

    /// Release a texture previously returned by
    /// [`alloc_texture`](Self::alloc_texture).
    fn free_texture(&self, handle: TextureHandle);
}
