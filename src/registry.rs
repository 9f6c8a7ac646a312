//! Name-keyed, reference-counted storage for GPU textures.
//!
//! Widgets that display the same image register it under the same name and
//! share one GPU resource. Each registration or explicit [`increment`] adds
//! one claim; the resource is released through the backend once every claim
//! has been dropped with [`decrement`].
//!
//! [`increment`]: TextureRegistry::increment
//! [`decrement`]: TextureRegistry::decrement

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::backend::traits::{TextureBackend, TextureHandle};
use crate::backend::types::TextureFormat;
use crate::data::TextureData;
use crate::error::BackendResult;

/// A single registry entry.
///
/// `handle` is `None` exactly while the record is a reserved placeholder the
/// rendering backend has not populated yet (see
/// [`TextureRegistry::reserve`] and [`TextureRegistry::attach`]); once set it
/// stays set until the record is destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRecord {
    /// Width in pixels. Zero for an unpopulated placeholder.
    pub width: u32,
    /// Height in pixels. Zero for an unpopulated placeholder.
    pub height: u32,
    /// Backend resource, if one has been allocated.
    pub handle: Option<TextureHandle>,
    /// Number of outstanding claims on this record.
    pub ref_count: u32,
}

/// Shared storage for GPU textures, keyed by caller-chosen names.
///
/// The registry is the sole owner of its records and their backend handles:
/// it requests allocation when a texture is first registered and instructs
/// the backend to release the resource when the last claim goes away.
/// Callers must pair every successful [`reserve`](Self::reserve) /
/// [`create`](Self::create) / [`increment`](Self::increment) with exactly
/// one [`decrement`](Self::decrement).
///
/// Name uniqueness and meaning are entirely caller-defined; a file path and
/// a synthetic identifier work equally well. The registry performs no
/// validation of name format.
///
/// # Thread Safety
///
/// All operations lock the registry as a whole, so count mutation, record
/// removal, and lookups are mutually atomic. Construct one registry in the
/// application's composition root and share it behind an `Arc`.
pub struct TextureRegistry {
    backend: Arc<dyn TextureBackend>,
    textures: Mutex<HashMap<String, TextureRecord>>,
}

impl TextureRegistry {
    /// Create an empty registry that allocates through `backend`.
    pub fn new(backend: Arc<dyn TextureBackend>) -> Self {
        Self {
            backend,
            textures: Mutex::new(HashMap::new()),
        }
    }

    /// Get the backend this registry allocates through.
    pub fn backend(&self) -> &Arc<dyn TextureBackend> {
        &self.backend
    }

    /// Register `name` without backend data.
    ///
    /// If the name is already present this only grows its reference count,
    /// exactly like [`increment`](Self::increment). Otherwise a placeholder
    /// record with no handle and zeroed dimensions is inserted with one
    /// claim; the rendering backend is expected to populate it later via
    /// [`attach`](Self::attach).
    pub fn reserve(&self, name: &str) {
        let mut textures = self.textures.lock();
        if let Some(record) = textures.get_mut(name) {
            record.ref_count += 1;
            log::trace!(
                "TextureRegistry: '{}' already present, count now {}",
                name,
                record.ref_count
            );
            return;
        }
        textures.insert(
            name.to_owned(),
            TextureRecord {
                width: 0,
                height: 0,
                handle: None,
                ref_count: 1,
            },
        );
        log::trace!("TextureRegistry: reserved '{}'", name);
    }

    /// Register `name`, allocating a backend texture from `data`.
    ///
    /// If the name is already present the existing resource is reused: the
    /// reference count grows by one, `data` is discarded, and the
    /// dimensions of the first registration stay in place. Otherwise the
    /// backend allocates a `width` x `height` texture from `data`
    /// interpreted per `format`, and the record starts with one claim.
    ///
    /// `data` must hold at least `format.min_data_len(width, height)`
    /// elements and both dimensions must be nonzero; the registry leaves
    /// checking the buffer to the backend.
    ///
    /// # Errors
    ///
    /// Propagates the backend's allocation error. No record is inserted on
    /// failure.
    pub fn create(
        &self,
        name: &str,
        data: &[f32],
        width: u32,
        height: u32,
        format: TextureFormat,
    ) -> BackendResult<()> {
        let mut textures = self.textures.lock();
        if let Some(record) = textures.get_mut(name) {
            record.ref_count += 1;
            log::debug!(
                "TextureRegistry: '{}' already present, reusing existing texture (count now {})",
                name,
                record.ref_count
            );
            return Ok(());
        }
        let handle = self.backend.alloc_texture(data, width, height, format)?;
        textures.insert(
            name.to_owned(),
            TextureRecord {
                width,
                height,
                handle: Some(handle),
                ref_count: 1,
            },
        );
        log::trace!(
            "TextureRegistry: created '{}' ({}x{}, {:?})",
            name,
            width,
            height,
            format
        );
        Ok(())
    }

    /// Register the pixels of `data` under its own name.
    ///
    /// Convenience wrapper around [`create`](Self::create) for data produced
    /// by [`TextureData`] constructors.
    pub fn create_from(&self, data: &TextureData) -> BackendResult<()> {
        self.create(&data.name, &data.data, data.width, data.height, data.format)
    }

    /// Add one claim to `name`.
    ///
    /// Unknown names are ignored.
    pub fn increment(&self, name: &str) {
        let mut textures = self.textures.lock();
        match textures.get_mut(name) {
            Some(record) => {
                record.ref_count += 1;
                log::trace!(
                    "TextureRegistry: incremented '{}' to {}",
                    name,
                    record.ref_count
                );
            }
            None => log::trace!("TextureRegistry: increment on unknown texture '{}'", name),
        }
    }

    /// Drop one claim on `name`.
    ///
    /// When the last claim is dropped the backend resource (if any was ever
    /// allocated) is released and the record is removed. Unknown names are
    /// ignored, so a decrement arriving after the record is gone is
    /// harmless.
    pub fn decrement(&self, name: &str) {
        let mut textures = self.textures.lock();
        let Some(record) = textures.get_mut(name) else {
            log::trace!("TextureRegistry: decrement on unknown texture '{}'", name);
            return;
        };
        record.ref_count -= 1;
        if record.ref_count > 0 {
            log::trace!(
                "TextureRegistry: decremented '{}' to {}",
                name,
                record.ref_count
            );
            return;
        }
        // Placeholders never allocated anything, so there is nothing to free
        // for them.
        if let Some(TextureRecord {
            handle: Some(handle),
            ..
        }) = textures.remove(name)
        {
            self.backend.free_texture(handle);
        }
        log::trace!("TextureRegistry: destroyed '{}'", name);
    }

    /// Install `handle` into the placeholder registered under `name`.
    ///
    /// This is the rendering backend's side of the
    /// [`reserve`](Self::reserve) contract: once it has produced a resource
    /// for a reserved name it hands the handle over here, together with the
    /// texture's dimensions. The reference count is not touched.
    ///
    /// Returns `true` when the registry took ownership of the handle. On
    /// `false` (unknown name, or the record already carries a resource) the
    /// caller keeps ownership and remains responsible for freeing it.
    pub fn attach(&self, name: &str, handle: TextureHandle, width: u32, height: u32) -> bool {
        let mut textures = self.textures.lock();
        match textures.get_mut(name) {
            Some(record) if record.handle.is_none() => {
                record.handle = Some(handle);
                record.width = width;
                record.height = height;
                log::trace!(
                    "TextureRegistry: attached {:?} to '{}' ({}x{})",
                    handle,
                    name,
                    width,
                    height
                );
                true
            }
            Some(_) => {
                log::warn!(
                    "TextureRegistry: attach to '{}' ignored, texture already populated",
                    name
                );
                false
            }
            None => {
                log::warn!("TextureRegistry: attach to unknown texture '{}'", name);
                false
            }
        }
    }

    /// Look up the record stored under `name`.
    ///
    /// Returns a snapshot taken under the registry lock; the reference count
    /// is unaffected. Rendering code calls this every frame to fetch the
    /// current dimensions and handle for drawing.
    pub fn get(&self, name: &str) -> Option<TextureRecord> {
        self.textures.lock().get(name).copied()
    }

    /// Number of distinct textures currently held.
    pub fn len(&self) -> usize {
        self.textures.lock().len()
    }

    /// Whether the registry holds no textures.
    pub fn is_empty(&self) -> bool {
        self.textures.lock().is_empty()
    }

    /// Release every texture and empty the registry, regardless of
    /// outstanding claims.
    ///
    /// Intended for full shutdown or reset; this bypasses the usual
    /// reference-count-driven lifetime, so any widget still holding a claim
    /// afterwards refers to a texture that no longer exists.
    pub fn clear(&self) {
        let mut textures = self.textures.lock();
        if !textures.is_empty() {
            log::debug!("TextureRegistry: clearing {} texture(s)", textures.len());
        }
        for (_, record) in textures.drain() {
            if let Some(handle) = record.handle {
                self.backend.free_texture(handle);
            }
        }
    }
}

impl std::fmt::Debug for TextureRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextureRegistry")
            .field("backend", &self.backend.name())
            .field("textures", &self.textures.lock().len())
            .finish()
    }
}

// Ensure TextureRegistry can be shared across threads
static_assertions::assert_impl_all!(TextureRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::dummy::DummyBackend;

    fn create_test_registry() -> (Arc<DummyBackend>, TextureRegistry) {
        let backend = Arc::new(DummyBackend::new());
        let registry = TextureRegistry::new(backend.clone());
        (backend, registry)
    }

    #[test]
    fn test_create_and_get() {
        let (_, registry) = create_test_registry();
        registry
            .create("tex", &[0.0; 64], 4, 4, TextureFormat::RgbaFloat)
            .unwrap();

        let record = registry.get("tex").unwrap();
        assert_eq!(record.width, 4);
        assert_eq!(record.height, 4);
        assert!(record.handle.is_some());
        assert_eq!(record.ref_count, 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_get_unknown() {
        let (_, registry) = create_test_registry();
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_reserve_placeholder() {
        let (_, registry) = create_test_registry();
        registry.reserve("pending");

        let record = registry.get("pending").unwrap();
        assert_eq!(record.width, 0);
        assert_eq!(record.height, 0);
        assert!(record.handle.is_none());
        assert_eq!(record.ref_count, 1);
    }

    #[test]
    fn test_decrement_releases_backend_resource() {
        let (backend, registry) = create_test_registry();
        registry
            .create("tex", &[0.0; 64], 4, 4, TextureFormat::RgbaFloat)
            .unwrap();
        assert_eq!(backend.live(), 1);

        registry.decrement("tex");
        assert!(registry.get("tex").is_none());
        assert_eq!(backend.live(), 0);
    }

    #[test]
    fn test_debug() {
        let (_, registry) = create_test_registry();
        let debug = format!("{:?}", registry);
        assert!(debug.contains("TextureRegistry"));
        assert!(debug.contains("Dummy Backend"));
    }
}
