//! # Texture Registry
//!
//! Reference-counted storage for GPU-backed textures shared between GUI
//! widgets.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`TextureRegistry`] - name-keyed, reference-counted texture storage
//! - [`TextureBackend`] - trait for the rendering backend performing the
//!   actual GPU allocation and release
//! - [`TextureData`] - CPU-side pixel sources (files, bytes, solid colors)
//! - [`DummyBackend`] - no-op backend for testing and development
//!
//! Widgets registering the same name share one GPU resource; the resource
//! is released automatically once the last claim on it is dropped.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use texture_registry::{DummyBackend, TextureFormat, TextureRegistry};
//!
//! let registry = TextureRegistry::new(Arc::new(DummyBackend::new()));
//!
//! let pixels = vec![1.0; 4 * 4 * 4];
//! registry.create("icon", &pixels, 4, 4, TextureFormat::RgbaFloat)?;
//!
//! let record = registry.get("icon").unwrap();
//! assert_eq!((record.width, record.height), (4, 4));
//!
//! // Last claim dropped: the GPU resource is released.
//! registry.decrement("icon");
//! assert!(registry.get("icon").is_none());
//! # Ok::<(), texture_registry::BackendError>(())
//! ```

pub mod backend;
pub mod data;
pub mod error;
pub mod registry;

// Re-export main types for convenience
pub use backend::{DummyBackend, TextureBackend, TextureFormat, TextureHandle};
pub use data::TextureData;
pub use error::{BackendError, BackendResult};
pub use registry::{TextureRecord, TextureRegistry};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the library version at startup.
///
/// Calling this is optional; the registry works without it.
pub fn init() {
    log::info!("texture-registry v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_empty_registry() {
        let registry = TextureRegistry::new(Arc::new(DummyBackend::new()));
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }
}
