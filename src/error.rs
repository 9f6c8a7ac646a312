//! Error types for backend texture allocation.

use thiserror::Error;

/// Errors reported by a texture backend when it cannot create a resource.
///
/// The registry raises no errors of its own: operating on a name it does not
/// hold is a no-op, and allocation failures are propagated from the backend
/// untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Failed to create texture: {0}")]
    TextureCreationFailed(String),
    #[error("Out of memory")]
    OutOfMemory,
    #[error("Device lost")]
    DeviceLost,
}

pub type BackendResult<T> = Result<T, BackendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BackendError::OutOfMemory;
        assert_eq!(err.to_string(), "Out of memory");

        let err = BackendError::TextureCreationFailed("unsupported layout".to_string());
        assert_eq!(err.to_string(), "Failed to create texture: unsupported layout");
    }
}
