//! Texture format types shared between the registry and backends.

/// Source pixel layout of the data handed to a backend at creation time.
///
/// The format only tells the backend how to interpret the supplied buffer
/// while allocating and uploading the resource; it is not stored per record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureFormat {
    /// 4 channels, integer-valued components.
    #[default]
    RgbaInt,
    /// 4 channels, float components.
    RgbaFloat,
    /// 3 channels, float components.
    RgbFloat,
    /// 3 channels, integer-valued components.
    RgbInt,
}

impl TextureFormat {
    /// Number of components per texel.
    pub fn channels(&self) -> usize {
        match self {
            Self::RgbaInt | Self::RgbaFloat => 4,
            Self::RgbFloat | Self::RgbInt => 3,
        }
    }

    /// Minimum number of elements a pixel buffer must hold for a
    /// `width` x `height` texture in this format.
    pub fn min_data_len(&self, width: u32, height: u32) -> usize {
        width as usize * height as usize * self.channels()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channels() {
        assert_eq!(TextureFormat::RgbaInt.channels(), 4);
        assert_eq!(TextureFormat::RgbaFloat.channels(), 4);
        assert_eq!(TextureFormat::RgbFloat.channels(), 3);
        assert_eq!(TextureFormat::RgbInt.channels(), 3);
    }

    #[test]
    fn test_min_data_len() {
        assert_eq!(TextureFormat::RgbaFloat.min_data_len(4, 4), 64);
        assert_eq!(TextureFormat::RgbFloat.min_data_len(2, 3), 18);
        assert_eq!(TextureFormat::RgbaInt.min_data_len(0, 16), 0);
    }
}
