//! CPU-side pixel sources for registering textures.

use crate::backend::types::TextureFormat;
use image::{DynamicImage, GenericImageView};
use std::path::Path;

/// Decoded pixel data ready to hand to
/// [`TextureRegistry::create_from`](crate::TextureRegistry::create_from).
///
/// All constructors produce normalized float RGBA components in row-major
/// order, which is the layout backends receive at upload time.
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub format: TextureFormat,
    pub data: Vec<f32>,
    pub name: String,
}

impl TextureData {
    /// Load texture data from an image file.
    ///
    /// The full path becomes the texture name, so widgets referencing the
    /// same file end up sharing one registry entry.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let name = path.to_string_lossy().into_owned();

        let img = image::open(path).map_err(|e| e.to_string())?;
        Ok(Self::from_image(img, &name))
    }

    /// Load texture data from encoded image bytes.
    pub fn from_bytes(bytes: &[u8], name: &str) -> Result<Self, String> {
        let img = image::load_from_memory(bytes).map_err(|e| e.to_string())?;
        Ok(Self::from_image(img, name))
    }

    /// Create texture data from a decoded image.
    fn from_image(img: DynamicImage, name: &str) -> Self {
        let (width, height) = img.dimensions();
        let rgba = img.to_rgba8();
        let data = rgba.into_raw().iter().map(|&c| c as f32 / 255.0).collect();

        Self {
            width,
            height,
            format: TextureFormat::RgbaFloat,
            data,
            name: name.to_string(),
        }
    }

    /// Create a 1x1 solid color texture.
    pub fn solid_color(color: [f32; 4], name: &str) -> Self {
        Self {
            width: 1,
            height: 1,
            format: TextureFormat::RgbaFloat,
            data: color.to_vec(),
            name: name.to_string(),
        }
    }

    /// Create a default white texture.
    pub fn white() -> Self {
        Self::solid_color([1.0, 1.0, 1.0, 1.0], "white")
    }

    /// Create a checkerboard texture with 8-pixel squares.
    pub fn checkerboard(size: u32, color1: [f32; 4], color2: [f32; 4]) -> Self {
        let mut data = Vec::with_capacity((size * size * 4) as usize);

        for y in 0..size {
            for x in 0..size {
                let is_even = ((x / 8) + (y / 8)) % 2 == 0;
                let color = if is_even { color1 } else { color2 };
                data.extend_from_slice(&color);
            }
        }

        Self {
            width: size,
            height: size,
            format: TextureFormat::RgbaFloat,
            data,
            name: "checkerboard".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_solid_color() {
        let data = TextureData::solid_color([0.2, 0.4, 0.6, 1.0], "accent");
        assert_eq!((data.width, data.height), (1, 1));
        assert_eq!(data.data.len(), data.format.min_data_len(1, 1));
        assert_eq!(data.name, "accent");
    }

    #[test]
    fn test_checkerboard_dimensions() {
        let data = TextureData::checkerboard(16, [1.0; 4], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!((data.width, data.height), (16, 16));
        assert_eq!(data.data.len(), data.format.min_data_len(16, 16));
    }

    #[test]
    fn test_from_bytes() {
        // Encode a small image in memory so the decode path sees real bytes.
        let img = DynamicImage::ImageRgba8(image::ImageBuffer::from_pixel(
            2,
            3,
            image::Rgba([255, 0, 0, 255]),
        ));
        let mut bytes = Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageOutputFormat::Png)
            .unwrap();

        let data = TextureData::from_bytes(bytes.get_ref(), "red").unwrap();
        assert_eq!((data.width, data.height), (2, 3));
        assert_eq!(data.data.len(), data.format.min_data_len(2, 3));
        assert_eq!(data.data[0], 1.0);
        assert_eq!(data.data[1], 0.0);
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(TextureData::from_bytes(&[1, 2, 3, 4], "junk").is_err());
    }
}
