//! Sketch images and their data-URI encoding

use std::io::Cursor;
use std::path::Path;

use base64::Engine;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba};
use tracing::debug;

use super::errors::InferenceResult;

/// A sketch ready to send to the endpoint, flattened onto a white canvas
#[derive(Debug, Clone)]
pub struct SketchImage {
    canvas: RgbImage,
    jpeg: Vec<u8>,
}

impl SketchImage {
    /// Decode a sketch from any format the `image` crate understands
    pub fn load(path: impl AsRef<Path>) -> InferenceResult<Self> {
        let path = path.as_ref();
        debug!("Loading sketch from {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> InferenceResult<Self> {
        let decoded = image::load_from_memory(bytes)?;
        Self::from_image(decoded)
    }

    pub fn from_image(image: DynamicImage) -> InferenceResult<Self> {
        let canvas = flatten_on_white(&image);

        let mut jpeg = Vec::new();
        DynamicImage::ImageRgb8(canvas.clone())
            .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)?;

        Ok(Self { canvas, jpeg })
    }

    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// True when nothing has been drawn
    pub fn is_blank(&self) -> bool {
        self.canvas.pixels().all(|p| *p == Rgb([255, 255, 255]))
    }

    /// `data:image/jpeg;base64,...`
    pub fn data_uri(&self) -> String {
        format!(
            "data:image/jpeg;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.jpeg)
        )
    }
}

/// Composite over white so transparent strokes-only images look like a canvas drawing
fn flatten_on_white(image: &DynamicImage) -> RgbImage {
    let rgba = image.to_rgba8();
    let mut canvas = RgbImage::from_pixel(rgba.width(), rgba.height(), Rgb([255, 255, 255]));

    for (x, y, Rgba([r, g, b, a])) in rgba.enumerate_pixels().map(|(x, y, p)| (x, y, *p)) {
        let alpha = a as u32;
        let blend = |c: u8| ((c as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
        canvas.put_pixel(x, y, Rgb([blend(r), blend(g), blend(b)]));
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn png_bytes(image: RgbaImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_transparent_canvas_is_blank() {
        let sketch = SketchImage::from_bytes(&png_bytes(RgbaImage::new(16, 16))).unwrap();
        assert!(sketch.is_blank());
        assert_eq!((sketch.width(), sketch.height()), (16, 16));
    }

    #[test]
    fn test_stroke_is_not_blank() {
        let mut image = RgbaImage::new(16, 16);
        for x in 2..14 {
            image.put_pixel(x, 8, Rgba([0, 0, 0, 255]));
        }
        let sketch = SketchImage::from_bytes(&png_bytes(image)).unwrap();
        assert!(!sketch.is_blank());
    }

    #[test]
    fn test_data_uri_is_jpeg() {
        let sketch = SketchImage::from_bytes(&png_bytes(RgbaImage::new(8, 8))).unwrap();
        let uri = sketch.data_uri();
        let payload = uri.strip_prefix("data:image/jpeg;base64,").unwrap();

        let decoded = base64::engine::general_purpose::STANDARD.decode(payload).unwrap();
        assert_eq!(image::guess_format(&decoded).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sketch.png");
        std::fs::write(&path, png_bytes(RgbaImage::new(4, 4))).unwrap();

        assert!(SketchImage::load(&path).is_ok());
        assert!(SketchImage::load(dir.path().join("missing.png")).is_err());
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        assert!(matches!(
            SketchImage::from_bytes(b"not an image"),
            Err(crate::inference::InferenceError::Image(_))
        ));
    }
}
