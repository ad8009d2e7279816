//! Decoded raster image buffer shared by the block decoder and PNG encoder.

/// Channel layout of a decoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PixelLayout {
    /// Single luminance channel
    Gray8,
    /// Red, green, blue
    Rgb8,
    /// Red, green, blue, alpha
    Rgba8,
}

impl PixelLayout {
    /// Number of bytes per pixel.
    pub fn channels(self) -> usize {
        match self {
            PixelLayout::Gray8 => 1,
            PixelLayout::Rgb8 => 3,
            PixelLayout::Rgba8 => 4,
        }
    }
}

/// Owned pixel buffer with a fixed channel layout.
///
/// Rows are stored top to bottom with no padding, `width * channels`
/// bytes each. The buffer is allocated zero-filled once per image and
/// every in-bounds pixel is overwritten exactly once during assembly.
#[derive(Debug, Clone)]
pub struct RasterImage {
    width: u32,
    height: u32,
    layout: PixelLayout,
    pixels: Vec<u8>,
}

impl RasterImage {
    /// Allocate a zero-filled image.
    pub fn new(width: u32, height: u32, layout: PixelLayout) -> Self {
        let len = width as usize * height as usize * layout.channels();
        Self {
            width,
            height,
            layout,
            pixels: vec![0u8; len],
        }
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout.
    pub fn layout(&self) -> PixelLayout {
        self.layout
    }

    /// Raw pixel bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw pixel bytes, row-major.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}
