//! HSV camera frames
//!
//! The video collaborator hands over frames either already in HSV or as
//! packed 8-bit RGB, which is converted here.

use crate::color::{ColorConverter, Hsv};
use crate::error::{Result, ScanError};

/// Row-major HSV frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvFrame {
    width: u32,
    height: u32,
    pixels: Vec<Hsv>,
}

impl HsvFrame {
    /// Wrap HSV pixels
    ///
    /// # Errors
    ///
    /// `InvalidLength` unless `pixels.len() == width * height`.
    pub fn new(width: u32, height: u32, pixels: Vec<Hsv>) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(ScanError::InvalidLength {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Convert packed 8-bit RGB (3 bytes per pixel, row-major)
    pub fn from_rgb(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if rgb.len() != expected {
            return Err(ScanError::InvalidLength {
                expected,
                actual: rgb.len(),
            });
        }

        let converter = ColorConverter::new();
        let pixels = rgb
            .chunks_exact(3)
            .map(|px| converter.rgb_to_hsv(px[0], px[1], px[2]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Frame filled with one color
    pub fn filled(width: u32, height: u32, hsv: Hsv) -> Self {
        Self {
            width,
            height,
            pixels: vec![hsv; width as usize * height as usize],
        }
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at (x, y), or `None` outside the frame
    pub fn pixel(&self, x: u32, y: u32) -> Option<Hsv> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Overwrite the pixel at (x, y); ignored outside the frame
    pub fn set_pixel(&mut self, x: u32, y: u32, hsv: Hsv) {
        if x < self.width && y < self.height {
            let index = y as usize * self.width as usize + x as usize;
            self.pixels[index] = hsv;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_pixel_count() {
        assert!(HsvFrame::new(2, 2, vec![Hsv::default(); 4]).is_ok());
        let err = HsvFrame::new(2, 2, vec![Hsv::default(); 3]).unwrap_err();
        assert!(matches!(err, ScanError::InvalidLength { expected: 4, actual: 3 }));
    }

    #[test]
    fn test_from_rgb_converts_each_pixel() {
        let rgb = [255, 0, 0, 0, 0, 255];
        let frame = HsvFrame::from_rgb(2, 1, &rgb).unwrap();
        assert_eq!(frame.pixel(0, 0), Some(Hsv::new(0, 255, 255)));
        assert_eq!(frame.pixel(1, 0), Some(Hsv::new(120, 255, 255)));
        assert_eq!(frame.pixel(2, 0), None);
    }

    #[test]
    fn test_set_pixel() {
        let mut frame = HsvFrame::filled(3, 3, Hsv::default());
        frame.set_pixel(1, 2, Hsv::new(60, 200, 200));
        assert_eq!(frame.pixel(1, 2), Some(Hsv::new(60, 200, 200)));
        frame.set_pixel(5, 5, Hsv::new(1, 1, 1));
        assert_eq!(frame.pixel(0, 0), Some(Hsv::default()));
    }
}
