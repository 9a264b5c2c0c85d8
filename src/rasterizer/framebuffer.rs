//! RGB framebuffer the rasterizer draws into

use super::error::RasterError;
use super::types::{Color, ColorPreset};

/// Row-major RGB pixel grid.
///
/// Either unallocated (0x0, no storage) or fully allocated with exactly
/// `width * height` pixels. Pixel `(x, y)` lives at `y * width + x`.
///
/// Two access paths with different failure policies:
/// - [`Framebuffer::set_pixel`] takes coordinates and silently clips, so off-screen
///   geometry is simply not drawn.
/// - [`Framebuffer::pixel`] / [`Framebuffer::pixel_mut`] take a flat index and reject
///   anything outside the buffer with [`RasterError::InvalidIndex`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Framebuffer {
    pixels: Vec<Color>,
    width: usize,
    height: usize,
}

impl Framebuffer {
    /// Unallocated framebuffer; call [`Framebuffer::allocate`] before drawing
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        let mut fb = Self::new();
        fb.allocate(width, height);
        fb
    }

    /// Allocate storage for `width * height` pixels.
    ///
    /// No-op if already allocated (it does not resize). Zero dimensions leave the
    /// buffer unallocated. Contents are unspecified until [`Framebuffer::clear`].
    pub fn allocate(&mut self, width: usize, height: usize) {
        if self.is_allocated() {
            log::debug!(
                "Framebuffer already allocated ({}x{}), ignoring request for {}x{}",
                self.width, self.height, width, height
            );
            return;
        }
        if width == 0 || height == 0 {
            log::warn!("Refusing to allocate empty framebuffer {}x{}", width, height);
            return;
        }

        let Some(len) = width.checked_mul(height) else {
            log::warn!("Refusing to allocate oversized framebuffer {}x{}", width, height);
            return;
        };

        self.pixels = vec![Color::BLACK; len];
        self.width = width;
        self.height = height;
        log::info!("Framebuffer allocated: {}x{}", width, height);
    }

    pub fn is_allocated(&self) -> bool {
        !self.pixels.is_empty()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total pixel count (`width * height`)
    pub fn resolution(&self) -> usize {
        self.pixels.len()
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
        log::debug!("Framebuffer cleared to RGB({}, {}, {})", color.r, color.g, color.b);
    }

    pub fn clear_preset(&mut self, preset: ColorPreset) {
        self.pixels.fill(preset.color());
        log::debug!("Framebuffer cleared to {}", preset);
    }

    /// Write one pixel; coordinates outside the buffer are discarded
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = color;
        }
    }

    /// Read one pixel by coordinates, `None` when outside the buffer
    pub fn pixel_at(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            Some(self.pixels[y * self.width + x])
        } else {
            None
        }
    }

    /// Read one pixel by flat row-major index
    pub fn pixel(&self, index: i64) -> Result<Color, RasterError> {
        let i = self.checked_index(index)?;
        Ok(self.pixels[i])
    }

    pub fn pixel_mut(&mut self, index: i64) -> Result<&mut Color, RasterError> {
        let i = self.checked_index(index)?;
        Ok(&mut self.pixels[i])
    }

    /// Write one pixel by flat row-major index
    pub fn set_pixel_index(&mut self, index: i64, color: Color) -> Result<(), RasterError> {
        *self.pixel_mut(index)? = color;
        Ok(())
    }

    fn checked_index(&self, index: i64) -> Result<usize, RasterError> {
        usize::try_from(index)
            .ok()
            .filter(|i| *i < self.pixels.len())
            .ok_or(RasterError::InvalidIndex { index, len: self.pixels.len() })
    }

    /// Row-major pixel data
    pub fn data(&self) -> &[Color] {
        &self.pixels
    }

    /// Row-major packed RGB bytes, 3 per pixel
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|c| c.to_bytes()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unallocated() {
        let fb = Framebuffer::new();
        assert!(!fb.is_allocated());
        assert_eq!((fb.width(), fb.height(), fb.resolution()), (0, 0, 0));
        assert!(fb.data().is_empty());
    }

    #[test]
    fn test_allocate_is_idempotent() {
        let mut fb = Framebuffer::new();
        fb.allocate(4, 3);
        assert!(fb.is_allocated());
        assert_eq!(fb.resolution(), 12);

        fb.allocate(100, 100);
        assert_eq!((fb.width(), fb.height()), (4, 3));
        assert_eq!(fb.data().len(), 12);
    }

    #[test]
    fn test_allocate_zero_stays_unallocated() {
        let mut fb = Framebuffer::new();
        fb.allocate(0, 10);
        assert!(!fb.is_allocated());
        assert_eq!((fb.width(), fb.height()), (0, 0));

        // A later valid request still succeeds
        fb.allocate(2, 2);
        assert_eq!(fb.resolution(), 4);
    }

    #[test]
    fn test_allocate_overflowing_size_stays_unallocated() {
        let mut fb = Framebuffer::new();
        fb.allocate(usize::MAX, 2);
        assert!(!fb.is_allocated());
        assert_eq!((fb.width(), fb.height(), fb.resolution()), (0, 0, 0));
    }

    #[test]
    fn test_clear_then_read_every_index() {
        let mut fb = Framebuffer::with_size(7, 5);
        let color = Color::new(12, 34, 56);
        fb.clear(color);
        for i in 0..(7 * 5) as i64 {
            assert_eq!(fb.pixel(i).unwrap(), color);
        }

        fb.clear_preset(ColorPreset::Orange);
        assert!(fb.data().iter().all(|c| *c == Color::ORANGE));
    }

    #[test]
    fn test_flat_index_out_of_range() {
        let mut fb = Framebuffer::with_size(10, 10);
        assert_eq!(
            fb.pixel(100),
            Err(RasterError::InvalidIndex { index: 100, len: 100 })
        );
        assert_eq!(fb.pixel(-1), Err(RasterError::InvalidIndex { index: -1, len: 100 }));
        assert!(fb.pixel_mut(100).is_err());
        assert!(fb.set_pixel_index(-1, Color::RED).is_err());
        assert!(fb.pixel(99).is_ok());
    }

    #[test]
    fn test_unallocated_rejects_every_index() {
        let fb = Framebuffer::new();
        assert!(fb.pixel(0).is_err());
    }

    #[test]
    fn test_set_pixel_row_major() {
        let mut fb = Framebuffer::with_size(4, 3);
        fb.set_pixel(2, 1, Color::GREEN);
        assert_eq!(fb.pixel(6).unwrap(), Color::GREEN);
        assert_eq!(fb.pixel_at(2, 1), Some(Color::GREEN));

        fb.set_pixel_index(11, Color::BLUE).unwrap();
        assert_eq!(fb.pixel_at(3, 2), Some(Color::BLUE));
    }

    #[test]
    fn test_set_pixel_clips() {
        let mut fb = Framebuffer::with_size(4, 3);
        fb.clear(Color::BLACK);
        for (x, y) in [(-1, 0), (0, -1), (4, 0), (0, 3), (i32::MAX, i32::MAX), (i32::MIN, 1)] {
            fb.set_pixel(x, y, Color::WHITE);
            assert_eq!(fb.pixel_at(x, y), None);
        }
        assert!(fb.data().iter().all(|c| *c == Color::BLACK));
    }

    #[test]
    fn test_rgb_bytes() {
        let mut fb = Framebuffer::with_size(2, 1);
        fb.set_pixel(0, 0, Color::new(1, 2, 3));
        fb.set_pixel(1, 0, Color::new(4, 5, 6));
        assert_eq!(fb.to_rgb_bytes(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_clone_is_deep() {
        let mut a = Framebuffer::with_size(2, 2);
        a.clear(Color::RED);
        let b = a.clone();
        a.set_pixel(0, 0, Color::BLUE);
        assert_eq!(b.pixel_at(0, 0), Some(Color::RED));
    }
}
