use image::{Rgba, RgbaImage};

use super::TRANSPARENT;

/// Mutable RGBA8 pixel surface.
///
/// Colors are straight (non-premultiplied) alpha. Out-of-bounds writes are
/// ignored, so drawing code can clip by simply not caring.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pixels: RgbaImage,
}

impl Image {
    /// Creates a `width × height` image cleared to transparent black.
    ///
    /// Zero-sized images are valid; every operation on them is a no-op.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: RgbaImage::new(width, height),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn size(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.pixels.get_pixel_checked(x, y).copied()
    }

    /// Overwrites the pixel at `(x, y)`. Ignored outside the image.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        if let Some(p) = self.pixels.get_pixel_mut_checked(x, y) {
            *p = color;
        }
    }

    /// Composites `color` over the pixel at `(x, y)` (source-over).
    ///
    /// Signed coordinates so glyph offsets can go negative; anything outside the
    /// image is dropped.
    pub fn blend_pixel(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        let Some(dst) = self.pixels.get_pixel_mut_checked(x, y) else {
            return;
        };
        *dst = source_over(color, *dst);
    }

    /// Overwrites every pixel with `color`. No blending.
    pub fn fill(&mut self, color: Rgba<u8>) {
        for p in self.pixels.pixels_mut() {
            *p = color;
        }
    }

    /// Resets every pixel to transparent black.
    pub fn clear(&mut self) {
        self.fill(TRANSPARENT);
    }

    /// Reallocates the image at the new size. Contents are cleared.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.size() == (width, height) {
            self.clear();
            return;
        }
        self.pixels = RgbaImage::new(width, height);
    }

    /// Iterates `(x, y, color)` over all pixels in row-major order.
    pub fn enumerate_pixels(&self) -> impl Iterator<Item = (u32, u32, Rgba<u8>)> + '_ {
        self.pixels.enumerate_pixels().map(|(x, y, p)| (x, y, *p))
    }

    /// Raw RGBA8 bytes, `width * 4` bytes per row, no padding.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        self.pixels.as_raw()
    }
}

/// Straight-alpha source-over compositing.
fn source_over(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    if sa >= 1.0 {
        return src;
    }
    if sa <= 0.0 {
        return dst;
    }

    let da = dst[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let channel = |i: usize| {
        let s = src[i] as f32 / 255.0;
        let d = dst[i] as f32 / 255.0;
        let c = (s * sa + d * da * (1.0 - sa)) / out_a;
        (c * 255.0).round().clamp(0.0, 255.0) as u8
    };

    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_a * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([0xff, 0x00, 0x00, 0xff]);

    #[test]
    fn new_image_is_transparent() {
        let img = Image::new(3, 2);
        assert_eq!(img.size(), (3, 2));
        assert!(img.enumerate_pixels().all(|(_, _, p)| p == TRANSPARENT));
    }

    #[test]
    fn fill_overwrites_every_pixel() {
        let mut img = Image::new(4, 4);
        img.set_pixel(1, 1, Rgba([1, 2, 3, 4]));
        img.fill(RED);
        assert!(img.enumerate_pixels().all(|(_, _, p)| p == RED));
    }

    #[test]
    fn out_of_bounds_access_is_ignored() {
        let mut img = Image::new(2, 2);
        img.set_pixel(5, 0, RED);
        img.blend_pixel(-1, 0, RED);
        img.blend_pixel(0, 2, RED);
        assert_eq!(img.pixel(5, 0), None);
        assert!(img.enumerate_pixels().all(|(_, _, p)| p == TRANSPARENT));
    }

    #[test]
    fn zero_sized_image_is_inert() {
        let mut img = Image::new(0, 0);
        img.fill(RED);
        img.blend_pixel(0, 0, RED);
        assert!(img.is_empty());
        assert!(img.as_raw().is_empty());
    }

    #[test]
    fn opaque_blend_replaces() {
        let mut img = Image::new(1, 1);
        img.fill(Rgba([0x10, 0x20, 0x30, 0xff]));
        img.blend_pixel(0, 0, RED);
        assert_eq!(img.pixel(0, 0), Some(RED));
    }

    #[test]
    fn half_alpha_black_over_white_is_mid_grey() {
        let mut img = Image::new(1, 1);
        img.fill(Rgba([0xff, 0xff, 0xff, 0xff]));
        img.blend_pixel(0, 0, Rgba([0, 0, 0, 0x80]));
        let p = img.pixel(0, 0).unwrap();
        assert_eq!(p[3], 0xff);
        assert!((0x7d..=0x80).contains(&p[0]), "got {p:?}");
        assert_eq!(p[0], p[1]);
        assert_eq!(p[1], p[2]);
    }

    #[test]
    fn transparent_blend_is_noop() {
        let mut img = Image::new(1, 1);
        img.fill(RED);
        img.blend_pixel(0, 0, TRANSPARENT);
        assert_eq!(img.pixel(0, 0), Some(RED));
    }

    #[test]
    fn resize_reallocates_and_clears() {
        let mut img = Image::new(2, 2);
        img.fill(RED);
        img.resize(5, 3);
        assert_eq!(img.size(), (5, 3));
        assert_eq!(img.as_raw().len(), 5 * 3 * 4);
        assert!(img.enumerate_pixels().all(|(_, _, p)| p == TRANSPARENT));
    }
}
