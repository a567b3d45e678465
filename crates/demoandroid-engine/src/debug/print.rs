use image::Rgba;

use crate::coords::Rect;
use crate::graphics::{Image, WHITE};

use super::font::{GLYPH_HEIGHT, GLYPH_WIDTH, glyph_pixels};

/// Foreground color of debug text.
pub const TEXT_COLOR: Rgba<u8> = WHITE;

/// Drop-shadow color, drawn under the foreground.
pub const SHADOW_COLOR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0x80]);

/// Shadow displacement in pixels (right and down).
pub const SHADOW_OFFSET: u32 = 1;

/// Prints `text` at the top-left corner of `image`.
pub fn debug_print(image: &mut Image, text: &str) {
    debug_print_at(image, text, 0, 0);
}

/// Prints `text` with its first glyph cell at `(x, y)`.
///
/// `\n` moves to the next line. Pixels falling outside `image` are dropped.
pub fn debug_print_at(image: &mut Image, text: &str, x: i32, y: i32) {
    let shadow = SHADOW_OFFSET as i32;
    draw_pass(image, text, x + shadow, y + shadow, SHADOW_COLOR);
    draw_pass(image, text, x, y, TEXT_COLOR);
}

/// Returns the area a `debug_print_at(_, text, x, y)` call may touch.
///
/// Covers every glyph cell plus the shadow offset. Empty for text without
/// printable characters.
pub fn text_bounds(text: &str, x: i32, y: i32) -> Rect {
    let columns = lines(text)
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u32;
    if columns == 0 {
        return Rect::new(x as f32, y as f32, 0.0, 0.0);
    }
    let rows = lines(text).count() as u32;

    Rect::new(
        x as f32,
        y as f32,
        (columns * GLYPH_WIDTH + SHADOW_OFFSET) as f32,
        (rows * GLYPH_HEIGHT + SHADOW_OFFSET) as f32,
    )
}

/// Splits on `\n`; a `\r` right before it belongs to the line break.
fn lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

fn draw_pass(image: &mut Image, text: &str, x: i32, y: i32, color: Rgba<u8>) {
    for (row, line) in lines(text).enumerate() {
        let line_y = y as i64 + (row as u32 * GLYPH_HEIGHT) as i64;
        for (col, c) in line.chars().enumerate() {
            let cell_x = x as i64 + (col as u32 * GLYPH_WIDTH) as i64;
            for (gx, gy) in glyph_pixels(c) {
                image.blend_pixel(cell_x + gx as i64, line_y + gy as i64, color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba<u8> = Rgba([0x20, 0x40, 0x60, 0xff]);

    fn canvas(w: u32, h: u32) -> Image {
        let mut img = Image::new(w, h);
        img.fill(BG);
        img
    }

    #[test]
    fn bounds_cover_glyphs_and_shadow() {
        let b = text_bounds("abc", 0, 0);
        assert_eq!(b, Rect::new(0.0, 0.0, 25.0, 9.0));
    }

    #[test]
    fn bounds_use_longest_line() {
        let b = text_bounds("ab\nwxyz\n", 4, 2);
        assert_eq!(b, Rect::new(4.0, 2.0, 33.0, 25.0));
    }

    #[test]
    fn empty_text_has_empty_bounds() {
        assert!(text_bounds("", 3, 3).is_empty());
    }

    #[test]
    fn nothing_is_drawn_outside_bounds() {
        let cases = [
            ("Hi!\n#@", 5, 3),
            ("ab\r\ncd", 0, 0),
            ("x\r\n\r\nyz\r", 2, 1),
        ];
        for (text, x, y) in cases {
            let mut img = canvas(64, 32);
            debug_print_at(&mut img, text, x, y);
            let bounds = text_bounds(text, x, y);

            for (px, py, p) in img.enumerate_pixels() {
                if !bounds.contains_pixel(px, py) {
                    assert_eq!(
                        p, BG,
                        "{text:?}: pixel ({px}, {py}) changed outside {bounds:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn crlf_breaks_lines_like_lf() {
        let mut crlf = canvas(32, 24);
        let mut lf = canvas(32, 24);
        debug_print(&mut crlf, "ab\r\ncd");
        debug_print(&mut lf, "ab\ncd");

        assert_eq!(crlf.as_raw(), lf.as_raw());
        assert_eq!(text_bounds("ab\r\ncd", 0, 0), text_bounds("ab\ncd", 0, 0));
    }

    #[test]
    fn foreground_pixels_are_text_color() {
        let mut img = canvas(16, 16);
        debug_print(&mut img, "_");
        // '_' occupies the whole last row of its cell.
        for x in 0..GLYPH_WIDTH {
            assert_eq!(img.pixel(x, 7), Some(TEXT_COLOR));
        }
        // Its shadow lands one row below, blended over the background.
        let shadowed = img.pixel(3, 8).unwrap();
        assert_ne!(shadowed, BG);
        assert_ne!(shadowed, TEXT_COLOR);
    }

    #[test]
    fn drawing_is_clipped_at_image_edges() {
        let mut img = canvas(4, 4);
        debug_print_at(&mut img, "WWWW", -6, -6);
        debug_print_at(&mut img, "WWWW", 2, 2);
        assert_eq!(img.size(), (4, 4));
    }

    #[test]
    fn output_does_not_depend_on_canvas_size() {
        let mut small = canvas(40, 12);
        let mut large = canvas(400, 300);
        debug_print(&mut small, "ok");
        debug_print(&mut large, "ok");

        for (x, y, p) in small.enumerate_pixels() {
            assert_eq!(large.pixel(x, y), Some(p));
        }
    }
}
