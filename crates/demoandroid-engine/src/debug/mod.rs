//! Debug text overlay.
//!
//! Draws monospace text with a built-in 8x8 bitmap font straight into an
//! [`Image`](crate::graphics::Image). Meant for diagnostics, not for UI: no
//! kerning, no scaling, ASCII only.

mod font;
mod print;

pub use font::{GLYPH_HEIGHT, GLYPH_WIDTH};
pub use print::{SHADOW_COLOR, SHADOW_OFFSET, TEXT_COLOR, debug_print, debug_print_at, text_bounds};
