//! CPU-side drawing surfaces.
//!
//! The screen handed to [`Game::draw`](crate::core::Game::draw) is an [`Image`]:
//! straight-alpha RGBA8, row-major, origin top-left, +Y down. The runtime
//! uploads it to the GPU after `draw` returns.

mod image;

pub use self::image::Image;

pub use ::image::Rgba;

/// Opaque black.
pub const BLACK: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);

/// Opaque white.
pub const WHITE: Rgba<u8> = Rgba([0xff, 0xff, 0xff, 0xff]);

/// Fully transparent black (the cleared state).
pub const TRANSPARENT: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0x00]);
