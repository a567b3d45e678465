//! Geometry shared by the debug text and presentation code.
//!
//! Pixels, origin top-left, +X right, +Y down.

mod rect;

pub use rect::Rect;
