//! GPU presentation of the CPU screen image.
//!
//! Games draw into an [`Image`](crate::graphics::Image); [`ScreenRenderer`]
//! uploads it to a texture and scales it onto the window surface, letterboxed.

mod ctx;
mod fit;
mod screen;

pub use ctx::{RenderCtx, RenderTarget};
pub use fit::fit_canvas;
pub use screen::{LETTERBOX_COLOR, ScreenRenderer};
