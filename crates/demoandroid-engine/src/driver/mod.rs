//! Platform-independent game loop.
//!
//! [`GameLoop`] owns the game and its screen image and sequences the
//! `layout` / `update` / `draw` callbacks. The window runtime feeds it sizes and
//! frame deltas; tests drive it directly without a window or GPU.

mod error;
mod game_loop;

pub use error::LoopError;
pub use game_loop::{GameLoop, LoopConfig};
