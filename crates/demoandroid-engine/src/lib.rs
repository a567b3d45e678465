//! demoandroid engine crate.
//!
//! A small 2D runtime in the spirit of a "game callbacks" engine: the
//! application implements [`core::Game`] and hands it to [`window::Runtime`],
//! which owns the platform loop, the fixed-rate update schedule and the GPU
//! presentation of the CPU-side screen image.

pub mod coords;
pub mod core;
pub mod debug;
pub mod device;
pub mod driver;
pub mod graphics;
pub mod logging;
pub mod render;
pub mod time;
pub mod window;
