//! Time subsystem.
//!
//! - `FrameClock` measures wall time between presented frames
//! - `TickScheduler` turns those deltas into a fixed number of logical ticks
//!
//! Keeping the two apart makes `update` frequency independent of the display
//! refresh rate.

mod frame_clock;
mod tick;

pub use frame_clock::{FrameClock, FrameTime};
pub use tick::{DEFAULT_MAX_TICKS_PER_FRAME, DEFAULT_TPS, TickScheduler};
