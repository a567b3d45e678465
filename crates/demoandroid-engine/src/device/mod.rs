//! GPU device + surface management.
//!
//! - creates the wgpu Instance/Adapter/Device/Queue for the game window
//! - configures the surface and keeps it in step with window resizes
//! - hands out one encoder + swapchain view per presented frame

mod gpu;
mod init;
mod surface;

pub use gpu::{Gpu, GpuFrame};
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;
