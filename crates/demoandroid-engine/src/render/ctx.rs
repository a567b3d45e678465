use crate::device::{Gpu, GpuFrame};

/// Device access for one frame of rendering.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Physical pixels.
    pub surface_size: (u32, u32),
}

impl<'a> RenderCtx<'a> {
    pub fn from_gpu(gpu: &'a Gpu<'_>) -> Self {
        let size = gpu.size();
        Self {
            device: gpu.device(),
            queue: gpu.queue(),
            surface_format: gpu.surface_format(),
            surface_size: (size.width, size.height),
        }
    }
}

/// Encoder and swapchain view the frame is recorded into.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    pub fn from_frame(frame: &'a mut GpuFrame) -> Self {
        Self {
            encoder: &mut frame.encoder,
            color_view: &frame.view,
        }
    }
}
