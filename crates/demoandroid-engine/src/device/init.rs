/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available.
    ///
    /// The screen image holds sRGB-encoded bytes; an sRGB target keeps them
    /// displayed as authored.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior). FIFO is the one mode every backend supports.
    pub present_mode: wgpu::PresentMode,

    /// Adapter selection hint. Phones prefer the low-power GPU.
    pub power_preference: wgpu::PowerPreference,

    /// Limits requested from the adapter/device.
    ///
    /// Downlevel defaults so GLES-only Android devices can still get a device.
    pub required_limits: wgpu::Limits,

    /// Desired maximum frame latency for the surface (a hint).
    pub desired_maximum_frame_latency: u32,
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::Fifo,
            power_preference: wgpu::PowerPreference::LowPower,
            required_limits: wgpu::Limits::downlevel_defaults(),
            desired_maximum_frame_latency: 2,
        }
    }
}
