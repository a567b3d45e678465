use winit::dpi::PhysicalSize;

/// What the runtime should do after a failed frame acquisition.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// The surface was configured again; the next frame should succeed.
    Reconfigured,
    /// Nothing to fix; drop this frame.
    SkipFrame,
    /// The device cannot continue (out of memory).
    Fatal,
}

pub(crate) fn choose_surface_format(
    caps: &wgpu::SurfaceCapabilities,
    prefer_srgb: bool,
) -> Option<wgpu::TextureFormat> {
    if prefer_srgb {
        if let Some(f) = caps.formats.iter().copied().find(|f| f.is_srgb()) {
            return Some(f);
        }
    }
    caps.formats.first().copied()
}

pub(crate) fn choose_alpha_mode(caps: &wgpu::SurfaceCapabilities) -> wgpu::CompositeAlphaMode {
    // The game screen is opaque; ask the compositor not to blend it.
    if caps.alpha_modes.contains(&wgpu::CompositeAlphaMode::Opaque) {
        wgpu::CompositeAlphaMode::Opaque
    } else {
        caps.alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

pub(crate) fn apply_resize(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &mut wgpu::SurfaceConfiguration,
    size: &mut PhysicalSize<u32>,
    new_size: PhysicalSize<u32>,
) {
    *size = new_size;

    // wgpu rejects 0x0 configurations; defer until the window has area again.
    if new_size.width == 0 || new_size.height == 0 {
        return;
    }

    config.width = new_size.width;
    config.height = new_size.height;
    surface.configure(device, config);
}

pub(crate) fn map_surface_error(
    surface: &wgpu::Surface,
    device: &wgpu::Device,
    config: &wgpu::SurfaceConfiguration,
    size: PhysicalSize<u32>,
    err: wgpu::SurfaceError,
) -> SurfaceErrorAction {
    match err {
        wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => {
            if size.width > 0 && size.height > 0 {
                surface.configure(device, config);
            }
            SurfaceErrorAction::Reconfigured
        }
        wgpu::SurfaceError::OutOfMemory => SurfaceErrorAction::Fatal,
        wgpu::SurfaceError::Timeout => SurfaceErrorAction::SkipFrame,
        wgpu::SurfaceError::Other => SurfaceErrorAction::SkipFrame,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caps(
        formats: &[wgpu::TextureFormat],
        alpha: &[wgpu::CompositeAlphaMode],
    ) -> wgpu::SurfaceCapabilities {
        wgpu::SurfaceCapabilities {
            formats: formats.to_vec(),
            alpha_modes: alpha.to_vec(),
            ..Default::default()
        }
    }

    #[test]
    fn srgb_format_preferred_when_asked() {
        use wgpu::TextureFormat::*;
        let c = caps(&[Bgra8Unorm, Rgba8UnormSrgb], &[]);
        assert_eq!(choose_surface_format(&c, true), Some(Rgba8UnormSrgb));
        assert_eq!(choose_surface_format(&c, false), Some(Bgra8Unorm));
    }

    #[test]
    fn no_formats_means_no_surface() {
        assert_eq!(choose_surface_format(&caps(&[], &[]), true), None);
    }

    #[test]
    fn opaque_alpha_preferred() {
        use wgpu::CompositeAlphaMode::*;
        assert_eq!(choose_alpha_mode(&caps(&[], &[Inherit, Opaque])), Opaque);
        let premultiplied = caps(&[], &[PreMultiplied]);
        assert_eq!(choose_alpha_mode(&premultiplied), PreMultiplied);
        assert_eq!(choose_alpha_mode(&caps(&[], &[])), Auto);
    }
}
