use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::Game;
use crate::device::{Gpu, GpuInit, SurfaceErrorAction};
use crate::driver::{GameLoop, LoopConfig};
use crate::graphics::Image;
use crate::render::{RenderCtx, RenderTarget, ScreenRenderer};
use crate::time::FrameClock;

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Ignored on Android, where the activity decides.
    pub initial_size: LogicalSize<f64>,
    pub resizable: bool,
    pub loop_config: LoopConfig,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "demoandroid".to_string(),
            initial_size: LogicalSize::new(400.0, 800.0),
            resizable: true,
            loop_config: LoopConfig::default(),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `game` in a desktop window until it is closed or the game stops.
    pub fn run<G>(config: RuntimeConfig, gpu_init: GpuInit, game: G) -> Result<()>
    where
        G: Game + 'static,
    {
        config.loop_config.validate().context("invalid loop config")?;
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        Self::drive(event_loop, config, gpu_init, game)
    }

    /// Runs `game` inside the Android activity `app`.
    #[cfg(target_os = "android")]
    pub fn run_android<G>(
        app: winit::platform::android::activity::AndroidApp,
        config: RuntimeConfig,
        gpu_init: GpuInit,
        game: G,
    ) -> Result<()>
    where
        G: Game + 'static,
    {
        use winit::platform::android::EventLoopBuilderExtAndroid;

        config.loop_config.validate().context("invalid loop config")?;
        let event_loop = EventLoop::builder()
            .with_android_app(app)
            .build()
            .context("failed to create winit EventLoop for the activity")?;
        Self::drive(event_loop, config, gpu_init, game)
    }

    fn drive<G>(
        event_loop: EventLoop<()>,
        config: RuntimeConfig,
        gpu_init: GpuInit,
        game: G,
    ) -> Result<()>
    where
        G: Game + 'static,
    {
        let mut state = AppState::new(config, gpu_init, game);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.failure.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

#[self_referencing]
struct WindowEntry {
    clock: FrameClock,
    renderer: ScreenRenderer,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

enum Flow {
    Continue,
    Exit,
}

struct AppState<G>
where
    G: Game + 'static,
{
    config: RuntimeConfig,
    gpu_init: GpuInit,
    game_loop: GameLoop<G>,

    /// Present only between `resumed` and `suspended`.
    entry: Option<WindowEntry>,
    failure: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<G> AppState<G>
where
    G: Game + 'static,
{
    fn new(config: RuntimeConfig, gpu_init: GpuInit, game: G) -> Self {
        let game_loop = GameLoop::new(game, config.loop_config.clone());
        Self {
            config,
            gpu_init,
            game_loop,
            entry: None,
            failure: None,
            exit_requested: false,
        }
    }

    fn request_exit(&mut self, event_loop: &ActiveEventLoop) {
        self.exit_requested = true;
        self.entry = None;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        self.failure = Some(err);
        self.request_exit(event_loop);
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<WindowId> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        let id = window.id();
        let gpu_init = self.gpu_init.clone();

        let entry = WindowEntryTryBuilder {
            clock: FrameClock::new(),
            renderer: ScreenRenderer::new(),
            window,
            gpu_builder: |w| {
                pollster::block_on(Gpu::new(w, gpu_init))
                    .context("GPU initialization failed")
            },
        }
        .try_build()?;

        let (w, h) = entry.with_window(|w| logical_size(w));
        let canvas = self.game_loop.layout(w, h);
        log::info!("window {w}x{h} (logical), canvas {}x{}", canvas.0, canvas.1);

        self.game_loop.reset_timing();
        self.entry = Some(entry);
        Ok(id)
    }

    fn on_resize(&mut self, new_size: PhysicalSize<u32>) {
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        entry.with_gpu_mut(|gpu| gpu.resize(new_size));
        let (w, h) = entry.with_window(|w| logical_size(w));
        self.game_loop.layout(w, h);
        entry.with_window(|w| w.request_redraw());
    }

    fn on_redraw(&mut self, event_loop: &ActiveEventLoop) {
        let game_loop = &mut self.game_loop;
        let Some(entry) = self.entry.as_mut() else {
            return;
        };

        let step: Result<Flow> = entry.with_mut(|fields| {
            let ft = fields.clock.tick();

            if let Err(err) = game_loop.frame(ft.dt) {
                err.into_result()?;
                return Ok(Flow::Exit);
            }

            present(fields.gpu, fields.renderer, game_loop.screen())?;
            Ok(Flow::Continue)
        });

        match step {
            Ok(Flow::Continue) => {}
            Ok(Flow::Exit) => {
                log::info!("game terminated after {} ticks", self.game_loop.ticks());
                self.request_exit(event_loop);
            }
            Err(err) => self.fail(event_loop, err),
        }
    }
}

impl<G> ApplicationHandler for AppState<G>
where
    G: Game + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.entry.is_some() || self.exit_requested {
            return;
        }

        log::info!("resumed");
        match self.create_window_entry(event_loop) {
            Ok(_) => {
                if let Some(entry) = self.entry.as_ref() {
                    entry.with_window(|w| w.request_redraw());
                }
            }
            Err(e) => self.fail(event_loop, e.context("failed to create game window")),
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        // The native window (and with it the surface) goes away on Android.
        log::info!("suspended; releasing window and GPU surface");
        self.entry = None;
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::Wait);

        // Continuous redraw.
        if let Some(entry) = self.entry.as_ref() {
            entry.with_window(|w| w.request_redraw());
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let ours = self
            .entry
            .as_ref()
            .is_some_and(|e| e.with_window(|w| w.id() == window_id));
        if !ours {
            return;
        }

        match event {
            WindowEvent::CloseRequested => {
                log::info!("close requested");
                self.request_exit(event_loop);
            }

            WindowEvent::Resized(new_size) => self.on_resize(new_size),

            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self
                    .entry
                    .as_ref()
                    .map(|e| e.with_window(|w| w.inner_size()));
                if let Some(size) = size {
                    self.on_resize(size);
                }
            }

            WindowEvent::RedrawRequested => self.on_redraw(event_loop),

            _ => {}
        }
    }
}

/// Window inner size in logical pixels, rounded.
fn logical_size(window: &Window) -> (u32, u32) {
    let size: LogicalSize<f64> = window.inner_size().to_logical(window.scale_factor());
    (size.width.round() as u32, size.height.round() as u32)
}

/// Uploads the screen and presents one frame.
///
/// Transient surface errors skip the frame; only unrecoverable ones are
/// returned.
fn present(gpu: &mut Gpu<'_>, renderer: &mut ScreenRenderer, screen: &Image) -> Result<()> {
    let mut frame = match gpu.begin_frame() {
        Ok(frame) => frame,
        Err(err) => {
            log::warn!("surface error: {err}");
            return match gpu.handle_surface_error(err) {
                SurfaceErrorAction::Fatal => Err(anyhow::anyhow!("surface became unusable")),
                SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => Ok(()),
            };
        }
    };

    {
        let ctx = RenderCtx::from_gpu(gpu);
        let mut target = RenderTarget::from_frame(&mut frame);
        renderer.render(&ctx, &mut target, screen);
    }

    gpu.submit(frame);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Idle;

    impl Game for Idle {
        fn update(&mut self) -> Result<()> {
            Ok(())
        }

        fn draw(&mut self, _screen: &mut Image) {}

        fn layout(&mut self, w: u32, h: u32) -> (u32, u32) {
            (w, h)
        }
    }

    #[test]
    fn zero_tick_rate_is_reported_before_any_window_exists() {
        let mut config = RuntimeConfig::default();
        config.loop_config.ticks_per_second = 0;

        let err = Runtime::run(config, GpuInit::default(), Idle).unwrap_err();
        assert!(format!("{err:#}").contains("ticks_per_second must be positive"));
    }

    #[test]
    fn default_config_is_portrait_phone() {
        let config = RuntimeConfig::default();
        assert_eq!(config.title, "demoandroid");
        assert_eq!(config.initial_size, LogicalSize::new(400.0, 800.0));
        assert!(config.resizable);
        assert!(config.loop_config.validate().is_ok());
    }
}
