//! Android entry point for demoandroid.
//!
//! The platform loads this library and calls `android_main`. The game is built
//! here and handed to the runtime by value; nothing is registered globally.

use demoandroid_engine::device::GpuInit;
use demoandroid_engine::window::RuntimeConfig;
use demoandroid_game::Game;

/// Everything the runtime needs for one run: the game plus its configuration.
#[derive(Debug)]
pub struct Session {
    pub config: RuntimeConfig,
    pub gpu_init: GpuInit,
    pub game: Game,
}

impl Session {
    /// Moves the game into the runtime bound to the activity `app`.
    #[cfg(target_os = "android")]
    pub fn run_android(
        self,
        app: winit::platform::android::activity::AndroidApp,
    ) -> anyhow::Result<()> {
        demoandroid_engine::window::Runtime::run_android(app, self.config, self.gpu_init, self.game)
    }
}

/// Builds the single game session of this process.
pub fn session() -> Session {
    Session {
        config: RuntimeConfig::default(),
        gpu_init: GpuInit::default(),
        game: Game::new(),
    }
}

/// Does nothing. Exported so the shared library always has a C symbol to link.
#[unsafe(no_mangle)]
pub extern "C" fn demoandroid_keepalive() {}

#[cfg(target_os = "android")]
#[unsafe(no_mangle)]
fn android_main(app: winit::platform::android::activity::AndroidApp) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("demoandroid"),
    );
    log::info!("android_main: starting demoandroid");

    match session().run_android(app) {
        Ok(()) => log::info!("android_main: finished"),
        Err(err) => log::error!("android_main: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use demoandroid_engine::driver::GameLoop;
    use demoandroid_game::BACKGROUND_COLOR;

    use super::*;

    #[test]
    fn session_carries_the_game_with_portrait_defaults() {
        let s = session();
        assert_eq!(s.game, Game::new());
        assert_eq!(s.config.title, "demoandroid");
        assert_eq!(s.config.initial_size.width, 400.0);
        assert_eq!(s.config.initial_size.height, 800.0);
    }

    #[test]
    fn registered_game_is_the_one_that_runs() {
        let Session { config, game, .. } = session();

        // The loop takes the game by value; it is the only owner from here on.
        let mut game_loop = GameLoop::new(game, config.loop_config);
        game_loop.layout(400, 800);
        game_loop.frame(Duration::from_millis(16)).expect("update never fails");

        assert_eq!(game_loop.ticks(), 1);
        assert_eq!(game_loop.screen().pixel(399, 799), Some(BACKGROUND_COLOR));
        assert_eq!(game_loop.into_game(), Game::new());
    }

    #[test]
    fn keepalive_is_callable() {
        demoandroid_keepalive();
    }
}
