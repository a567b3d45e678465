use demoandroid_engine::device::GpuInit;
use demoandroid_engine::logging::{LoggingConfig, init_logging};
use demoandroid_engine::window::{Runtime, RuntimeConfig};
use demoandroid_game::Game;

fn main() {
    init_logging(LoggingConfig::default());
    log::info!("starting demoandroid (desktop)");

    if let Err(err) = Runtime::run(RuntimeConfig::default(), GpuInit::default(), Game::new()) {
        log::error!("demoandroid exited with an error: {err:#}");
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
