use std::time::Duration;

use crate::core::Game;
use crate::graphics::Image;
use crate::time::{DEFAULT_MAX_TICKS_PER_FRAME, DEFAULT_TPS, TickScheduler};

use super::LoopError;

/// Loop scheduling options.
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Logical updates per second.
    pub ticks_per_second: u32,

    /// Upper bound on updates run before a single draw.
    pub max_ticks_per_frame: u32,

    /// Clear the screen to transparent black before every `draw`.
    ///
    /// Games that repaint the whole screen each frame can turn this off.
    pub clear_every_frame: bool,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            ticks_per_second: DEFAULT_TPS,
            max_ticks_per_frame: DEFAULT_MAX_TICKS_PER_FRAME,
            clear_every_frame: true,
        }
    }
}

impl LoopConfig {
    /// Rejects settings the tick scheduler cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.ticks_per_second > 0,
            "ticks_per_second must be positive"
        );
        anyhow::ensure!(
            self.max_ticks_per_frame > 0,
            "max_ticks_per_frame must be positive"
        );
        Ok(())
    }
}

/// Owns exactly one game plus the screen it draws into.
pub struct GameLoop<G: Game> {
    game: G,
    screen: Image,
    scheduler: TickScheduler,
    clear_every_frame: bool,
    ticks: u64,
    stopped: bool,
}

impl<G: Game> GameLoop<G> {
    /// Takes ownership of `game`. The screen starts empty until the first
    /// [`layout`](Self::layout).
    ///
    /// # Panics
    /// Panics on a config that fails [`LoopConfig::validate`].
    pub fn new(game: G, config: LoopConfig) -> Self {
        Self {
            game,
            screen: Image::new(0, 0),
            scheduler: TickScheduler::new(config.ticks_per_second, config.max_ticks_per_frame),
            clear_every_frame: config.clear_every_frame,
            ticks: 0,
            stopped: false,
        }
    }

    /// Asks the game for its canvas size given the outside size, resizing the
    /// screen when it changed. Returns the canvas size.
    pub fn layout(&mut self, outside_width: u32, outside_height: u32) -> (u32, u32) {
        let canvas = self.game.layout(outside_width, outside_height);
        if canvas != self.screen.size() {
            log::debug!(
                "canvas resized {:?} -> {:?} (outside {}x{})",
                self.screen.size(),
                canvas,
                outside_width,
                outside_height
            );
            self.screen.resize(canvas.0, canvas.1);
        }
        canvas
    }

    /// Runs the updates due after `dt` of wall time. Returns how many ran.
    ///
    /// The first failing update stops the batch; after that the loop is
    /// stopped and further calls run nothing.
    pub fn advance(&mut self, dt: Duration) -> Result<u32, LoopError> {
        if self.stopped {
            return Ok(0);
        }

        let due = self.scheduler.push(dt);
        for ran in 0..due {
            if let Err(err) = self.game.update() {
                self.stopped = true;
                log::debug!("update failed after {ran} of {due} ticks this frame");
                return Err(LoopError::from_update(err));
            }
            self.ticks += 1;
        }
        Ok(due)
    }

    /// Draws one frame into the screen.
    pub fn draw(&mut self) {
        if self.clear_every_frame {
            self.screen.clear();
        }
        self.game.draw(&mut self.screen);
    }

    /// `advance` then `draw`. Nothing is drawn when an update failed.
    pub fn frame(&mut self, dt: Duration) -> Result<u32, LoopError> {
        let ran = self.advance(dt)?;
        self.draw();
        Ok(ran)
    }

    /// Forgets accumulated frame time, e.g. after the app was suspended.
    pub fn reset_timing(&mut self) {
        self.scheduler.reset();
    }

    /// The screen as of the last `draw`.
    #[inline]
    pub fn screen(&self) -> &Image {
        &self.screen
    }

    #[inline]
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Total updates run so far.
    #[inline]
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn into_game(self) -> G {
        self.game
    }
}
