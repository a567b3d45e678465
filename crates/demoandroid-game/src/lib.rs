//! The demoandroid game.
//!
//! A single stateless screen: a lavender background with a greeting printed
//! through the engine's debug overlay.

use demoandroid_engine::core::Game as EngineGame;
use demoandroid_engine::debug::debug_print;
use demoandroid_engine::graphics::{Image, Rgba};

/// Opaque lavender filling the whole canvas.
pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([0xcf, 0xba, 0xf0, 0xff]);

/// Debug line printed at the top-left corner.
pub const GREETING: &str = "Hola Android desde Rust!";

/// The game. Carries no state.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Game;

impl Game {
    pub fn new() -> Self {
        Self
    }
}

impl EngineGame for Game {
    fn update(&mut self) -> anyhow::Result<()> {
        Ok(())
    }

    fn draw(&mut self, screen: &mut Image) {
        screen.fill(BACKGROUND_COLOR);
        debug_print(screen, GREETING);
    }

    /// The canvas always matches the window.
    fn layout(&mut self, outside_width: u32, outside_height: u32) -> (u32, u32) {
        (outside_width, outside_height)
    }
}

#[cfg(test)]
mod tests {
    use demoandroid_engine::debug::text_bounds;

    use super::*;

    fn pixels_outside_text(img: &Image) -> Vec<Rgba<u8>> {
        let bounds = text_bounds(GREETING, 0, 0);
        img.enumerate_pixels()
            .filter(|(x, y, _)| !bounds.contains_pixel(*x, *y))
            .map(|(_, _, p)| p)
            .collect()
    }

    #[test]
    fn layout_is_identity() {
        let mut game = Game::new();
        let sizes = [
            (0, 0),
            (1, 1),
            (400, 800),
            (800, 400),
            (u32::MAX, u32::MAX),
            (0, 7),
        ];
        for (w, h) in sizes {
            assert_eq!(game.layout(w, h), (w, h));
        }
    }

    #[test]
    fn update_never_fails() {
        let mut game = Game::new();
        for _ in 0..10_000 {
            assert!(game.update().is_ok());
        }
    }

    #[test]
    fn draw_covers_previous_contents() {
        let mut game = Game::new();

        let mut dirty = Image::new(320, 240);
        dirty.fill(Rgba([0x12, 0x34, 0x56, 0x78]));
        dirty.set_pixel(300, 200, Rgba([0xff, 0, 0, 0xff]));
        game.draw(&mut dirty);

        let mut clean = Image::new(320, 240);
        game.draw(&mut clean);

        assert_eq!(dirty.as_raw(), clean.as_raw());
        assert!(pixels_outside_text(&clean).iter().all(|p| *p == BACKGROUND_COLOR));
    }

    #[test]
    fn draw_is_idempotent() {
        let mut game = Game::new();
        let mut img = Image::new(64, 48);

        game.draw(&mut img);
        let first = img.as_raw().to_vec();
        game.draw(&mut img);

        assert_eq!(img.as_raw(), first.as_slice());
    }

    #[test]
    fn greeting_is_drawn_the_same_at_any_canvas_size() {
        let mut game = Game::new();
        let bounds = text_bounds(GREETING, 0, 0);
        let (bw, bh) = (bounds.width as u32, bounds.height as u32);

        let mut small = Image::new(bw, bh);
        let mut large = Image::new(1080, 1920);
        game.draw(&mut small);
        game.draw(&mut large);

        for y in 0..bh {
            for x in 0..bw {
                assert_eq!(
                    small.pixel(x, y),
                    large.pixel(x, y),
                    "mismatch at ({x}, {y})"
                );
            }
        }
        // Some glyph pixel actually differs from the background.
        assert!(small.enumerate_pixels().any(|(_, _, p)| p != BACKGROUND_COLOR));
    }

    #[test]
    fn draw_on_empty_canvas_is_a_no_op() {
        let mut game = Game::new();
        let mut img = Image::new(0, 0);
        game.draw(&mut img);
        assert!(img.is_empty());
    }
}
