use crate::graphics::Image;

/// Game contract implemented by the application.
///
/// The runtime owns the value for the whole run and is the only caller:
/// - [`layout`](Game::layout) whenever the host surface size may have changed
/// - [`update`](Game::update) once per logical tick, at a fixed rate
/// - [`draw`](Game::draw) once per presented frame
///
/// All three are invoked from the event-loop thread.
pub trait Game {
    /// Advances the game state by one tick.
    ///
    /// Returning an error ends the run. Return [`Termination`](super::Termination)
    /// to end it cleanly.
    fn update(&mut self) -> anyhow::Result<()>;

    /// Renders the current state onto `screen`.
    fn draw(&mut self, screen: &mut Image);

    /// Maps the outside (window) size in logical pixels to the canvas size.
    fn layout(&mut self, outside_width: u32, outside_height: u32) -> (u32, u32);
}

impl<G: Game + ?Sized> Game for Box<G> {
    fn update(&mut self) -> anyhow::Result<()> {
        (**self).update()
    }

    fn draw(&mut self, screen: &mut Image) {
        (**self).draw(screen)
    }

    fn layout(&mut self, outside_width: u32, outside_height: u32) -> (u32, u32) {
        (**self).layout(outside_width, outside_height)
    }
}
