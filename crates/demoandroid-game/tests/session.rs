use std::time::Duration;

use demoandroid_engine::debug::text_bounds;
use demoandroid_engine::driver::{GameLoop, LoopConfig};
use demoandroid_game::{BACKGROUND_COLOR, GREETING, Game};

#[test]
fn one_frame_at_phone_size() {
    let mut session = GameLoop::new(Game::new(), LoopConfig::default());

    assert_eq!(session.layout(400, 800), (400, 800));
    assert_eq!(session.screen().size(), (400, 800));

    let ran = session.frame(Duration::from_millis(16)).expect("update never fails");
    assert_eq!(ran, 1);

    let bounds = text_bounds(GREETING, 0, 0);
    let mut text_pixels = 0;
    for (x, y, p) in session.screen().enumerate_pixels() {
        if bounds.contains_pixel(x, y) {
            if p != BACKGROUND_COLOR {
                text_pixels += 1;
            }
        } else {
            assert_eq!(
                p, BACKGROUND_COLOR,
                "pixel ({x}, {y}) outside the greeting"
            );
        }
    }
    assert!(text_pixels > 0, "greeting left no trace");
}

#[test]
fn many_frames_keep_running() {
    let mut session = GameLoop::new(Game::new(), LoopConfig::default());
    session.layout(400, 800);

    // Ten seconds at 50 fps.
    for _ in 0..500 {
        session.frame(Duration::from_millis(20)).expect("update never fails");
    }

    assert!(!session.is_stopped());
    assert!((595..=601).contains(&session.ticks()), "ticks = {}", session.ticks());
}

#[test]
fn rotation_follows_the_window() {
    let mut session = GameLoop::new(Game::new(), LoopConfig::default());
    session.layout(400, 800);
    session.frame(Duration::from_millis(16)).expect("update never fails");

    assert_eq!(session.layout(800, 400), (800, 400));
    session.draw();

    assert_eq!(session.screen().size(), (800, 400));
    assert_eq!(session.screen().pixel(799, 399), Some(BACKGROUND_COLOR));
}
