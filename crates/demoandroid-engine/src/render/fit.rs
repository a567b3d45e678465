use crate::coords::Rect;

/// Places a `canvas` inside a `surface` (both in pixels): uniform scale, as
/// large as fits, centered.
///
/// Returns `None` when either side has no area.
pub fn fit_canvas(canvas: (u32, u32), surface: (u32, u32)) -> Option<Rect> {
    let (cw, ch) = (canvas.0 as f32, canvas.1 as f32);
    let (sw, sh) = (surface.0 as f32, surface.1 as f32);
    if cw <= 0.0 || ch <= 0.0 || sw <= 0.0 || sh <= 0.0 {
        return None;
    }

    let scale = (sw / cw).min(sh / ch);
    let (w, h) = (cw * scale, ch * scale);

    Some(Rect::new((sw - w) * 0.5, (sh - h) * 0.5, w, h))
}
