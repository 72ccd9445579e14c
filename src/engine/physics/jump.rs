// Timed jump curve and gravity displacement

use glam::DVec2;

/// Seconds after which the jump curve turns positive: `e^(2t) = 4`
pub const JUMP_END_SECONDS: f64 = std::f64::consts::LN_2;

/// Jump velocity factor at `t` seconds after the jump started.
///
/// Starts at -3 and eases towards 0; the jump is over once it turns positive.
pub fn jump_curve(t: f64) -> f64 {
    (2.0 * t).exp() - 4.0
}

/// Displacement to apply this frame for a jump started `t` seconds ago.
///
/// Returns `None` once the curve is positive, meaning the jump has ended and
/// plain gravity takes over.
pub fn jump_displacement(gravity: DVec2, t: f64) -> Option<DVec2> {
    let factor = jump_curve(t);
    if factor > 0.0 {
        return None;
    }
    Some(DVec2::new(gravity.x, gravity.y * factor))
}
