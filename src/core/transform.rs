// 2D affine placement shared by every on-screen entity

use glam::{DAffine2, DVec2};
use log::warn;

/// Smallest scale magnitude a transform will accept
pub const MIN_SCALE_MAGNITUDE: f64 = 1e-6;

/// Translation plus independent x/y scale, stored as a single 2x3 affine map.
///
/// Operations compose the way a draw-options matrix does: every call is
/// applied *after* the existing map, so scaling also scales the current
/// translation. The sign of the x scale encodes horizontal flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    affine: DAffine2,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    /// Identity transform at the world origin
    pub fn new() -> Self {
        Self {
            affine: DAffine2::IDENTITY,
        }
    }

    /// Move by `delta` in world units
    pub fn translate(&mut self, delta: DVec2) {
        self.affine = DAffine2::from_translation(delta) * self.affine;
    }

    /// Scale the whole map (translation included) by `factor`
    ///
    /// Zero or non-finite factors are clamped so the map stays invertible.
    pub fn scale(&mut self, factor: DVec2) {
        let factor = DVec2::new(sanitize_factor(factor.x), sanitize_factor(factor.y));
        self.affine = DAffine2::from_scale(factor) * self.affine;
    }

    /// Raw translation component (tx, ty)
    pub fn translation(&self) -> DVec2 {
        self.affine.translation
    }

    /// Signed x scale; negative means the entity faces left
    pub fn scale_x(&self) -> f64 {
        self.affine.matrix2.x_axis.x
    }

    pub fn scale_y(&self) -> f64 {
        self.affine.matrix2.y_axis.y
    }

    /// Absolute scale factors
    pub fn scale_abs(&self) -> DVec2 {
        DVec2::new(self.scale_x().abs(), self.scale_y().abs())
    }

    pub fn is_flipped(&self) -> bool {
        self.scale_x() < 0.0
    }

    /// The underlying affine map, for render adapters
    pub fn affine(&self) -> DAffine2 {
        self.affine
    }
}

fn sanitize_factor(factor: f64) -> f64 {
    if !factor.is_finite() {
        warn!("Non-finite scale factor {factor}, using 1.0");
        return 1.0;
    }
    if factor.abs() < MIN_SCALE_MAGNITUDE {
        warn!("Scale factor {factor} too small, clamping to {MIN_SCALE_MAGNITUDE}");
        return if factor.is_sign_negative() {
            -MIN_SCALE_MAGNITUDE
        } else {
            MIN_SCALE_MAGNITUDE
        };
    }
    factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_is_identity() {
        let transform = Transform::new();
        assert_eq!(transform.translation(), DVec2::ZERO);
        assert_eq!(transform.scale_x(), 1.0);
        assert_eq!(transform.scale_y(), 1.0);
        assert!(!transform.is_flipped());
    }

    #[test]
    fn test_scale_applies_to_translation() {
        let mut transform = Transform::new();
        transform.translate(DVec2::new(50.0, 50.0));
        transform.scale(DVec2::new(2.0, 0.5));

        assert_relative_eq!(transform.translation().x, 100.0);
        assert_relative_eq!(transform.translation().y, 25.0);
        assert_relative_eq!(transform.scale_x(), 2.0);
        assert_relative_eq!(transform.scale_y(), 0.5);
    }

    #[test]
    fn test_translate_after_scale_is_unscaled() {
        let mut transform = Transform::new();
        transform.scale(DVec2::new(3.0, 3.0));
        transform.translate(DVec2::new(10.0, -4.0));

        assert_relative_eq!(transform.translation().x, 10.0);
        assert_relative_eq!(transform.translation().y, -4.0);
    }

    #[test]
    fn test_negative_scale_flips() {
        let mut transform = Transform::new();
        transform.scale(DVec2::new(-1.5, 1.0));
        assert!(transform.is_flipped());
        assert_relative_eq!(transform.scale_abs().x, 1.5);
    }

    #[test]
    fn test_zero_scale_is_clamped() {
        let mut transform = Transform::new();
        transform.scale(DVec2::new(0.0, f64::NAN));
        assert!(transform.scale_x().abs() >= MIN_SCALE_MAGNITUDE);
        assert_eq!(transform.scale_y(), 1.0);
    }
}
