// Render boundary
//
// The simulation never draws. Each frame it hands a `RenderSink` one
// `SpriteDraw` per visible entity (sprite key, frame index, screen-space
// transform, world box) and any floating text. Image decoding and draw calls
// live behind the sink.

pub mod camera;

pub use camera::Camera;

use glam::{DAffine2, DVec2};

/// One sprite to draw this frame
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDraw<'a> {
    /// Sprite key of the current frame
    pub sprite: &'a str,
    /// Ordinal of that frame in the entity's sprite list
    pub frame_index: usize,
    /// Entity affine map with the camera offset applied
    pub screen_transform: DAffine2,
    /// Hitbox top-left in world space
    pub world_position: DVec2,
    /// Hitbox size in world units
    pub size: DVec2,
    /// Health bar fill (0-1) for entities that have health
    pub health_fraction: Option<f64>,
}

/// Receiver for the simulation's draw output
pub trait RenderSink {
    /// Draw one sprite
    fn draw_sprite(&mut self, draw: &SpriteDraw<'_>);

    /// Draw text at a screen position
    fn draw_text(&mut self, _text: &str, _screen_position: DVec2) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingSink {
        sprites: usize,
    }

    impl RenderSink for CountingSink {
        fn draw_sprite(&mut self, _draw: &SpriteDraw<'_>) {
            self.sprites += 1;
        }
    }

    #[test]
    fn test_default_draw_text_is_noop() {
        let mut sink = CountingSink::default();
        sink.draw_text("Critical!", DVec2::ZERO);
        sink.draw_sprite(&SpriteDraw {
            sprite: "coin",
            frame_index: 0,
            screen_transform: DAffine2::IDENTITY,
            world_position: DVec2::ZERO,
            size: DVec2::ONE,
            health_fraction: None,
        });
        assert_eq!(sink.sprites, 1);
    }
}
