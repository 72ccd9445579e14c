// Camera offset for side-scrolling rendering

use glam::{DAffine2, DVec2};

use crate::core::Rect;

/// 2D camera: a world-space offset subtracted from everything drawn
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space (top-left of the view)
    pub position: DVec2,
    /// Viewport size in world units
    viewport: DVec2,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: DVec2, viewport: DVec2) -> Self {
        Self { position, viewport }
    }

    /// Camera that puts a sprite of `sprite_size` whose transform starts at
    /// `anchor` in the middle of the viewport
    pub fn centered_on(anchor: DVec2, sprite_size: DVec2, viewport: DVec2) -> Self {
        let position = anchor - (viewport / 2.0 - sprite_size / 2.0);
        Self::new(position, viewport)
    }

    /// Shift the camera by `delta` world units
    pub fn pan(&mut self, delta: DVec2) {
        self.position += delta;
    }

    /// Convert world coordinates to screen coordinates
    pub fn world_to_screen(&self, world_pos: DVec2) -> DVec2 {
        world_pos - self.position
    }

    /// Screen-space version of an entity's affine map
    pub fn view_transform(&self, world: DAffine2) -> DAffine2 {
        DAffine2::from_translation(-self.position) * world
    }

    /// Get the viewport bounds in world coordinates
    pub fn viewport_bounds(&self) -> Rect {
        Rect {
            min: self.position,
            size: self.viewport,
        }
    }

    /// Whether any part of a world-space rectangle is on screen
    pub fn is_visible(&self, rect: &Rect) -> bool {
        self.viewport_bounds().overlaps(rect)
    }
}
