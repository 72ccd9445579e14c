// Core math: rectangles, scalar helpers and the affine transform

pub mod math;
pub mod transform;

pub use math::Rect;
pub use transform::Transform;
