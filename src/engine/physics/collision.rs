// Axis-aligned collision tests
//
// Three tiers, each narrowing the previous one:
// - `intersects`: strict box overlap
// - `sideways_collision`: overlap where A is not resting on top of B
// - `sideway_exception`: sideways contact where the horizontal spans are
//   separated by at least the tolerance, so gravity keeps applying at ledge
//   corners instead of pinning the entity to the wall

use crate::core::Rect;

/// Vertical/horizontal slack (world units) used by the contact heuristics
pub const CONTACT_TOLERANCE: f64 = 10.0;

/// Anything with a world-space box that can take part in collision tests
pub trait Collider {
    /// World-space bounding box
    fn bounds(&self) -> Rect;

    /// Whether other entities should collide with this one
    fn is_collidable(&self) -> bool;
}

impl Collider for Rect {
    fn bounds(&self) -> Rect {
        *self
    }

    fn is_collidable(&self) -> bool {
        true
    }
}

/// Strict AABB overlap; touching edges do not count
pub fn intersects<A, B>(a: &A, b: &B) -> bool
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    a.bounds().overlaps(&b.bounds())
}

/// Overlap where A's bottom edge is not within the tolerance of B's top edge
pub fn sideways_collision<A, B>(a: &A, b: &B) -> bool
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    if !intersects(a, b) {
        return false;
    }

    let a_box = a.bounds();
    let b_box = b.bounds();

    !(a_box.bottom() - CONTACT_TOLERANCE <= b_box.top())
}

/// Sideways contact with horizontal spans separated by at least the tolerance
pub fn sideway_exception<A, B>(a: &A, b: &B) -> bool
where
    A: Collider + ?Sized,
    B: Collider + ?Sized,
{
    if !sideways_collision(a, b) {
        return false;
    }

    let a_box = a.bounds();
    let b_box = b.bounds();

    a_box.right() - CONTACT_TOLERANCE <= b_box.left()
        || b_box.right() - CONTACT_TOLERANCE <= a_box.left()
}

/// True on the first collidable element overlapping `entity`
pub fn intersects_any<A, B>(entity: &A, others: &[B]) -> bool
where
    A: Collider + ?Sized,
    B: Collider,
{
    others
        .iter()
        .any(|other| other.is_collidable() && intersects(entity, other))
}

/// True on the first collidable element touching `entity` from the side
pub fn sideways_collision_any<A, B>(entity: &A, others: &[B]) -> bool
where
    A: Collider + ?Sized,
    B: Collider,
{
    others
        .iter()
        .any(|other| other.is_collidable() && sideways_collision(entity, other))
}

/// True on the first collidable element granting a sideway exception
pub fn sideway_exception_any<A, B>(entity: &A, others: &[B]) -> bool
where
    A: Collider + ?Sized,
    B: Collider,
{
    others
        .iter()
        .any(|other| other.is_collidable() && sideway_exception(entity, other))
}
