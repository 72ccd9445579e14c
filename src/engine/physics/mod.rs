// Platformer physics: box collision heuristics and the jump curve

pub mod collision;
pub mod jump;

pub use collision::{
    intersects, intersects_any, sideway_exception, sideway_exception_any, sideways_collision,
    sideways_collision_any, Collider, CONTACT_TOLERANCE,
};
pub use jump::{jump_curve, jump_displacement, JUMP_END_SECONDS};
