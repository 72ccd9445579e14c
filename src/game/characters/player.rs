// Player-controlled entity

use glam::DVec2;
use log::debug;

use crate::engine::renderer::Camera;
use crate::game::combat::CritBanner;

use super::animation::Clip;
use super::entity::Entity;

/// Base movement speed; controls multiply it into per-frame displacement
pub const PLAYER_SPEED: f64 = 1.2;

/// The player's entity plus movement and combat flags
#[derive(Debug, Clone)]
pub struct Player {
    pub entity: Entity,
    /// Coins collected
    pub score: u32,
    pub is_jumping: bool,
    pub is_grounded: bool,
    pub is_attacking: bool,
    /// The current (or last) swing was the heavy one
    pub is_strong_attack: bool,
    pub facing_right: bool,
    pub speed: f64,
    /// Floating text armed by the last critical hit
    pub crit_banner: Option<CritBanner>,
    jump_started_at: f64,
}

impl Player {
    pub fn new(entity: Entity) -> Self {
        let facing_right = !entity.is_facing_left();
        Self {
            entity,
            score: 0,
            is_jumping: false,
            is_grounded: false,
            is_attacking: false,
            is_strong_attack: false,
            facing_right,
            speed: PLAYER_SPEED,
            crit_banner: None,
            jump_started_at: 0.0,
        }
    }

    /// Translate the player and pan the camera by the same delta
    pub fn move_by(&mut self, delta: DVec2, camera: &mut Camera) {
        self.entity.translate(delta);
        camera.pan(delta);
    }

    /// Flip to face the requested direction; returns true if a flip happened
    pub fn face(&mut self, right: bool) -> bool {
        if self.facing_right == right {
            return false;
        }
        self.entity.flip();
        self.facing_right = right;
        true
    }

    pub fn can_jump(&self) -> bool {
        !self.is_jumping && self.is_grounded && !self.is_attacking
    }

    pub fn start_jump(&mut self, now: f64) {
        debug!("Jump started at {now:.3}s");
        self.jump_started_at = now;
        self.is_jumping = true;
        self.is_grounded = false;
        self.entity.animation.play(Clip::Jump);
    }

    /// Seconds since the current jump started
    pub fn jump_elapsed(&self, now: f64) -> f64 {
        (now - self.jump_started_at).max(0.0)
    }

    pub fn end_jump(&mut self) {
        debug!("Jump ended");
        self.is_jumping = false;
    }

    pub fn can_attack(&self) -> bool {
        !self.is_attacking && self.is_grounded
    }

    pub fn start_attack(&mut self, strong: bool) {
        self.is_attacking = true;
        self.is_strong_attack = strong;
        let clip = if strong { Clip::AttackStrong } else { Clip::Attack };
        self.entity.animation.play(clip);
        debug!("Attack started ({})", clip.name());
    }

    /// Leave the attack and fall back to idle
    pub fn end_attack(&mut self) {
        self.is_attacking = false;
        self.entity.animation.play(Clip::Idle);
    }

    pub fn has_crit_banner(&self) -> bool {
        self.crit_banner.is_some()
    }
}
