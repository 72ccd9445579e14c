// On-screen entity: sprites, affine placement, hitbox, health and damage log

use glam::DVec2;
use log::warn;

use crate::core::math::clamp;
use crate::core::{Rect, Transform};
use crate::engine::physics::Collider;
use crate::game::combat::DamageRecord;
use crate::game::GameError;

use super::animation::{AnimationState, Clip};
use super::stats::CombatStats;

/// Integer identity used for cross-entity references
pub type EntityId = i32;

/// Id reserved for the player
pub const PLAYER_ID: EntityId = 0;

/// Id shared by tiles, background and pickups
pub const NON_COMBATANT_ID: EntityId = -1;

/// Everything needed to build an entity.
///
/// Sizes are in source-image pixels except `spawn`, which is in world units
/// and applied after scaling.
#[derive(Debug, Clone)]
pub struct EntityDesc {
    pub id: EntityId,
    /// Ordered sprite keys resolved by the asset layer
    pub sprites: Vec<String>,
    /// Pixel size of the source frames
    pub native_size: DVec2,
    /// On-screen width; `None` keeps the native width
    pub wanted_width: Option<f64>,
    /// On-screen height; `None` keeps the native height
    pub wanted_height: Option<f64>,
    /// Hitbox width in native pixels; `None` uses the whole frame
    pub hitbox_width: Option<f64>,
    /// Hitbox height in native pixels; `None` uses the whole frame
    pub hitbox_height: Option<f64>,
    /// Hitbox offset from the frame's top-left corner, native pixels
    pub offset: DVec2,
    /// World translation applied once scaling is done
    pub spawn: DVec2,
    pub has_mass: bool,
    pub collidable: bool,
    pub stats: CombatStats,
    pub clip: Clip,
}

impl EntityDesc {
    /// Non-combatant with a single sprite and default settings
    pub fn new(id: EntityId, sprite: &str, native_size: DVec2) -> Self {
        Self {
            id,
            sprites: vec![sprite.to_string()],
            native_size,
            wanted_width: None,
            wanted_height: None,
            hitbox_width: None,
            hitbox_height: None,
            offset: DVec2::ZERO,
            spawn: DVec2::ZERO,
            has_mass: false,
            collidable: false,
            stats: CombatStats::default(),
            clip: Clip::Still,
        }
    }

    pub fn with_sprites(mut self, sprites: Vec<String>) -> Self {
        self.sprites = sprites;
        self
    }

    pub fn with_wanted_size(mut self, width: Option<f64>, height: Option<f64>) -> Self {
        self.wanted_width = width;
        self.wanted_height = height;
        self
    }

    pub fn with_hitbox(mut self, width: f64, height: f64, offset: DVec2) -> Self {
        self.hitbox_width = Some(width);
        self.hitbox_height = Some(height);
        self.offset = offset;
        self
    }

    pub fn with_spawn(mut self, spawn: DVec2) -> Self {
        self.spawn = spawn;
        self
    }

    pub fn with_mass(mut self, has_mass: bool) -> Self {
        self.has_mass = has_mass;
        self
    }

    pub fn with_collision(mut self, collidable: bool) -> Self {
        self.collidable = collidable;
        self
    }

    pub fn with_stats(mut self, stats: CombatStats) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_clip(mut self, clip: Clip) -> Self {
        self.clip = clip;
        self
    }

    /// On-screen sprite size once scaled
    pub fn drawn_size(&self) -> DVec2 {
        DVec2::new(
            self.wanted_width.unwrap_or(self.native_size.x),
            self.wanted_height.unwrap_or(self.native_size.y),
        )
    }

    /// Validate and build the entity
    pub fn build(self) -> Result<Entity, GameError> {
        let id = self.id;
        if self.sprites.is_empty() {
            return Err(GameError::MissingSprite { id });
        }

        let native_width = positive(id, "native width", self.native_size.x)?;
        let native_height = positive(id, "native height", self.native_size.y)?;
        let wanted_width = positive(id, "wanted width", self.wanted_width.unwrap_or(native_width))?;
        let wanted_height =
            positive(id, "wanted height", self.wanted_height.unwrap_or(native_height))?;
        let real_width = non_negative(id, "hitbox width", self.hitbox_width.unwrap_or(native_width))?;
        let real_height =
            non_negative(id, "hitbox height", self.hitbox_height.unwrap_or(native_height))?;
        let max_health = non_negative(id, "max health", self.stats.max_health)?;

        let crit = self.stats.crit_percent;
        if !(0.0..=100.0).contains(&crit) {
            return Err(GameError::InvalidCritChance { id, value: crit });
        }

        let mut transform = Transform::new();
        transform.scale(DVec2::new(
            wanted_width / native_width,
            wanted_height / native_height,
        ));
        transform.translate(self.spawn);

        Ok(Entity {
            id,
            sprites: self.sprites,
            transform,
            real_width,
            real_height,
            offset: self.offset,
            has_mass: self.has_mass,
            collidable: self.collidable,
            max_health,
            health: clamp(self.stats.starting_health, 0.0, max_health),
            melee_range: self.stats.melee_range.max(0.0),
            attack_damage: self.stats.attack_damage.max(0.0),
            crit_percent: crit,
            damage: Vec::new(),
            animation: AnimationState::new(self.clip),
        })
    }
}

fn positive(id: EntityId, what: &'static str, value: f64) -> Result<f64, GameError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(GameError::InvalidDimensions { id, what, value })
    }
}

fn non_negative(id: EntityId, what: &'static str, value: f64) -> Result<f64, GameError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GameError::InvalidDimensions { id, what, value })
    }
}

/// A sprite-backed object placed by a single affine transform
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    sprites: Vec<String>,
    transform: Transform,
    /// Unscaled hitbox width
    pub real_width: f64,
    /// Unscaled hitbox height
    pub real_height: f64,
    /// Hitbox offset in unscaled units
    pub offset: DVec2,
    /// Pulled down by gravity when not resting on a tile
    pub has_mass: bool,
    /// Other entities collide with this one
    pub collidable: bool,
    pub max_health: f64,
    pub health: f64,
    pub melee_range: f64,
    pub attack_damage: f64,
    pub crit_percent: f64,
    /// Hits received during the attackers' current swings
    pub damage: Vec<DamageRecord>,
    pub animation: AnimationState,
}

impl Entity {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn sprites(&self) -> &[String] {
        &self.sprites
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    /// Raw translation of the affine map, before offsets
    pub fn raw_position(&self) -> DVec2 {
        self.transform.translation()
    }

    /// World-space top-left of the hitbox
    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x(), self.y())
    }

    pub fn x(&self) -> f64 {
        let tx = self.transform.translation().x;
        let scale = self.transform.scale_x().abs();
        if self.transform.is_flipped() {
            tx - self.width() - self.offset.x * scale
        } else {
            tx + self.offset.x * scale
        }
    }

    pub fn y(&self) -> f64 {
        self.transform.translation().y + self.offset.y * self.transform.scale_y().abs()
    }

    pub fn width(&self) -> f64 {
        self.real_width * self.transform.scale_x().abs()
    }

    pub fn height(&self) -> f64 {
        self.real_height * self.transform.scale_y().abs()
    }

    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width(), self.height())
    }

    pub fn is_facing_left(&self) -> bool {
        self.transform.is_flipped()
    }

    /// Move by `delta` world units
    pub fn translate(&mut self, delta: DVec2) {
        self.transform.translate(delta);
    }

    /// Move so that `position()` lands exactly on `target`
    pub fn place_at(&mut self, target: DVec2) {
        let current = self.position();
        self.transform.translate(target - current);
    }

    /// Mirror horizontally without moving the hitbox
    pub fn flip(&mut self) {
        let origin = self.position();
        self.place_at(DVec2::ZERO);
        self.transform.scale(DVec2::new(-1.0, 1.0));
        self.transform
            .translate(DVec2::new(origin.x + self.width(), origin.y));
    }

    /// Melee reach after scaling
    pub fn range(&self) -> f64 {
        self.melee_range * self.transform.scale_x().abs()
    }

    /// Sprite index to draw, clamped into the sprite list
    pub fn sprite_index(&self) -> usize {
        let frame = self.animation.current_frame();
        let last = self.sprites.len().saturating_sub(1);
        if frame > last {
            warn!(
                "Entity {} frame {} out of range ({} sprites), clamping",
                self.id,
                frame,
                self.sprites.len()
            );
            return last;
        }
        frame
    }

    /// Sprite key for the current frame
    pub fn current_sprite(&self) -> &str {
        &self.sprites[self.sprite_index()]
    }

    /// Health as a fraction of max, for health bars; `None` for non-combatants
    pub fn health_fraction(&self) -> Option<f64> {
        if self.max_health > 0.0 {
            Some(clamp(self.health / self.max_health, 0.0, 1.0))
        } else {
            None
        }
    }

    pub fn is_defeated(&self) -> bool {
        self.max_health > 0.0 && self.health <= 0.0
    }

    /// Subtract health, never going below zero
    pub fn take_damage(&mut self, amount: f64) {
        self.health = (self.health - amount).max(0.0);
    }

    /// Add health, capped at `max_health` unless `past_max` is set
    pub fn heal(&mut self, amount: f64, past_max: bool) {
        self.health += amount;
        if !past_max {
            self.health = self.health.min(self.max_health);
        }
    }
}

impl Collider for Entity {
    fn bounds(&self) -> Rect {
        Rect {
            min: self.position(),
            size: self.size(),
        }
    }

    fn is_collidable(&self) -> bool {
        self.collidable
    }
}
