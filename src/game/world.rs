// World aggregate and the per-frame simulation step
//
// Frame order:
// 1. Crit banner
// 2. Player input (movement, flips, jump start, attack start)
// 3. Coin pickup
// 4. Gravity and jump curve
// 5. Combat
// 6. Animation ticks, attack completion
// 7. Defeated enemies removed

use glam::DVec2;
use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engine::input::{Action, InputState};
use crate::engine::physics::{
    intersects, intersects_any, jump_displacement, sideway_exception_any, sideways_collision_any,
    Collider,
};
use crate::engine::renderer::{Camera, RenderSink, SpriteDraw};

use super::characters::{Clip, Entity, EntityDesc, EntityId, Player, TickOutcome};
use super::combat::{finish_swing, strike, CritBanner, Hit};
use super::config::GameConfig;
use super::level::Level;
use super::GameError;

/// What happened during one `World::update`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameReport {
    pub hits: Vec<Hit>,
    pub coins_collected: u32,
    /// The player moved sideways this frame
    pub walked: bool,
    /// The player's attack clip completed this frame
    pub attack_finished: bool,
    /// Enemies removed after reaching zero health
    pub defeated: Vec<EntityId>,
}

/// Owns every entity and the camera
#[derive(Debug)]
pub struct World {
    pub player: Player,
    pub tiles: Vec<Entity>,
    pub enemies: Vec<Entity>,
    pub coin: Entity,
    /// Drawn in screen space, never collides
    pub background: Vec<Entity>,
    pub camera: Camera,
    config: GameConfig,
    rng: StdRng,
    frame: u64,
}

impl World {
    pub fn new(config: GameConfig, level: Level) -> Result<Self, GameError> {
        config.validate()?;

        let sprite_size = level.player.drawn_size();
        let player = Player::new(level.player.build()?);
        let tiles = build_all(level.tiles)?;
        let enemies = build_all(level.enemies)?;
        let coin = level.coin.build()?;
        let background = build_all(level.background)?;

        let camera = Camera::centered_on(
            player.entity.raw_position(),
            sprite_size,
            config.window.as_vec(),
        );

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        info!(
            "World created: {} tiles, {} enemies, window {}x{}",
            tiles.len(),
            enemies.len(),
            config.window.width,
            config.window.height
        );

        Ok(Self {
            player,
            tiles,
            enemies,
            coin,
            background,
            camera,
            config,
            rng,
            frame: 0,
        })
    }

    /// World with the built-in level
    pub fn with_default_level(config: GameConfig) -> Result<Self, GameError> {
        let level = Level::default_level(config.window);
        Self::new(config, level)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Number of updates run so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Run one simulation step. `now` is the simulation clock in seconds.
    pub fn update(&mut self, now: f64, input: &InputState) -> FrameReport {
        self.frame += 1;
        let mut report = FrameReport::default();

        self.advance_banner(now);
        report.walked = self.apply_controls(now, input);
        report.coins_collected = self.collect_coin();
        self.apply_gravity(now);
        report.hits = self.resolve_combat(now);
        report.attack_finished = self.tick_animations();
        report.defeated = self.remove_defeated();

        trace!(
            "Frame {}: player at ({:.1}, {:.1}), grounded {}",
            self.frame,
            self.player.entity.x(),
            self.player.entity.y(),
            self.player.is_grounded
        );
        report
    }

    fn advance_banner(&mut self, now: f64) {
        let expired = match self.player.crit_banner.as_mut() {
            Some(banner) => !banner.advance(now),
            None => false,
        };
        if expired {
            self.player.crit_banner = None;
        }
    }

    /// Movement, facing and clip changes from held actions. Returns whether the player walked.
    fn apply_controls(&mut self, now: f64, input: &InputState) -> bool {
        let mut walked = false;

        if !self.player.is_attacking {
            for control in &self.config.controls {
                if !input.is_pressed(control.action) {
                    continue;
                }
                match control.action {
                    Action::Jump => {
                        if self.player.can_jump() {
                            self.player.start_jump(now);
                        }
                    }
                    Action::MoveLeft | Action::MoveRight => {
                        let right = control.action == Action::MoveRight;
                        if self.player.face(right) {
                            continue;
                        }
                        if sideways_collision_any(&self.player.entity, &self.tiles) {
                            continue;
                        }
                        walked = true;
                        if self.player.is_grounded
                            && !self.player.is_jumping
                            && !self.player.entity.animation.is_playing(Clip::Walk)
                        {
                            self.player.entity.animation.play(Clip::Walk);
                        }
                        self.player.move_by(control.delta, &mut self.camera);
                    }
                    _ => {}
                }
            }

            if self.player.is_grounded
                && !walked
                && !self.player.is_jumping
                && !self.player.entity.animation.is_playing(Clip::Idle)
            {
                self.player.entity.animation.play(Clip::Idle);
            }
        }

        let attack = input.is_pressed(Action::Attack);
        if (attack || input.is_pressed(Action::StrongAttack)) && self.player.can_attack() {
            self.player.start_attack(!attack);
        }

        walked
    }

    /// Pick up the coin if touched. Returns the number of coins collected.
    fn collect_coin(&mut self) -> u32 {
        if !intersects(&self.player.entity, &self.coin) {
            return 0;
        }

        self.player.score += 1;
        self.player
            .entity
            .heal(self.config.coin_heal, self.config.heal_past_max);

        let window = self.config.window;
        let max_x = (window.width - self.coin.width()).max(0.0);
        let max_y = (window.height - self.coin.height()).max(0.0);
        let target = DVec2::new(
            self.rng.gen::<f64>() * max_x,
            self.rng.gen::<f64>() * max_y,
        );
        self.coin.place_at(target);

        info!(
            "Coin collected, score {} health {}",
            self.player.score, self.player.entity.health
        );
        1
    }

    fn apply_gravity(&mut self, now: f64) {
        let gravity = self.config.gravity;

        let colliding = intersects_any(&self.player.entity, &self.tiles);
        let exception = sideway_exception_any(&self.player.entity, &self.tiles);
        if (!colliding || exception) && self.player.entity.has_mass {
            self.player.move_by(gravity, &mut self.camera);
            self.player.is_grounded = false;
        } else if colliding {
            self.player.is_grounded = true;
        }

        if self.coin.has_mass && !intersects_any(&self.coin, &self.tiles) {
            self.coin.translate(gravity);
        }

        for enemy in self.enemies.iter_mut() {
            if enemy.has_mass && !intersects_any(&*enemy, &self.tiles) {
                enemy.translate(gravity);
            }
        }

        if self.player.is_jumping {
            let elapsed = self.player.jump_elapsed(now);
            match jump_displacement(gravity, elapsed) {
                Some(delta) => self.player.move_by(delta, &mut self.camera),
                None => self.player.end_jump(),
            }
        }
    }

    fn resolve_combat(&mut self, now: f64) -> Vec<Hit> {
        if !self.player.is_attacking {
            return Vec::new();
        }

        let mut hits = Vec::new();
        let mut banner = None;
        for enemy in self.enemies.iter_mut() {
            if let Some(hit) = strike(&self.player.entity, enemy, &mut self.rng) {
                if hit.critical {
                    banner = Some(CritBanner::new(
                        &self.config.crit_banner_text,
                        enemy,
                        now,
                        self.config.crit_banner_seconds,
                    ));
                }
                hits.push(hit);
            }
        }

        if banner.is_some() {
            self.player.crit_banner = banner;
        }
        hits
    }

    /// Tick every animation. Returns true when the player's attack finished.
    fn tick_animations(&mut self) -> bool {
        let mut attack_finished = false;
        let outcome = self.player.entity.animation.tick();
        if outcome == TickOutcome::CycleComplete && self.player.is_attacking {
            finish_swing(self.player.entity.id(), &mut self.enemies);
            self.player.end_attack();
            attack_finished = true;
            debug!("Attack finished on frame {}", self.frame);
        }

        for enemy in self.enemies.iter_mut() {
            enemy.animation.tick();
        }
        self.coin.animation.tick();

        attack_finished
    }

    fn remove_defeated(&mut self) -> Vec<EntityId> {
        let mut defeated = Vec::new();
        self.enemies.retain(|enemy| {
            if enemy.is_defeated() {
                info!("Enemy {} defeated", enemy.id());
                defeated.push(enemy.id());
                false
            } else {
                true
            }
        });
        defeated
    }

    /// Emit draw commands: background fixed, everything else through the camera
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        for entity in &self.background {
            draw_entity(sink, entity, entity.transform().affine());
        }

        let world_entities = self
            .tiles
            .iter()
            .chain(std::iter::once(&self.player.entity))
            .chain(self.enemies.iter())
            .chain(std::iter::once(&self.coin))
            .filter(|entity| self.camera.is_visible(&entity.bounds()));
        for entity in world_entities {
            let screen = self.camera.view_transform(entity.transform().affine());
            draw_entity(sink, entity, screen);
        }

        if let Some(banner) = &self.player.crit_banner {
            sink.draw_text(&banner.text, self.camera.world_to_screen(banner.position));
        }
    }
}

fn build_all(descs: Vec<EntityDesc>) -> Result<Vec<Entity>, GameError> {
    descs.into_iter().map(EntityDesc::build).collect()
}

fn draw_entity<S: RenderSink + ?Sized>(sink: &mut S, entity: &Entity, screen: glam::DAffine2) {
    sink.draw_sprite(&SpriteDraw {
        sprite: entity.current_sprite(),
        frame_index: entity.sprite_index(),
        screen_transform: screen,
        world_position: entity.position(),
        size: entity.size(),
        health_fraction: entity.health_fraction(),
    });
}
