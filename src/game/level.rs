// Level layout: which entities exist at start and where they spawn

use glam::DVec2;

use super::characters::{
    Clip, EntityDesc, EntityId, BAT_STATS, NON_COMBATANT_ID, PLAYER_ID, PLAYER_STATS,
};
use super::config::WindowSize;

/// Runner sprite sheet frame size
const RUNNER_FRAME: DVec2 = DVec2::new(50.0, 37.0);
const RUNNER_SIZE: DVec2 = DVec2::new(150.0, 100.0);

const BAT_FRAME: DVec2 = DVec2::new(50.0, 40.0);
const BAT_SIZE: DVec2 = DVec2::new(100.0, 80.0);
const BAT_FRAMES: usize = 5;

const GRASS_FRAME: DVec2 = DVec2::new(800.0, 32.0);
const BACKGROUND_FRAME: DVec2 = DVec2::new(800.0, 600.0);

const COIN_FRAME: DVec2 = DVec2::new(517.0, 517.0);
const COIN_SIZE: DVec2 = DVec2::new(64.0, 64.0);

/// Runner clips in sprite order: idle, run, jump, attack, strong attack
const RUNNER_SHEETS: [(&str, usize); 5] = [
    ("idle", 4),
    ("run", 6),
    ("jump", 4),
    ("attack", 6),
    ("attack-strong", 6),
];

/// Descriptions of everything the world starts with
#[derive(Debug, Clone)]
pub struct Level {
    pub player: EntityDesc,
    pub tiles: Vec<EntityDesc>,
    pub enemies: Vec<EntityDesc>,
    pub coin: EntityDesc,
    pub background: Vec<EntityDesc>,
}

impl Level {
    /// Two ledges, two bats and a coin, laid out for `window`
    pub fn default_level(window: WindowSize) -> Self {
        Self {
            player: runner(),
            tiles: vec![
                grass(32.0, window.width, DVec2::new(500.0, 400.0)),
                grass(100.0, window.width, DVec2::new(0.0, 533.0)),
            ],
            enemies: vec![bat(1, DVec2::new(250.0, 150.0)), bat(2, DVec2::new(550.0, 150.0))],
            coin: coin(),
            background: vec![background(window)],
        }
    }
}

/// Scale that turns `native` into `wanted`
fn scale_between(native: DVec2, wanted: DVec2) -> DVec2 {
    wanted / native
}

fn runner() -> EntityDesc {
    let sprites = RUNNER_SHEETS
        .iter()
        .flat_map(|(name, frames)| (0..*frames).map(move |i| format!("runner/{name}-{i:02}")))
        .collect();

    // Spawn point is given in sprite pixels and scales with the sprite
    let spawn = DVec2::new(50.0, 50.0) * scale_between(RUNNER_FRAME, RUNNER_SIZE);

    EntityDesc::new(PLAYER_ID, "runner", RUNNER_FRAME)
        .with_sprites(sprites)
        .with_wanted_size(Some(RUNNER_SIZE.x), Some(RUNNER_SIZE.y))
        .with_hitbox(19.0, 32.0, DVec2::new(15.0, 6.0))
        .with_spawn(spawn)
        .with_mass(true)
        .with_collision(true)
        .with_stats(PLAYER_STATS)
        .with_clip(Clip::Idle)
}

fn grass(height: f64, width: f64, at: DVec2) -> EntityDesc {
    EntityDesc::new(NON_COMBATANT_ID, "tiles/grass", GRASS_FRAME)
        .with_wanted_size(Some(width), Some(height))
        .with_spawn(at)
        .with_collision(true)
}

fn bat(id: EntityId, at: DVec2) -> EntityDesc {
    let sprites = (0..BAT_FRAMES).map(|i| format!("bat/walk-{i}")).collect();
    EntityDesc::new(id, "bat", BAT_FRAME)
        .with_sprites(sprites)
        .with_wanted_size(Some(BAT_SIZE.x), Some(BAT_SIZE.y))
        .with_spawn(at)
        .with_mass(true)
        .with_collision(true)
        .with_stats(BAT_STATS)
}

fn coin() -> EntityDesc {
    let spawn = DVec2::new(150.0, 150.0) * scale_between(COIN_FRAME, COIN_SIZE);
    EntityDesc::new(NON_COMBATANT_ID, "coin", COIN_FRAME)
        .with_wanted_size(Some(COIN_SIZE.x), Some(COIN_SIZE.y))
        .with_hitbox(303.0, 303.0, DVec2::new(107.0, 107.0))
        .with_spawn(spawn)
        .with_mass(true)
        .with_collision(true)
}

/// Full-width backdrop resting on the bottom of the window
fn background(window: WindowSize) -> EntityDesc {
    let height = BACKGROUND_FRAME.y;
    EntityDesc::new(NON_COMBATANT_ID, "background", BACKGROUND_FRAME)
        .with_wanted_size(Some(window.width), None)
        .with_spawn(DVec2::new(0.0, window.height - height))
}
