// Whole-world scenarios driven frame by frame on the built-in level

use approx::assert_relative_eq;
use glam::DVec2;

use ledge_runner::core::Rect;
use ledge_runner::engine::game_loop::FrameClock;
use ledge_runner::engine::input::{Action, InputState};
use ledge_runner::engine::physics::Collider;
use ledge_runner::engine::renderer::{RenderSink, SpriteDraw};
use ledge_runner::game::characters::{EntityDesc, BAT_STATS, PLAYER_ID, PLAYER_STATS};
use ledge_runner::game::combat::in_attack_range;
use ledge_runner::game::{FrameReport, GameConfig, World};

const FLOOR_TOP: f64 = 533.0;
const LEDGE_TOP: f64 = 400.0;

fn new_world() -> World {
    World::with_default_level(GameConfig::default().with_seed(2024)).unwrap()
}

fn run(
    world: &mut World,
    clock: &mut FrameClock,
    input: &InputState,
    frames: usize,
) -> Vec<FrameReport> {
    (0..frames)
        .map(|_| {
            let now = clock.step();
            world.update(now, input)
        })
        .collect()
}

/// Let everything fall onto the floor
fn settled_world() -> (World, FrameClock) {
    let mut world = new_world();
    let mut clock = FrameClock::new();
    run(&mut world, &mut clock, &InputState::new(), 200);
    (world, clock)
}

fn bottom<C: Collider>(entity: &C) -> f64 {
    entity.bounds().bottom()
}

#[derive(Default)]
struct Recorder {
    draws: Vec<(String, usize)>,
    texts: Vec<(String, DVec2)>,
}

impl RenderSink for Recorder {
    fn draw_sprite(&mut self, draw: &SpriteDraw<'_>) {
        self.draws.push((draw.sprite.to_string(), draw.frame_index));
    }

    fn draw_text(&mut self, text: &str, screen_position: DVec2) {
        self.texts.push((text.to_string(), screen_position));
    }
}

#[test]
fn test_everything_lands_on_the_floor() {
    let (world, _) = settled_world();

    assert!(world.player.is_grounded);
    let player_bottom = bottom(&world.player.entity);
    assert!(player_bottom > FLOOR_TOP && player_bottom <= FLOOR_TOP + 5.0);

    // The first bat drops to the floor, the second one onto the ledge
    let first = bottom(&world.enemies[0]);
    assert!(first > FLOOR_TOP && first <= FLOOR_TOP + 5.0);
    let second = bottom(&world.enemies[1]);
    assert!(second > LEDGE_TOP && second <= LEDGE_TOP + 5.0);
    let coin_bottom = bottom(&world.coin);
    assert!(coin_bottom > FLOOR_TOP && coin_bottom <= FLOOR_TOP + 5.0);
}

#[test]
fn test_camera_follows_the_player() {
    let world_at_start = new_world();
    let (world, _) = settled_world();

    let fallen = world.player.entity.raw_position() - world_at_start.player.entity.raw_position();
    let panned = world.camera.position - world_at_start.camera.position;
    assert_relative_eq!(fallen.y, panned.y, epsilon = 1e-9);
    assert_relative_eq!(panned.x, 0.0);
}

#[test]
fn test_flip_round_trip_keeps_hitbox() {
    let (mut world, _) = settled_world();
    let before: Rect = world.player.entity.bounds();

    world.player.entity.flip();
    world.player.entity.flip();

    let after = world.player.entity.bounds();
    assert_relative_eq!(after.min.x, before.min.x, epsilon = 1e-9);
    assert_relative_eq!(after.min.y, before.min.y, epsilon = 1e-9);
    assert_relative_eq!(after.size.x, before.size.x);
    assert_relative_eq!(after.size.y, before.size.y);
}

#[test]
fn test_melee_range_at_unit_scale() {
    let mut player = EntityDesc::new(PLAYER_ID, "runner", DVec2::new(50.0, 37.0))
        .with_hitbox(19.0, 32.0, DVec2::new(15.0, 6.0))
        .with_stats(PLAYER_STATS)
        .build()
        .unwrap();
    player.place_at(DVec2::new(100.0, 200.0));

    let mut bat = EntityDesc::new(1, "bat", DVec2::new(50.0, 40.0))
        .with_stats(BAT_STATS)
        .build()
        .unwrap();
    bat.place_at(DVec2::new(110.0, 190.0));
    assert!(in_attack_range(&player, &bat));

    bat.place_at(DVec2::new(200.0, 190.0));
    assert!(!in_attack_range(&player, &bat));
}

#[test]
fn test_coin_pickup() {
    let (mut world, mut clock) = settled_world();
    let start_health = world.player.entity.health;
    let target = world.player.entity.position();
    world.coin.place_at(target);

    let reports = run(&mut world, &mut clock, &InputState::new(), 1);
    assert_eq!(reports[0].coins_collected, 1);
    assert_eq!(world.player.score, 1);
    assert_eq!(world.player.entity.health, start_health + 10.0);

    // Respawned somewhere inside the window; gravity may already have moved it one step
    let coin = world.coin.bounds();
    assert!(coin.left() >= 0.0 && coin.right() <= 800.0);
    assert!(coin.top() >= 0.0 && coin.bottom() <= 600.0 + 5.0);
}

#[test]
fn test_jump_rises_and_ends_after_ln2() {
    let (mut world, mut clock) = settled_world();
    let ground_y = world.player.entity.y();

    let mut input = InputState::new();
    input.press(Action::Jump);
    run(&mut world, &mut clock, &input, 1);
    let jumped_at = clock.simulation_time();
    assert!(world.player.is_jumping);

    input.release(Action::Jump);
    let mut highest = world.player.entity.y();
    while world.player.is_jumping {
        run(&mut world, &mut clock, &input, 1);
        highest = highest.min(world.player.entity.y());
        assert!(clock.simulation_time() - jumped_at < 2.0);
    }

    let airtime = clock.simulation_time() - jumped_at;
    assert!(airtime > std::f64::consts::LN_2);
    assert!(airtime < std::f64::consts::LN_2 + 2.0 / 60.0);
    assert!(highest < ground_y - 100.0);

    // Falls back down and lands again
    run(&mut world, &mut clock, &input, 200);
    assert!(world.player.is_grounded);
    assert_relative_eq!(world.player.entity.y(), ground_y, epsilon = 5.0);
}

#[test]
fn test_holding_attack_defeats_the_nearby_bat() {
    let (mut world, mut clock) = settled_world();
    let mut input = InputState::new();
    input.press(Action::Attack);

    let reports = run(&mut world, &mut clock, &input, 200);
    let hits: Vec<_> = reports.iter().flat_map(|report| report.hits.clone()).collect();
    let finished = reports.iter().filter(|report| report.attack_finished).count();

    // Five critical swings of 20 each, one hit per swing
    assert_eq!(hits.len(), 5);
    assert!(hits.iter().all(|hit| hit.defender == 1 && hit.critical));
    assert!(finished >= 4);

    let defeated: Vec<_> = reports.iter().flat_map(|report| report.defeated.clone()).collect();
    assert_eq!(defeated, vec![1]);
    assert_eq!(world.enemies.len(), 1);
    assert_eq!(world.enemies[0].id(), 2);
    assert_eq!(world.enemies[0].health, 100.0);
}

#[test]
fn test_render_sink_sees_every_entity() {
    let (mut world, mut clock) = settled_world();
    let mut recorder = Recorder::default();
    world.render(&mut recorder);
    assert_eq!(recorder.draws.len(), 7);
    assert_eq!(recorder.draws[0].0, "background");
    assert!(recorder.texts.is_empty());

    let mut input = InputState::new();
    input.press(Action::Attack);
    run(&mut world, &mut clock, &input, 1);

    let mut recorder = Recorder::default();
    world.render(&mut recorder);
    assert_eq!(recorder.texts.len(), 1);
    assert_eq!(recorder.texts[0].0, "Critical!");
    let attack_frame = recorder
        .draws
        .iter()
        .find(|(sprite, _)| sprite.starts_with("runner/"))
        .map(|(_, frame)| *frame)
        .unwrap();
    assert_eq!(attack_frame, 14);
}
