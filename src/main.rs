use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use glam::DVec2;
use log::{debug, info};
use winit::{
    event::{ElementState, Event, WindowEvent},
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::WindowBuilder,
};

use ledge_runner::engine::debounce::Debouncer;
use ledge_runner::engine::game_loop::FrameClock;
use ledge_runner::engine::input::{Action, InputState};
use ledge_runner::engine::renderer::{RenderSink, SpriteDraw};
use ledge_runner::game::{GameConfig, World};

/// Quiet period for the debug toggle and quit keys
const META_KEY_DEBOUNCE: Duration = Duration::from_millis(50);

/// Render sink with no GPU behind it: counts draws, dumps them when debug is on
struct FrameLog {
    sprites: usize,
    debug: bool,
}

impl RenderSink for FrameLog {
    fn draw_sprite(&mut self, draw: &SpriteDraw<'_>) {
        self.sprites += 1;
        if self.debug {
            debug!(
                "{} [{}] hitbox ({:.1}, {:.1}) {:.1}x{:.1} health {:?}",
                draw.sprite,
                draw.frame_index,
                draw.world_position.x,
                draw.world_position.y,
                draw.size.x,
                draw.size.y,
                draw.health_fraction
            );
        }
    }

    fn draw_text(&mut self, text: &str, screen_position: DVec2) {
        if self.debug {
            debug!(
                "text '{}' at ({:.0}, {:.0})",
                text, screen_position.x, screen_position.y
            );
        }
    }
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Ledge Runner...");

    let config = GameConfig::default();
    let window_size = config.window;
    let input_config = config.input.clone();
    for control in &config.controls {
        info!(
            "{:?} moves by ({}, {}) on {:?}",
            control.action,
            control.delta.x,
            control.delta.y,
            input_config.keys_for(control.action)
        );
    }
    let mut world = World::with_default_level(config)?;
    let mut input = InputState::new();
    let mut clock = FrameClock::new();

    let debug_overlay = Arc::new(AtomicBool::new(false));
    let quit = Arc::new(AtomicBool::new(false));
    let meta_keys = Debouncer::new(META_KEY_DEBOUNCE);

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Ledge Runner")
        .with_inner_size(winit::dpi::LogicalSize::new(
            window_size.width,
            window_size.height,
        ))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::Focused(focused),
                ..
            } => {
                if focused {
                    clock.resume();
                } else {
                    input.reset();
                    clock.pause();
                }
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                let PhysicalKey::Code(key) = event.physical_key else {
                    return;
                };
                let pressed = event.state == ElementState::Pressed;
                match input_config.action_for(key) {
                    Some(Action::ToggleDebug) if pressed => {
                        let overlay = Arc::clone(&debug_overlay);
                        meta_keys.call(move || {
                            let enabled = !overlay.load(Ordering::Relaxed);
                            overlay.store(enabled, Ordering::Relaxed);
                            info!("Debug output {}", if enabled { "on" } else { "off" });
                        });
                    }
                    Some(Action::Quit) if pressed => {
                        let quit = Arc::clone(&quit);
                        meta_keys.call(move || quit.store(true, Ordering::Relaxed));
                    }
                    Some(action) if action.is_meta() => {}
                    _ => input.process_keyboard_event(&event, &input_config),
                }
            }
            Event::WindowEvent {
                event: WindowEvent::RedrawRequested,
                ..
            } => {
                let mut sink = FrameLog {
                    sprites: 0,
                    debug: debug_overlay.load(Ordering::Relaxed),
                };
                world.render(&mut sink);
                if sink.debug {
                    debug!(
                        "Frame {} drew {} sprites, {:.1} fps",
                        clock.frame_count(),
                        sink.sprites,
                        clock.fps()
                    );
                }
            }
            Event::AboutToWait => {
                if quit.load(Ordering::Relaxed) {
                    info!(
                        "Quitting after {:.1}s, score {}",
                        clock.simulation_time(),
                        world.player.score
                    );
                    elwt.exit();
                    return;
                }

                for _ in 0..clock.begin_frame() {
                    let now = clock.step();
                    let report = world.update(now, &input);
                    for hit in &report.hits {
                        debug!(
                            "Hit {} -> {} for {}{}",
                            hit.attacker,
                            hit.defender,
                            hit.amount,
                            if hit.critical { " (critical)" } else { "" }
                        );
                    }
                }
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
