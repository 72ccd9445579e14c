/// Frame timing for the simulation
///
/// Wall time is accumulated and sliced into fixed simulation steps. Each
/// step has a simulation timestamp (seconds since start, excluding paused
/// time) which is the elapsed-time signal the world update consumes.
use std::time::{Duration, Instant};

/// Target simulation rate (60 updates per second)
pub const FIXED_TIMESTEP: f64 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Maximum number of simulation steps per frame to prevent spiral of death
const MAX_STEPS_PER_FRAME: u32 = 5;

/// FPS tracking window (average over last N frames)
const FPS_WINDOW_SIZE: usize = 60;

/// Frame clock state
#[derive(Debug)]
pub struct FrameClock {
    /// Accumulated wall time not yet turned into steps
    accumulator: Duration,

    /// Time of last frame
    last_frame_time: Instant,

    /// Whether the simulation is paused
    paused: bool,

    /// Frame timing history for FPS calculation
    frame_times: Vec<Duration>,

    /// Current frame number
    frame_count: u64,

    /// Simulation steps executed
    step_count: u64,

    /// Current FPS (updated periodically)
    current_fps: f64,
}

impl FrameClock {
    /// Create a new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: now,
            paused: false,
            frame_times: Vec::with_capacity(FPS_WINDOW_SIZE),
            frame_count: 0,
            step_count: 0,
            current_fps: 0.0,
        }
    }

    /// Begin a new rendered frame, returns the number of steps to run.
    /// Call `step` that many times.
    pub fn begin_frame(&mut self) -> u32 {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;

        self.frame_times.push(frame_time);
        if self.frame_times.len() > FPS_WINDOW_SIZE {
            self.frame_times.remove(0);
        }

        // Update FPS counter every 10 frames
        if self.frame_count % 10 == 0 {
            self.update_fps();
        }

        // If paused, don't accumulate time for steps
        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;

        let mut steps = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && steps < MAX_STEPS_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            steps += 1;
        }

        // Drop the backlog instead of carrying it into the next frame
        if self.accumulator >= FIXED_TIMESTEP_DURATION {
            log::warn!(
                "Simulation fell behind by {:.1}ms, skipping ahead",
                self.accumulator.as_secs_f64() * 1000.0
            );
            self.accumulator = Duration::ZERO;
        }
        steps
    }

    /// Advance by one fixed step and return its simulation timestamp
    pub fn step(&mut self) -> f64 {
        self.step_count += 1;
        self.simulation_time()
    }

    /// Seconds of simulated time so far
    pub fn simulation_time(&self) -> f64 {
        self.step_count as f64 * FIXED_TIMESTEP
    }

    /// Get current FPS
    pub fn fps(&self) -> f64 {
        self.current_fps
    }

    /// Get total number of frames begun
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total number of simulation steps
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Check if the simulation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the simulation
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Simulation paused");
        }
    }

    /// Resume the simulation
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent a step burst
            self.accumulator = Duration::ZERO;
            log::info!("Simulation resumed");
        }
    }

    fn update_fps(&mut self) {
        if self.frame_times.is_empty() {
            self.current_fps = 0.0;
            return;
        }

        let total: Duration = self.frame_times.iter().sum();
        let avg_frame_time = total.as_secs_f64() / self.frame_times.len() as f64;

        self.current_fps = if avg_frame_time > 0.0 {
            1.0 / avg_frame_time
        } else {
            0.0
        };
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::thread;

    #[test]
    fn test_clock_creation() {
        let clock = FrameClock::new();
        assert_eq!(clock.frame_count(), 0);
        assert_eq!(clock.step_count(), 0);
        assert_eq!(clock.simulation_time(), 0.0);
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_step_advances_simulation_time() {
        let mut clock = FrameClock::new();
        let first = clock.step();
        assert_relative_eq!(first, FIXED_TIMESTEP);

        for _ in 0..59 {
            clock.step();
        }
        assert_relative_eq!(clock.simulation_time(), 1.0, epsilon = 1e-9);
        assert_eq!(clock.step_count(), 60);
    }

    #[test]
    fn test_pause_and_resume() {
        let mut clock = FrameClock::new();
        clock.pause();
        assert!(clock.is_paused());
        clock.resume();
        assert!(!clock.is_paused());
    }

    #[test]
    fn test_paused_no_steps() {
        let mut clock = FrameClock::new();
        clock.pause();

        thread::sleep(Duration::from_millis(50));

        assert_eq!(clock.begin_frame(), 0);
    }

    #[test]
    fn test_frame_counting() {
        let mut clock = FrameClock::new();
        clock.begin_frame();
        clock.begin_frame();
        assert_eq!(clock.frame_count(), 2);
    }

    #[test]
    fn test_max_steps_limit() {
        let mut clock = FrameClock::new();

        // Simulate a very long frame (300ms)
        thread::sleep(Duration::from_millis(300));

        let steps = clock.begin_frame();
        assert_eq!(steps, MAX_STEPS_PER_FRAME);

        // The rest of the long frame is dropped, not replayed next frame
        assert!(clock.begin_frame() <= 1);
    }
}
