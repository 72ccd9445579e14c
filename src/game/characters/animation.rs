// Sprite animation driven by a per-frame tick budget

/// Frame range and playback settings for one clip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipSpec {
    /// First sprite index of the clip
    pub first: usize,
    /// Last sprite index of the clip (inclusive)
    pub last: usize,
    /// Ticks to wait before advancing to the next frame
    pub ticks_per_frame: u32,
    /// Whether the clip wraps back to `first`
    pub looping: bool,
}

impl ClipSpec {
    pub const fn new(first: usize, last: usize, ticks_per_frame: u32, looping: bool) -> Self {
        Self {
            first,
            last,
            ticks_per_frame,
            looping,
        }
    }

    /// Number of frames in the clip
    pub fn frame_count(&self) -> usize {
        self.last.saturating_sub(self.first) + 1
    }
}

/// Named clips. Each variant carries its own frame range into the owning
/// entity's sprite list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Clip {
    /// Standing still (player frames 0-3)
    #[default]
    Idle,
    /// Running (player frames 4-9)
    Walk,
    /// Airborne, plays once (player frames 10-13)
    Jump,
    /// Regular swing (player frames 14-19)
    Attack,
    /// Heavy swing (player frames 20-25)
    AttackStrong,
    /// Single frame that never advances
    Still,
}

impl Clip {
    pub fn spec(self) -> ClipSpec {
        match self {
            Self::Idle => ClipSpec::new(0, 3, 7, true),
            Self::Walk => ClipSpec::new(4, 9, 4, true),
            Self::Jump => ClipSpec::new(10, 13, 2, false),
            Self::Attack => ClipSpec::new(14, 19, 5, true),
            Self::AttackStrong => ClipSpec::new(20, 25, 5, true),
            Self::Still => ClipSpec::new(0, 0, 0, false),
        }
    }

    pub fn is_attack(self) -> bool {
        matches!(self, Self::Attack | Self::AttackStrong)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walk => "walk",
            Self::Jump => "jump",
            Self::Attack => "attack",
            Self::AttackStrong => "attack_strong",
            Self::Still => "still",
        }
    }
}

/// What happened during one animation tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still waiting on the tick budget, or the clip has a single frame
    Waiting,
    /// Moved to the next frame inside the clip
    Advanced,
    /// Ran past the last frame; the cursor wrapped or is holding at `last`
    CycleComplete,
}

/// Per-entity frame cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationState {
    clip: Clip,
    current: usize,
    spec: ClipSpec,
    ticks: u32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(Clip::default())
    }
}

impl AnimationState {
    pub fn new(clip: Clip) -> Self {
        let spec = clip.spec();
        Self {
            clip,
            current: spec.first,
            spec,
            ticks: 0,
        }
    }

    /// Re-arm the cursor at the start of `clip`, even if it is already playing
    pub fn play(&mut self, clip: Clip) {
        self.clip = clip;
        self.spec = clip.spec();
        self.current = self.spec.first;
        self.ticks = 0;
    }

    /// Advance the tick counter by one simulation tick
    pub fn tick(&mut self) -> TickOutcome {
        self.ticks += 1;
        if self.ticks <= self.spec.ticks_per_frame {
            return TickOutcome::Waiting;
        }

        self.ticks = 0;
        if self.spec.first == self.spec.last {
            return TickOutcome::Waiting;
        }

        self.current += 1;
        if self.current <= self.spec.last {
            return TickOutcome::Advanced;
        }

        self.current = if self.spec.looping {
            self.spec.first
        } else {
            self.spec.last
        };
        TickOutcome::CycleComplete
    }

    pub fn clip(&self) -> Clip {
        self.clip
    }

    pub fn is_playing(&self, clip: Clip) -> bool {
        self.clip == clip
    }

    /// Current sprite index
    pub fn current_frame(&self) -> usize {
        self.current
    }

    pub fn spec(&self) -> ClipSpec {
        self.spec
    }

    /// Ticks counted since the last frame change
    pub fn ticks(&self) -> u32 {
        self.ticks
    }
}
