use hecs::Entity;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: 0.016,
            now: 0.0,
        }
    }
}

/// Game score tracking. Monotonic; only destroyed invaders award points.
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub points: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, points: u32) {
        self.points += points;
    }
}

/// Formation heading: where the invader grid moves on its next step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heading {
    Right,
    Left,
    /// Descend one step, then march left
    DownThenLeft,
    /// Descend one step, then march right
    DownThenRight,
    Idle,
}

/// Movement state for the invader formation: heading, step cadence, and
/// the timestamp of the last step taken.
#[derive(Debug, Clone, Copy)]
pub struct Formation {
    pub heading: Heading,
    pub step_seconds: f32,
    pub last_step: f32,
}

impl Formation {
    pub fn new(step_seconds: f32) -> Self {
        Self {
            heading: Heading::Right,
            step_seconds: step_seconds.max(f32::MIN_POSITIVE),
            last_step: 0.0,
        }
    }

    /// True once `step_seconds` have elapsed since the last step.
    pub fn step_due(&self, now: f32) -> bool {
        now - self.last_step >= self.step_seconds
    }

    /// Replace the cadence, rejecting non-positive values. Returns whether
    /// the new value was accepted; prior state is kept on rejection.
    pub fn set_step_seconds(&mut self, seconds: f32) -> bool {
        if seconds <= 0.0 {
            return false;
        }
        self.step_seconds = seconds;
        true
    }

    /// Speed up the cadence by `factor`. On success returns the ratio
    /// old/new, which the presenter applies to movement-linked animation.
    pub fn ramp(&mut self, factor: f32) -> Option<f32> {
        let old = self.step_seconds;
        if !self.set_step_seconds(old * factor) {
            return None;
        }
        Some(old / self.step_seconds)
    }
}

impl Default for Formation {
    fn default() -> Self {
        Self::new(crate::params::Params::STEP_SECONDS_INITIAL)
    }
}

/// Contact events reported by the physics collaborator. Append-only between
/// frames; drained exactly once per frame by the contact resolver.
#[derive(Debug, Clone, Default)]
pub struct ContactQueue {
    pairs: Vec<(Entity, Entity)>,
}

impl ContactQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// The physics collaborator's sole write into the core.
    pub fn push(&mut self, a: Entity, b: Entity) {
        self.pairs.push((a, b));
    }

    pub fn drain(&mut self) -> Vec<(Entity, Entity)> {
        std::mem::take(&mut self.pairs)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

/// Buffered user input: discrete tap markers plus the latest continuous
/// acceleration sample. Taps are drained fully each frame; the tilt sample
/// has no queue, only the latest value matters.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputQueue {
    taps: u32,
    pub tilt_x: f32,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_tap(&mut self) {
        self.taps += 1;
    }

    pub fn set_tilt(&mut self, x: f32) {
        self.tilt_x = x;
    }

    /// Drain all queued taps, returning how many were pending.
    pub fn take_taps(&mut self) -> u32 {
        std::mem::take(&mut self.taps)
    }

    pub fn pending_taps(&self) -> u32 {
        self.taps
    }
}

/// Sound cues for the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sound {
    ShipFire,
    InvaderFire,
    InvaderDown,
    ShipHit,
    GameOver,
}

/// Signals produced during one frame for the presentation collaborator.
/// Cleared at the start of each frame.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub sounds: Vec<Sound>,
    /// old/new step-seconds ratio emitted when the formation speeds up;
    /// the presenter scales movement-linked animation cadence by it.
    pub cadence_scale: Option<f32>,
    /// Set exactly once, on the frame the game ends.
    pub game_over: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.sounds.clear();
        self.cadence_scale = None;
        self.game_over = false;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// One-shot game-over latch
#[derive(Debug, Clone, Copy, Default)]
pub struct GameStatus {
    pub ending: bool,
}

impl GameStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_over(&self) -> bool {
        self.ending
    }
}
