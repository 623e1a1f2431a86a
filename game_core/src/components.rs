use glam::Vec2;

/// Position and extent shared by every gameplay entity.
/// `pos` is the center of the axis-aligned box.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Body {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }
}

/// Player ship component. Health is a fraction in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Ship {
    pub health: f32,
}

impl Ship {
    pub fn new() -> Self {
        Self { health: 1.0 }
    }

    /// Apply one bullet's worth of damage, saturating at zero.
    pub fn hit(&mut self, fraction: f32) {
        self.health = (self.health - fraction).max(0.0);
    }

    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }
}

impl Default for Ship {
    fn default() -> Self {
        Self::new()
    }
}

/// Formation member tag
#[derive(Debug, Clone, Copy)]
pub struct Invader;

/// Which faction fired a bullet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Ship,
    Invader,
}

/// Projectile tag
#[derive(Debug, Clone, Copy)]
pub struct Bullet {
    pub from: Side,
}

impl Bullet {
    pub fn new(from: Side) -> Self {
        Self { from }
    }
}

/// Scheduled straight-line travel: `from` to `dest` over `duration` seconds.
/// The entity is despawned on arrival.
#[derive(Debug, Clone, Copy)]
pub struct Flight {
    pub from: Vec2,
    pub dest: Vec2,
    pub duration: f32,
    pub elapsed: f32,
}

impl Flight {
    pub fn new(from: Vec2, dest: Vec2, duration: f32) -> Self {
        Self {
            from,
            dest,
            duration,
            elapsed: 0.0,
        }
    }

    pub fn has_arrived(&self) -> bool {
        self.elapsed >= self.duration
    }
}
