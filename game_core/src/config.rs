use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub edge_margin: f32,
    pub ship_width: f32,
    pub ship_height: f32,
    pub ship_bottom_offset: f32,
    pub ship_tilt_speed: f32,
    pub invader_width: f32,
    pub invader_height: f32,
    pub step_distance: f32,
    pub step_seconds_initial: f32,
    pub step_seconds_ramp: f32,
    pub bullet_width: f32,
    pub bullet_height: f32,
    pub ship_bullet_flight_secs: f32,
    pub invader_bullet_flight_secs: f32,
    pub bullet_hit_fraction: f32,
    pub score_per_invader: u32,
    pub breach_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            edge_margin: Params::EDGE_MARGIN,
            ship_width: Params::SHIP_WIDTH,
            ship_height: Params::SHIP_HEIGHT,
            ship_bottom_offset: Params::SHIP_BOTTOM_OFFSET,
            ship_tilt_speed: Params::SHIP_TILT_SPEED,
            invader_width: Params::INVADER_WIDTH,
            invader_height: Params::INVADER_HEIGHT,
            step_distance: Params::STEP_DISTANCE,
            step_seconds_initial: Params::STEP_SECONDS_INITIAL,
            step_seconds_ramp: Params::STEP_SECONDS_RAMP,
            bullet_width: Params::BULLET_WIDTH,
            bullet_height: Params::BULLET_HEIGHT,
            ship_bullet_flight_secs: Params::SHIP_BULLET_FLIGHT_SECS,
            invader_bullet_flight_secs: Params::INVADER_BULLET_FLIGHT_SECS,
            bullet_hit_fraction: Params::BULLET_HIT_FRACTION,
            score_per_invader: Params::SCORE_PER_INVADER,
            breach_factor: Params::BREACH_FACTOR,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X coordinate of the right-edge pivot trigger line
    pub fn right_edge(&self) -> f32 {
        self.arena_width - self.edge_margin
    }

    /// X coordinate of the left-edge pivot trigger line
    pub fn left_edge(&self) -> f32 {
        self.edge_margin
    }

    /// Invaders at or below this Y have breached the formation floor
    pub fn breach_line(&self) -> f32 {
        self.breach_factor * self.ship_height
    }

    /// Clamp the ship's center X to keep it fully inside the arena
    pub fn clamp_ship_x(&self, x: f32) -> f32 {
        let half_width = self.ship_width / 2.0;
        x.clamp(
            self.edge_margin + half_width,
            self.arena_width - self.edge_margin - half_width,
        )
    }
}
