/// Game tuning parameters for the formation shooter
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (y-up, floor at y = 0)
    pub const ARENA_WIDTH: f32 = 320.0;
    pub const ARENA_HEIGHT: f32 = 480.0;
    pub const EDGE_MARGIN: f32 = 1.0;

    // Ship
    pub const SHIP_WIDTH: f32 = 24.0;
    pub const SHIP_HEIGHT: f32 = 16.0;
    pub const SHIP_BOTTOM_OFFSET: f32 = 24.0;
    pub const SHIP_TILT_SPEED: f32 = 240.0; // units/s per g of tilt

    // Invader formation
    pub const INVADER_WIDTH: f32 = 24.0;
    pub const INVADER_HEIGHT: f32 = 16.0;
    pub const INVADER_ROWS: usize = 4;
    pub const INVADER_COLS: usize = 8;
    pub const INVADER_SPACING: f32 = 10.0;
    pub const FORMATION_TOP_OFFSET: f32 = 60.0;
    pub const STEP_DISTANCE: f32 = 10.0;
    pub const STEP_SECONDS_INITIAL: f32 = 1.0;
    pub const STEP_SECONDS_RAMP: f32 = 0.8;

    // Bullets
    pub const BULLET_WIDTH: f32 = 4.0;
    pub const BULLET_HEIGHT: f32 = 12.0;
    pub const SHIP_BULLET_FLIGHT_SECS: f32 = 1.0;
    pub const INVADER_BULLET_FLIGHT_SECS: f32 = 2.0;

    // Damage / score
    pub const BULLET_HIT_FRACTION: f32 = 0.334;
    pub const SCORE_PER_INVADER: u32 = 100;

    // Game over: invaders breach at 2x ship height above the floor
    pub const BREACH_FACTOR: f32 = 2.0;

    // Frame stepping
    pub const MAX_DT: f32 = 0.1;
}
