pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use params::*;
pub use resources::*;

use glam::Vec2;
use hecs::World;
use systems::*;

/// Run one frame of the formation-shooter simulation.
///
/// All gameplay mutation happens inside this call, in a fixed order; the
/// physics and input collaborators only append to `contacts` and `inputs`
/// between frames, and the presenter reads `events` after each frame.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    formation: &mut Formation,
    score: &mut Score,
    contacts: &mut ContactQueue,
    inputs: &mut InputQueue,
    events: &mut Events,
    status: &mut GameStatus,
    rng: &mut GameRng,
) {
    // Clamp dt to prevent large jumps
    let frame = Time {
        dt: time.dt.min(Params::MAX_DT),
        now: time.now,
    };

    events.clear();

    // 1. Terminal check; once the game is over nothing else runs
    if status.ending || is_terminal(world, config) {
        end_game(status, events);
        time.now += frame.dt;
        return;
    }

    // 2. Resolve contacts queued by the physics collaborator
    resolve_contacts(world, contacts, config, score, events);

    // 3. One ship bullet per queued tap
    fire_ship_bullets(world, inputs, config, events);

    // 4. Continuous tilt steers the ship
    apply_tilt(world, &frame, config, inputs);

    // 5. March the formation when its cadence is due
    advance_formation(world, &frame, config, formation, events);

    // 6. The formation returns fire
    fire_invader_bullet(world, rng, config, events);

    // Scheduled bullet travel; arrival is expiry
    advance_flights(world, &frame);

    time.now += frame.dt;
}

/// Spawn the player ship at bottom-center of the arena
pub fn create_ship(world: &mut World, config: &Config) -> hecs::Entity {
    let pos = Vec2::new(
        config.arena_width / 2.0,
        config.ship_bottom_offset + config.ship_height / 2.0,
    );
    world.spawn((
        Ship::new(),
        Body::new(pos, Vec2::new(config.ship_width, config.ship_height)),
    ))
}

/// Spawn a single invader centered at `pos`
pub fn create_invader(world: &mut World, pos: Vec2, config: &Config) -> hecs::Entity {
    world.spawn((
        Invader,
        Body::new(pos, Vec2::new(config.invader_width, config.invader_height)),
    ))
}

/// Spawn the opening wave: a centered grid of invaders below the arena top
pub fn spawn_wave(world: &mut World, config: &Config) {
    let cols = Params::INVADER_COLS;
    let rows = Params::INVADER_ROWS;
    let pitch_x = config.invader_width + Params::INVADER_SPACING;
    let pitch_y = config.invader_height + Params::INVADER_SPACING;

    let grid_width = cols as f32 * config.invader_width + (cols - 1) as f32 * Params::INVADER_SPACING;
    let first_x = (config.arena_width - grid_width) / 2.0 + config.invader_width / 2.0;
    let top_y = config.arena_height - Params::FORMATION_TOP_OFFSET;

    for row in 0..rows {
        for col in 0..cols {
            let pos = Vec2::new(
                first_x + col as f32 * pitch_x,
                top_y - row as f32 * pitch_y,
            );
            create_invader(world, pos, config);
        }
    }
    log::info!("spawned {} invaders in {}x{} formation", rows * cols, rows, cols);
}

/// Spawn a bullet with a scheduled straight-line flight
pub fn create_bullet(
    world: &mut World,
    from: Side,
    pos: Vec2,
    dest: Vec2,
    duration: f32,
    config: &Config,
) -> hecs::Entity {
    world.spawn((
        Bullet::new(from),
        Body::new(pos, Vec2::new(config.bullet_width, config.bullet_height)),
        Flight::new(pos, dest, duration),
    ))
}
