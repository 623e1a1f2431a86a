use hecs::World;

use crate::components::{Body, Ship};
use crate::config::Config;
use crate::resources::{InputQueue, Time};

/// Apply the latest continuous acceleration sample to the ship. The sample
/// is not queued; only the most recent value matters, and it keeps acting
/// until the input collaborator replaces it.
pub fn apply_tilt(world: &mut World, time: &Time, config: &Config, inputs: &InputQueue) {
    let dx = inputs.tilt_x * config.ship_tilt_speed * time.dt;
    if dx == 0.0 {
        return;
    }

    for (_entity, (_ship, body)) in world.query_mut::<(&Ship, &mut Body)>() {
        body.pos.x = config.clamp_ship_x(body.pos.x + dx);
    }
}
