use hecs::World;

use crate::components::{Body, Flight};
use crate::resources::Time;

/// Move every in-flight entity along its scheduled path and despawn on
/// arrival. Entities destroyed by contact resolution earlier in the frame
/// are simply gone, which cancels their remaining travel.
pub fn advance_flights(world: &mut World, time: &Time) {
    let mut arrived = Vec::new();

    for (entity, (body, flight)) in world.query_mut::<(&mut Body, &mut Flight)>() {
        flight.elapsed += time.dt;
        let t = (flight.elapsed / flight.duration).clamp(0.0, 1.0);
        body.pos = flight.from.lerp(flight.dest, t);

        if flight.has_arrived() {
            arrived.push(entity);
        }
    }

    for entity in arrived {
        let _ = world.despawn(entity);
    }
}
