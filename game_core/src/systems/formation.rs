use glam::Vec2;
use hecs::World;

use crate::components::{Body, Invader};
use crate::config::Config;
use crate::resources::{Events, Formation, Heading, Time};

/// Advance the invader formation by one step when its cadence is due.
///
/// The heading transition is decided by scanning every living invader
/// *before* any of them move: a partially moved grid would corrupt the
/// edge detection. The scan short-circuits at the first invader past the
/// trigger line. Pivot headings descend one step and exit horizontally on
/// the following step, speeding the cadence up on the way out.
pub fn advance_formation(
    world: &mut World,
    time: &Time,
    config: &Config,
    formation: &mut Formation,
    events: &mut Events,
) {
    if formation.heading == Heading::Idle {
        return;
    }
    if !formation.step_due(time.now) {
        return;
    }

    let mut proposed = formation.heading;
    match formation.heading {
        Heading::Right => {
            for (_entity, (_invader, body)) in world.query::<(&Invader, &Body)>().iter() {
                if body.right() >= config.right_edge() {
                    proposed = Heading::DownThenLeft;
                    break;
                }
            }
        }
        Heading::Left => {
            for (_entity, (_invader, body)) in world.query::<(&Invader, &Body)>().iter() {
                if body.left() <= config.left_edge() {
                    proposed = Heading::DownThenRight;
                    break;
                }
            }
        }
        Heading::DownThenLeft => {
            proposed = Heading::Left;
            ramp_cadence(formation, config, events);
        }
        Heading::DownThenRight => {
            proposed = Heading::Right;
            ramp_cadence(formation, config, events);
        }
        Heading::Idle => return,
    }

    formation.heading = proposed;

    let delta = match formation.heading {
        Heading::Right => Vec2::new(config.step_distance, 0.0),
        Heading::Left => Vec2::new(-config.step_distance, 0.0),
        Heading::DownThenLeft | Heading::DownThenRight => Vec2::new(0.0, -config.step_distance),
        Heading::Idle => Vec2::ZERO,
    };

    for (_entity, (_invader, body)) in world.query_mut::<(&Invader, &mut Body)>() {
        body.pos += delta;
    }
    formation.last_step = time.now;
}

fn ramp_cadence(formation: &mut Formation, config: &Config, events: &mut Events) {
    if let Some(scale) = formation.ramp(config.step_seconds_ramp) {
        events.cadence_scale = Some(scale);
        log::info!("formation cadence now {:.3}s per step", formation.step_seconds);
    }
}
