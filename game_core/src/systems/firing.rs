use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::{Body, Bullet, Invader, Ship, Side};
use crate::config::Config;
use crate::create_bullet;
use crate::resources::{Events, GameRng, InputQueue, Sound};

/// Launch one ship bullet per queued tap. There is no cap on live ship
/// bullets: the tap queue itself is the only rate limit.
pub fn fire_ship_bullets(
    world: &mut World,
    inputs: &mut InputQueue,
    config: &Config,
    events: &mut Events,
) {
    let taps = inputs.take_taps();
    if taps == 0 {
        return;
    }

    let muzzle = world
        .query::<(&Ship, &Body)>()
        .iter()
        .next()
        .map(|(_entity, (_ship, body))| Vec2::new(body.pos.x, body.top()));
    let Some(muzzle) = muzzle else {
        log::debug!("{} taps ignored: no ship to fire from", taps);
        return;
    };

    let origin = muzzle + Vec2::new(0.0, config.bullet_height / 2.0);
    let dest = Vec2::new(origin.x, config.arena_height + config.bullet_height);
    for _ in 0..taps {
        create_bullet(
            world,
            Side::Ship,
            origin,
            dest,
            config.ship_bullet_flight_secs,
            config,
        );
        events.sounds.push(Sound::ShipFire);
    }
}

/// Let the formation return fire: at most one invader bullet is live at a
/// time, and the shooter is drawn uniformly from the living invaders.
pub fn fire_invader_bullet(
    world: &mut World,
    rng: &mut GameRng,
    config: &Config,
    events: &mut Events,
) {
    for (_entity, bullet) in world.query::<&Bullet>().iter() {
        if bullet.from == Side::Invader {
            return;
        }
    }

    let shooters: Vec<Vec2> = world
        .query::<(&Invader, &Body)>()
        .iter()
        .map(|(_entity, (_invader, body))| Vec2::new(body.pos.x, body.bottom()))
        .collect();
    if shooters.is_empty() {
        return;
    }

    let picked = shooters[rng.0.gen_range(0..shooters.len())];
    let origin = picked - Vec2::new(0.0, config.bullet_height / 2.0);
    let dest = Vec2::new(origin.x, -config.bullet_height);
    create_bullet(
        world,
        Side::Invader,
        origin,
        dest,
        config.invader_bullet_flight_secs,
        config,
    );
    events.sounds.push(Sound::InvaderFire);
}
