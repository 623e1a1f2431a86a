use hecs::{Entity, World};

use crate::components::{Bullet, Invader, Ship, Side};
use crate::config::Config;
use crate::resources::{ContactQueue, Events, Score, Sound};

/// Gameplay meaning of an entity in a contact pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Ship,
    Invader,
    ShipBullet,
    InvaderBullet,
}

fn category(world: &World, entity: Entity) -> Option<Category> {
    if world.get::<&Ship>(entity).is_ok() {
        return Some(Category::Ship);
    }
    if world.get::<&Invader>(entity).is_ok() {
        return Some(Category::Invader);
    }
    if let Ok(bullet) = world.get::<&Bullet>(entity) {
        return Some(match bullet.from {
            Side::Ship => Category::ShipBullet,
            Side::Invader => Category::InvaderBullet,
        });
    }
    None
}

/// Drain the contact queue and apply every queued event exactly once.
///
/// Events naming an entity already removed earlier in the same drain are
/// skipped silently: one entity may legitimately appear in several queued
/// contacts within a single frame. Pairings with no gameplay meaning
/// (e.g. boundary volumes) are discarded.
pub fn resolve_contacts(
    world: &mut World,
    contacts: &mut ContactQueue,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    for (a, b) in contacts.drain() {
        if !world.contains(a) || !world.contains(b) {
            continue;
        }

        let (Some(cat_a), Some(cat_b)) = (category(world, a), category(world, b)) else {
            continue;
        };

        match (cat_a, cat_b) {
            (Category::Ship, Category::InvaderBullet) => {
                ship_hit(world, a, b, config, events);
            }
            (Category::InvaderBullet, Category::Ship) => {
                ship_hit(world, b, a, config, events);
            }
            (Category::Invader, Category::ShipBullet) => {
                invader_down(world, a, b, config, score, events);
            }
            (Category::ShipBullet, Category::Invader) => {
                invader_down(world, b, a, config, score, events);
            }
            _ => {
                log::debug!("ignoring contact between {:?} and {:?}", cat_a, cat_b);
            }
        }
    }
}

/// An invader bullet struck the ship: damage the ship and consume the
/// bullet. The ship itself is removed only when its health reaches zero.
fn ship_hit(world: &mut World, ship: Entity, bullet: Entity, config: &Config, events: &mut Events) {
    let destroyed = {
        let Ok(mut ship) = world.get::<&mut Ship>(ship) else {
            return;
        };
        ship.hit(config.bullet_hit_fraction);
        ship.is_destroyed()
    };

    let _ = world.despawn(bullet);
    events.sounds.push(Sound::ShipHit);

    if destroyed {
        let _ = world.despawn(ship);
        log::info!("ship destroyed");
    }
}

/// A ship bullet struck an invader: remove both and award points.
fn invader_down(
    world: &mut World,
    invader: Entity,
    bullet: Entity,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
) {
    let _ = world.despawn(invader);
    let _ = world.despawn(bullet);
    score.award(config.score_per_invader);
    events.sounds.push(Sound::InvaderDown);
}
