use hecs::World;

use crate::components::{Body, Invader, Ship};
use crate::config::Config;
use crate::resources::{Events, GameStatus, Sound};

/// Terminal conditions: the formation is cleared, an invader has descended
/// to the breach line, or the ship is gone.
pub fn is_terminal(world: &World, config: &Config) -> bool {
    if world.query::<&Ship>().iter().next().is_none() {
        return true;
    }

    let mut any_invader = false;
    for (_entity, (_invader, body)) in world.query::<(&Invader, &Body)>().iter() {
        any_invader = true;
        if body.bottom() <= config.breach_line() {
            return true;
        }
    }
    !any_invader
}

/// Latch the end of the game. The terminal-scene signal fires exactly once
/// no matter how often this is called.
pub fn end_game(status: &mut GameStatus, events: &mut Events) {
    if status.ending {
        return;
    }
    status.ending = true;
    events.game_over = true;
    events.sounds.push(Sound::GameOver);
    log::info!("game over");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_invader, create_ship};
    use glam::Vec2;

    #[test]
    fn test_cleared_formation_is_terminal() {
        let mut world = World::new();
        let config = Config::new();
        create_ship(&mut world, &config);

        assert!(is_terminal(&world, &config), "No invaders left");
    }

    #[test]
    fn test_running_game_is_not_terminal() {
        let mut world = World::new();
        let config = Config::new();
        create_ship(&mut world, &config);
        create_invader(&mut world, Vec2::new(160.0, 300.0), &config);

        assert!(!is_terminal(&world, &config));
    }

    #[test]
    fn test_breach_is_terminal() {
        let mut world = World::new();
        let config = Config::new();
        create_ship(&mut world, &config);
        // Invader bottom edge exactly at twice the ship height
        let y = config.breach_line() + config.invader_height / 2.0;
        create_invader(&mut world, Vec2::new(160.0, y), &config);

        assert!(is_terminal(&world, &config), "Breach line reached");
    }

    #[test]
    fn test_destroyed_ship_is_terminal() {
        let mut world = World::new();
        let config = Config::new();
        create_invader(&mut world, Vec2::new(160.0, 300.0), &config);

        assert!(is_terminal(&world, &config));
    }

    #[test]
    fn test_end_game_fires_exactly_once() {
        let mut status = GameStatus::new();
        let mut events = Events::new();

        end_game(&mut status, &mut events);
        assert!(events.game_over);
        assert_eq!(events.sounds, vec![Sound::GameOver]);

        events.clear();
        end_game(&mut status, &mut events);
        assert!(!events.game_over, "Second call must not re-signal");
        assert!(events.sounds.is_empty());
        assert!(status.is_over());
    }
}
