use game_core::*;
use glam::Vec2;
use hecs::World;

struct Sim {
    world: World,
    time: Time,
    config: Config,
    formation: Formation,
    score: Score,
    contacts: ContactQueue,
    inputs: InputQueue,
    events: Events,
    status: GameStatus,
    rng: GameRng,
}

impl Sim {
    fn new(dt: f32) -> Self {
        Self {
            world: World::new(),
            time: Time::new(dt, 0.0),
            config: Config::new(),
            formation: Formation::default(),
            score: Score::new(),
            contacts: ContactQueue::new(),
            inputs: InputQueue::new(),
            events: Events::new(),
            status: GameStatus::new(),
            rng: GameRng::new(12345),
        }
    }

    fn step(&mut self) {
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.formation,
            &mut self.score,
            &mut self.contacts,
            &mut self.inputs,
            &mut self.events,
            &mut self.status,
            &mut self.rng,
        );
    }

    fn ship_bullets(&self) -> usize {
        self.world
            .query::<&Bullet>()
            .iter()
            .filter(|(_e, b)| b.from == Side::Ship)
            .count()
    }

    fn invaders(&self) -> usize {
        self.world.query::<&Invader>().iter().count()
    }
}

#[test]
fn test_taps_produce_bullets_that_expire_in_flight() {
    let mut sim = Sim::new(0.25);
    create_ship(&mut sim.world, &sim.config);
    create_invader(&mut sim.world, Vec2::new(160.0, 300.0), &sim.config);

    sim.inputs.push_tap();
    sim.inputs.push_tap();
    sim.inputs.push_tap();
    sim.step();

    assert_eq!(sim.ship_bullets(), 3, "One bullet per tap");
    assert_eq!(sim.inputs.pending_taps(), 0, "Tap queue drained by the frame");

    // Ship bullets fly for 1.0s; at dt = 0.25 they expire on the 4th frame
    for _ in 0..3 {
        sim.step();
    }
    assert_eq!(sim.ship_bullets(), 0, "Bullets expired at their destination");
}

#[test]
fn test_contact_damages_ship_through_step() {
    let mut sim = Sim::new(0.016);
    let ship = create_ship(&mut sim.world, &sim.config);
    create_invader(&mut sim.world, Vec2::new(160.0, 300.0), &sim.config);
    let bullet = create_bullet(
        &mut sim.world,
        Side::Invader,
        Vec2::new(160.0, 40.0),
        Vec2::new(160.0, -12.0),
        sim.config.invader_bullet_flight_secs,
        &sim.config,
    );

    sim.contacts.push(ship, bullet);
    sim.step();

    let health = sim.world.get::<&Ship>(ship).unwrap().health;
    assert!((health - 0.666).abs() < 1e-6);
    assert!(!sim.world.contains(bullet));
    assert!(!sim.status.is_over());
}

#[test]
fn test_fatal_contact_silences_same_frame_taps() {
    let mut sim = Sim::new(0.016);
    let ship = create_ship(&mut sim.world, &sim.config);
    sim.world.get::<&mut Ship>(ship).unwrap().health = 0.2;
    create_invader(&mut sim.world, Vec2::new(160.0, 300.0), &sim.config);
    let bullet = create_bullet(
        &mut sim.world,
        Side::Invader,
        Vec2::new(160.0, 40.0),
        Vec2::new(160.0, -12.0),
        sim.config.invader_bullet_flight_secs,
        &sim.config,
    );

    // Contacts resolve before firing: the destroyed ship cannot shoot back
    sim.contacts.push(ship, bullet);
    sim.inputs.push_tap();
    sim.inputs.push_tap();
    sim.step();

    assert!(!sim.world.contains(ship), "Lethal hit removes the ship");
    assert_eq!(sim.ship_bullets(), 0, "Dead ship fires nothing");

    // The terminal state is observed at the top of the next frame
    sim.step();
    assert!(sim.status.is_over());
    assert!(sim.events.game_over);
}

#[test]
fn test_cleared_wave_ends_game_exactly_once() {
    let mut sim = Sim::new(0.016);
    create_ship(&mut sim.world, &sim.config);

    sim.step();
    assert!(sim.status.is_over());
    assert!(sim.events.game_over, "Terminal scene signalled");

    sim.inputs.push_tap();
    sim.step();
    assert!(!sim.events.game_over, "Signal fires exactly once");
    assert_eq!(sim.ship_bullets(), 0, "No gameplay after the end");
}

#[test]
fn test_formation_marches_pivots_and_speeds_up() {
    let mut sim = Sim::new(0.5);
    create_ship(&mut sim.world, &sim.config);
    spawn_wave(&mut sim.world, &sim.config);

    let start_min_y = sim
        .world
        .query::<(&Invader, &Body)>()
        .iter()
        .map(|(_e, (_i, b))| b.pos.y)
        .fold(f32::INFINITY, f32::min);

    // 6 seconds is enough to reach the right wall, descend, and turn
    for _ in 0..12 {
        sim.step();
    }

    let min_y = sim
        .world
        .query::<(&Invader, &Body)>()
        .iter()
        .map(|(_e, (_i, b))| b.pos.y)
        .fold(f32::INFINITY, f32::min);

    assert!(min_y < start_min_y, "Formation descended at the wall");
    assert!(
        sim.formation.step_seconds < sim.config.step_seconds_initial,
        "Cadence ramped on pivot exit"
    );
    assert_eq!(sim.formation.heading, Heading::Left);
    assert!(!sim.status.is_over());
}

#[test]
fn test_score_accumulates_in_fixed_awards() {
    let mut sim = Sim::new(0.016);
    create_ship(&mut sim.world, &sim.config);
    let a = create_invader(&mut sim.world, Vec2::new(100.0, 300.0), &sim.config);
    let b = create_invader(&mut sim.world, Vec2::new(140.0, 300.0), &sim.config);
    create_invader(&mut sim.world, Vec2::new(180.0, 300.0), &sim.config);

    let hit = |sim: &mut Sim, invader| {
        let bullet = create_bullet(
            &mut sim.world,
            Side::Ship,
            Vec2::new(100.0, 200.0),
            Vec2::new(100.0, 500.0),
            sim.config.ship_bullet_flight_secs,
            &sim.config,
        );
        sim.contacts.push(invader, bullet);
    };

    hit(&mut sim, a);
    sim.step();
    assert_eq!(sim.score.points, 100);

    hit(&mut sim, b);
    sim.step();
    assert_eq!(sim.score.points, 200, "Score only grows, 100 at a time");
    assert_eq!(sim.invaders(), 1);
}
