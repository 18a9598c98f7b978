use std::time::Duration;

use snake_modes::{
    game::{
        Boundary, Event, GameConfig, GameOverReason, Mode, Simulation, Snake,
        Status,
    },
    grid::{Board, Coord, Direction},
    strategies::{Greedy, Strategy},
};

fn ms(millis: u64) -> Duration {
    Duration::from_millis(millis)
}

#[test]
fn move_then_grow_scenario() {
    let board = Board::square(20);
    let mut snake = Snake::new(Coord::new(10, 10), Direction::Right);

    snake.advance(&board);
    assert_eq!(snake.head(), Coord::new(11, 10));
    assert_eq!(snake.len(), 1);

    snake.grow();
    snake.advance(&board);
    assert_eq!(snake.len(), 2);
    assert_eq!(snake.head(), Coord::new(12, 10));
    assert_eq!(snake.tail(), Coord::new(11, 10));
}

#[test]
fn classic_wraps_at_left_edge() {
    let config = GameConfig {
        start: Coord::new(0, 10),
        start_direction: Direction::Left,
        seed: Some(21),
        ..Default::default()
    };
    let mut sim = Simulation::new(config, Mode::Classic).unwrap();
    sim.start(ms(0)).unwrap();

    let events = sim.tick(ms(200)).unwrap();
    assert!(events.contains(&Event::Moved {
        head: Coord::new(19, 10),
    }));
    assert!(!events.iter().any(Event::is_game_over));
    assert_eq!(sim.status(), Status::Playing);
}

#[test]
fn solid_edge_ends_and_resets() {
    let config = GameConfig {
        start: Coord::new(0, 10),
        start_direction: Direction::Left,
        boundary: Boundary::Solid,
        seed: Some(21),
        ..Default::default()
    };
    let mut sim = Simulation::new(config, Mode::Classic).unwrap();
    sim.start(ms(0)).unwrap();

    let events = sim.tick(ms(200)).unwrap();
    assert!(events.contains(&Event::GameOver {
        reason: GameOverReason::OutOfBounds,
        score:  0,
    }));
    assert_eq!(events.last(), Some(&Event::Redraw));
    assert_eq!(sim.status(), Status::Stopped);
    assert_eq!(sim.game().snake().head(), Coord::new(0, 10));
    assert_eq!(sim.game().score(), 0);
}

#[test]
fn best_score_survives_game_over() {
    let config = GameConfig {
        boundary: Boundary::Solid,
        seed: Some(99),
        ..Default::default()
    };
    let mut sim = Simulation::new(config, Mode::Speed).unwrap();
    sim.start(ms(0)).unwrap();

    let mut now = ms(0);
    let mut best_seen = 0;
    while sim.game().score() < 3 {
        now += sim.game().move_interval();
        let direction = Greedy.get_direction(sim.game()).unwrap();
        sim.turn(direction);
        for event in sim.tick(now).unwrap() {
            if let Event::ScoreChanged { score, best } = event {
                assert!(best >= score);
                assert!(best >= best_seen);
                best_seen = best;
            }
        }
        assert!(now < ms(60_000), "greedy stalled");
    }
    assert!(sim.game().move_interval() < ms(200));

    sim.stop().unwrap();
    assert_eq!(sim.game().score(), 0);
    assert_eq!(sim.game().best_score(), 3);
    assert_eq!(sim.game().move_interval(), ms(200));
}

#[test]
fn portal_game_keeps_portals_apart() {
    let config = GameConfig {
        seed: Some(5),
        ..Default::default()
    };
    let mut sim = Simulation::new(config, Mode::Portal).unwrap();
    sim.start(ms(0)).unwrap();

    let mut now = ms(0);
    let mut jumps = 0;
    for _ in 0..400 {
        now += sim.game().move_interval();
        let before = sim.game().portals().unwrap();
        let direction = Greedy.get_direction(sim.game()).unwrap();
        sim.turn(direction);

        for event in sim.tick(now).unwrap() {
            if let Event::Teleported { from, to } = event {
                jumps += 1;
                assert_eq!(before.partner(from), Some(to));
                assert_eq!(sim.game().snake().head(), to);
            }
        }

        let portals = sim.game().portals().unwrap();
        assert_ne!(portals.entry.position, portals.exit.position);
        if jumps >= 3 {
            break;
        }
    }
    assert!(jumps >= 3);
    assert_eq!(sim.game().score(), jumps);
}

#[test]
fn mode_names_reject_garbage() {
    assert!("classic".parse::<Mode>().is_ok());
    assert!("CLASSIC".parse::<Mode>().is_err());
    assert!("".parse::<Mode>().is_err());
}
