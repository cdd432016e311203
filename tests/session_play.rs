use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serpent_maze::level::{AUTHORED_SIZE, LEVEL_START};
use serpent_maze::{Dir, GameConfig, Session, Status, StepOutcome};

fn seeded_session(seed: u64) -> (Session, StdRng) {
    let config = GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    };
    let mut rng = StdRng::seed_from_u64(seed);
    let session = Session::new(&config, &mut rng).unwrap();
    (session, rng)
}

#[test]
fn default_session_opens_on_the_authored_map() {
    let (session, _) = seeded_session(1);
    assert_eq!(session.level_count(), 20);
    assert_eq!(session.grid().width(), AUTHORED_SIZE);
    assert_eq!(session.chaser(), LEVEL_START);
    assert!(session.grid().is_open(session.target()));
    assert_ne!(session.target(), LEVEL_START);
}

#[test]
fn random_legal_play_keeps_tokens_on_open_tiles() {
    let (mut session, mut rng) = seeded_session(17);
    let mut cleared = 0;

    for _ in 0..2000 {
        let chaser = session.chaser();
        let legal: Vec<Dir> = Dir::ALL
            .into_iter()
            .filter(|&d| {
                session
                    .grid()
                    .neighbor(chaser, d)
                    .is_some_and(|p| session.grid().is_open(p))
            })
            .collect();
        let dir = *legal.choose(&mut rng).unwrap();

        match session.step(dir, &mut rng).unwrap() {
            StepOutcome::LevelCleared => {
                cleared += 1;
                session.advance_level(&mut rng).unwrap();
            }
            StepOutcome::GameOver(over) => panic!("legal move ended the game: {over:?}"),
            StepOutcome::Blocked => panic!("legal move was blocked"),
            StepOutcome::Moved { .. } | StepOutcome::Caught { .. } => {}
        }

        assert_eq!(session.status(), Status::Playing);
        assert!(session.grid().is_open(session.chaser()));
        assert!(session.grid().is_open(session.target()));
    }

    assert_eq!(session.level_number(), 1 + cleared);
}

#[test]
fn restart_reuses_the_level_list() {
    let (mut session, mut rng) = seeded_session(3);
    let first = session.grid().clone();
    while session.tick().unwrap().is_none() {}
    assert!(matches!(session.status(), Status::GameOver(_)));
    assert_eq!(session.best_level(), 1);

    session.restart(&mut rng);
    assert_eq!(session.grid(), &first);
    assert_eq!(session.time_left(), 20);
}
