use std::collections::HashSet;

use rand::{rngs::StdRng, Rng, SeedableRng};

use snaketerm::config::GameConfig;
use snaketerm::game::{GameState, Phase, Step};
use snaketerm::snake::Direction;

const DIRECTIONS: [Direction; 5] =
    [Direction::Up, Direction::Down, Direction::Left, Direction::Right, Direction::Still];

fn assert_invariants(state: &GameState) {
    let body = state.snake().body();
    let unique: HashSet<_> = body.iter().collect();
    assert_eq!(unique.len(), body.len(), "segments overlap: {:?}", body);
    assert!(body.iter().all(|pos| !state.grid().is_wall(*pos)));
    assert!(!state.snake().contains(state.food()));
    assert!(!state.grid().is_wall(state.food()));
    assert_eq!(state.score() as usize, body.len() - 1);
}

#[test]
fn random_games_keep_their_invariants() {
    let config = GameConfig { width: 8, height: 8, start: (4, 4), ..Default::default() };

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut state = GameState::new(&config, &mut rng).unwrap();

        for _ in 0..500 {
            let before = state.clone();
            let pending = DIRECTIONS[rng.gen_range(0..DIRECTIONS.len())];
            let step = state.tick(pending, &mut rng);

            let grown = state.snake().len() - before.snake().len();
            assert!(grown <= 1);
            assert!(state.score() >= before.score());
            assert!(!state.direction().is_opposite(before.direction()));

            match step {
                Step::Crashed(_) => {
                    assert_eq!(state.phase(), Phase::GameOver);
                    assert_eq!(state.snake(), before.snake());
                    assert_eq!(state.score(), before.score());
                    break;
                }
                Step::BoardFilled => {
                    assert_eq!(state.phase(), Phase::Won);
                    break;
                }
                Step::Ate => assert_eq!(grown, 1),
                Step::Moved | Step::Idle => assert_eq!(grown, 0),
                Step::Halted => panic!("tick reported halted on a running game"),
            }

            assert_invariants(&state);
        }
    }
}

#[test]
fn chasing_the_first_food_scores() {
    let config = GameConfig::default();
    let mut rng = StdRng::seed_from_u64(11);
    let mut state = GameState::new(&config, &mut rng).unwrap();
    let target = state.food();

    // Vertical first, then horizontal: a one-segment snake never has to reverse.
    while state.score() == 0 {
        let head = state.snake().head();
        let pending = if head.1 < target.1 {
            Direction::Down
        } else if head.1 > target.1 {
            Direction::Up
        } else if head.0 < target.0 {
            Direction::Right
        } else {
            Direction::Left
        };
        state.tick(pending, &mut rng);
        assert!(state.is_running());
    }

    assert_eq!(state.snake().head(), target);
    assert_eq!(state.snake().len(), 2);
    assert_invariants(&state);
}
