use log::debug;
use rand::Rng;

use crate::config::{ConfigError, GameConfig};
use crate::food::place_food;
use crate::geometry::{is_self_collision, Grid};
use crate::snake::{Direction, Snake};
use crate::Coords;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
    /// The snake covers every interior cell.
    Won,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Collision {
    Wall,
    SelfCollision,
}

/// What a single tick did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    /// No direction chosen yet, nothing moved
    Idle,
    Moved,
    Ate,
    Crashed(Collision),
    /// Food was eaten and there is nowhere left to put the next one
    BoardFilled,
    /// The game is already over
    Halted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: Grid,
    snake: Snake,
    food: Coords,
    score: u32,
    direction: Direction,
    phase: Phase,
}

impl GameState {
    /// Starts a game with a one-segment snake and randomly placed food.
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, ConfigError> {
        config.validate()?;

        let grid = config.grid();
        let snake = Snake::new(config.start);
        let food = place_food(&snake, grid, rng)
            .ok_or(ConfigError::BoardTooSmall { width: config.width, height: config.height })?;

        Ok(GameState::from_parts(grid, snake, food, Direction::Still))
    }

    /// A running game in an arbitrary position.
    pub fn from_parts(grid: Grid, snake: Snake, food: Coords, direction: Direction) -> Self {
        GameState { grid, snake, food, score: 0, direction, phase: Phase::Running }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> Coords {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// Advances the game by one cell. `pending` is the last direction the player asked
    /// for; a reversal or `Still` keeps the current heading. Once the game has ended
    /// this does nothing.
    pub fn tick<R: Rng + ?Sized>(&mut self, pending: Direction, rng: &mut R) -> Step {
        if !self.is_running() {
            return Step::Halted;
        }

        let direction = self.direction.steer(pending);
        if direction != pending && pending != Direction::Still {
            debug!("ignoring reversal {:?} while heading {:?}", pending, self.direction);
        }
        self.direction = direction;

        if direction == Direction::Still {
            return Step::Idle;
        }

        let (dx, dy) = direction.delta();
        let head = self.snake.head();
        let new_head = (head.0 + dx, head.1 + dy);

        if self.grid.is_wall(new_head) {
            self.phase = Phase::GameOver;
            return Step::Crashed(Collision::Wall);
        }
        if is_self_collision(new_head, self.snake.trailing_after_shift()) {
            self.phase = Phase::GameOver;
            return Step::Crashed(Collision::SelfCollision);
        }

        let ate = new_head == self.food;
        self.snake.advance(new_head, ate);

        if !ate {
            return Step::Moved;
        }

        self.score += 1;
        match place_food(&self.snake, self.grid, rng) {
            Some(food) => {
                self.food = food;
                Step::Ate
            }
            None => {
                self.phase = Phase::Won;
                Step::BoardFilled
            }
        }
    }
}
