use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use rand::Rng;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

use crate::config::GameConfig;
use crate::game::{GameState, Step};
use crate::input::PendingDirection;
use crate::term::Renderer;

/// Limits how often the snake moves, independently of how often frames are drawn.
#[derive(Debug, Clone)]
pub struct Pacer {
    period: Duration,
    last_move: Option<Instant>,
}

impl Pacer {
    pub fn new(period: Duration) -> Self {
        Pacer { period, last_move: None }
    }

    /// True if a move is due at `now`. The first call always is.
    pub fn ready(&mut self, now: Instant) -> bool {
        let due = match self.last_move {
            None => true,
            Some(last) => now.saturating_duration_since(last) >= self.period,
        };
        if due {
            self.last_move = Some(now);
        }
        due
    }
}

#[derive(Debug)]
pub enum Ending {
    /// The player asked to leave
    Quit,
    /// The game reached GameOver or Won
    Finished(GameState),
}

/// The frame loop: owns the game state and is the only thing that changes it.
pub struct Session<D: Renderer, R: Rng> {
    state: GameState,
    pacer: Pacer,
    frame_interval: Duration,
    pending: Arc<PendingDirection>,
    renderer: D,
    rng: R,
}

impl<D: Renderer, R: Rng> Session<D, R> {
    pub fn new(
        config: &GameConfig,
        pending: Arc<PendingDirection>,
        renderer: D,
        mut rng: R,
    ) -> Result<Self> {
        let state = GameState::new(config, &mut rng).context("Invalid game configuration")?;

        Ok(Session {
            state,
            pacer: Pacer::new(config.move_interval()),
            frame_interval: config.frame_interval,
            pending,
            renderer,
            rng,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn renderer(&self) -> &D {
        &self.renderer
    }

    /// One scheduler wake: advance if a move is due, then redraw either way.
    pub fn frame(&mut self, now: Instant) -> Result<Option<Step>> {
        let mut step = None;

        if self.state.is_running() && self.pacer.ready(now) {
            let pending = self.pending.take();
            let result = self.state.tick(pending, &mut self.rng);
            log_step(result, &self.state);
            step = Some(result);
        }

        self.renderer.draw(&self.state)?;
        Ok(step)
    }

    /// Drives frames until the game ends or `input` finishes, which means quit.
    pub async fn run(mut self, mut input: JoinHandle<Result<()>>) -> Result<Ending> {
        let mut frames = interval(self.frame_interval);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                joined = &mut input => {
                    joined.context("Input task panicked")??;
                    return Ok(Ending::Quit);
                }
                now = frames.tick() => {
                    self.frame(now.into_std())?;
                    if !self.state.is_running() {
                        input.abort();
                        return Ok(Ending::Finished(self.state));
                    }
                }
            }
        }
    }
}

fn log_step(step: Step, state: &GameState) {
    match step {
        Step::Idle | Step::Halted => {}
        Step::Moved => debug!("head at {:?}", state.snake().head()),
        Step::Ate => info!("food eaten, score {}, next food at {:?}", state.score(), state.food()),
        Step::Crashed(collision) => info!(
            "crashed ({:?}) heading {:?} from {:?}, final score {}",
            collision,
            state.direction(),
            state.snake().head(),
            state.score()
        ),
        Step::BoardFilled => warn!("board filled with score {}", state.score()),
    }
}
