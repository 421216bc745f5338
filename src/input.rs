use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use log::{debug, info};

use crate::snake::Direction::{self, *};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Steer(Direction),
    Quit,
}

/// The most recent direction asked for and not yet consumed by a tick.
///
/// Written by the input task and read by the frame loop without locking; the
/// direction lives in a single byte so a swap is never torn.
#[derive(Debug)]
pub struct PendingDirection {
    cell: AtomicU8,
}

impl PendingDirection {
    pub fn new() -> Self {
        PendingDirection { cell: AtomicU8::new(encode(Still)) }
    }

    /// Replaces whatever was pending.
    pub fn set(&self, direction: Direction) {
        self.cell.store(encode(direction), Ordering::Release);
    }

    /// Consumes the pending direction, leaving `Still` behind.
    pub fn take(&self) -> Direction {
        decode(self.cell.swap(encode(Still), Ordering::AcqRel))
    }

    pub fn peek(&self) -> Direction {
        decode(self.cell.load(Ordering::Acquire))
    }
}

impl Default for PendingDirection {
    fn default() -> Self {
        Self::new()
    }
}

fn encode(direction: Direction) -> u8 {
    match direction {
        Still => 0,
        Up => 1,
        Down => 2,
        Left => 3,
        Right => 4,
    }
}

fn decode(raw: u8) -> Direction {
    match raw {
        1 => Up,
        2 => Down,
        3 => Left,
        4 => Right,
        _ => Still,
    }
}

pub fn route_key(key: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => Some(Command::Steer(Up)),
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Left => Some(Command::Steer(Left)),
        KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => Some(Command::Steer(Down)),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Right => Some(Command::Steer(Right)),
        KeyCode::Char('c') | KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            Some(Command::Quit)
        }
        _ => None,
    }
}

/// Feeds key presses into `pending` until the player quits or the terminal
/// closes its event stream.
pub async fn listen(pending: Arc<PendingDirection>) -> Result<()> {
    let mut events = EventStream::new();

    while let Some(event) = events.next().await {
        let event = event.context("Failed to read terminal event")?;

        let key = match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        match route_key(&key) {
            Some(Command::Steer(direction)) => {
                debug!("steer {:?}", direction);
                pending.set(direction);
            }
            Some(Command::Quit) => {
                info!("quit requested");
                return Ok(());
            }
            None => {}
        }
    }

    info!("terminal event stream closed");
    Ok(())
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_and_wasd_steer() {
        assert_eq!(route_key(&key(KeyCode::Up)), Some(Command::Steer(Up)));
        assert_eq!(route_key(&key(KeyCode::Down)), Some(Command::Steer(Down)));
        assert_eq!(route_key(&key(KeyCode::Left)), Some(Command::Steer(Left)));
        assert_eq!(route_key(&key(KeyCode::Right)), Some(Command::Steer(Right)));
        assert_eq!(route_key(&key(KeyCode::Char('w'))), Some(Command::Steer(Up)));
        assert_eq!(route_key(&key(KeyCode::Char('A'))), Some(Command::Steer(Left)));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(route_key(&key(KeyCode::Char('c'))), Some(Command::Quit));
        assert_eq!(route_key(&key(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(route_key(&key(KeyCode::Esc)), Some(Command::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(route_key(&ctrl_c), Some(Command::Quit));
    }

    #[test]
    fn other_keys_are_ignored() {
        assert_eq!(route_key(&key(KeyCode::Char('x'))), None);
        assert_eq!(route_key(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn last_write_wins_and_take_clears() {
        let pending = PendingDirection::new();
        assert_eq!(pending.take(), Still);

        pending.set(Up);
        pending.set(Left);
        assert_eq!(pending.peek(), Left);
        assert_eq!(pending.take(), Left);
        assert_eq!(pending.take(), Still);
    }

    #[test]
    fn concurrent_writers_never_tear() {
        let pending = Arc::new(PendingDirection::new());
        let writers: Vec<_> = [Up, Down, Left, Right]
            .into_iter()
            .map(|dir| {
                let pending = Arc::clone(&pending);
                thread::spawn(move || {
                    for _ in 0..10_000 {
                        pending.set(dir);
                    }
                })
            })
            .collect();

        for _ in 0..10_000 {
            let raw = pending.cell.load(Ordering::Acquire);
            assert!(raw <= 4);
        }
        for writer in writers {
            writer.join().unwrap();
        }
        assert_ne!(pending.take(), Still);
    }
}
