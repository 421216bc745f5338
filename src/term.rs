use std::io::{stdout, Stdout, Write};

use anyhow::{bail, Context, Result};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, terminal};

use crate::game::GameState;
use crate::geometry::Grid;

const BORDER_CELL: &str = "# ";
const SNAKE_CELL: &str = "O ";
const FOOD_CELL: &str = "* ";
const EMPTY_CELL: &str = "  ";

/// Something that can show a game state. Called once per frame.
pub trait Renderer {
    fn draw(&mut self, state: &GameState) -> Result<()>;
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn draw(&mut self, state: &GameState) -> Result<()> {
        (**self).draw(state)
    }
}

/// The board as text, one string per row, followed by the score line.
pub fn frame_rows(state: &GameState) -> Vec<String> {
    let grid = state.grid();
    let mut rows = Vec::with_capacity(grid.height as usize + 1);

    for y in 0..grid.height {
        let mut row = String::with_capacity(grid.width as usize * 2);
        for x in 0..grid.width {
            let pos = (x, y);
            let cell = if grid.is_border(pos) {
                BORDER_CELL
            } else if state.snake().contains(pos) {
                SNAKE_CELL
            } else if state.food() == pos {
                FOOD_CELL
            } else {
                EMPTY_CELL
            };
            row.push_str(cell);
        }
        rows.push(row);
    }

    rows.push(format!("Score: {}", state.score()));
    rows
}

/// Terminal columns and rows needed to show a board.
pub fn required_size(grid: Grid) -> (u16, u16) {
    (grid.width as u16 * 2, grid.height as u16 + 1)
}

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self, grid: Grid) -> Result<()> {
        let (width, height) = terminal::size().context("Failed to read terminal size")?;
        let (need_w, need_h) = required_size(grid);
        if width < need_w || height < need_h {
            bail!("terminal is {}x{}, the board needs at least {}x{}", width, height, need_w, need_h);
        }

        execute!(self.stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(self.stdout, cursor::Hide, terminal::Clear(ClearType::All))
            .context("Failed to prepare screen")?;
        Ok(())
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(self.stdout, cursor::Show, LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        Ok(())
    }
}

impl Default for TermManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for TermManager {
    fn draw(&mut self, state: &GameState) -> Result<()> {
        for (y, row) in frame_rows(state).iter().enumerate() {
            queue!(
                self.stdout,
                cursor::MoveTo(0, y as u16),
                style::Print(row),
                terminal::Clear(ClearType::UntilNewLine)
            )
            .context("Failed to queue board row")?;
        }
        self.stdout.flush().context("Failed to flush board")?;
        Ok(())
    }
}
