use crate::Coords;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    /// No movement; the snake waits here until the first key press.
    Still,
}

impl Direction {
    pub fn delta(&self) -> Coords {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
            Still => (0, 0),
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right))
    }

    /// The direction to move in this tick given what the player asked for.
    pub fn steer(self, requested: Direction) -> Direction {
        match requested {
            Still => self,
            dir if dir.is_opposite(self) => self,
            dir => dir,
        }
    }
}

/// Snake body, head first. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Coords>,
}

impl Snake {
    pub fn new(head: Coords) -> Self {
        Snake { body: vec![head] }
    }

    /// Builds a snake from head-first segments, `None` if there are none.
    pub fn from_body(body: Vec<Coords>) -> Option<Self> {
        if body.is_empty() {
            None
        } else {
            Some(Snake { body })
        }
    }

    pub fn body(&self) -> &[Coords] {
        &self.body
    }

    pub fn head(&self) -> Coords {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: Coords) -> bool {
        self.body.contains(&pos)
    }

    /// Segments that stay on the board after the next shift: everything but the tail.
    pub fn trailing_after_shift(&self) -> &[Coords] {
        &self.body[..self.body.len() - 1]
    }

    /// Moves the head to `new_head`. Without growth the tail is dropped and returned.
    pub fn advance(&mut self, new_head: Coords, grow: bool) -> Option<Coords> {
        self.body.insert(0, new_head);

        if grow {
            None
        } else {
            self.body.pop()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_directions() {
        assert!(Up.is_opposite(Down));
        assert!(Left.is_opposite(Right));
        assert!(!Up.is_opposite(Left));
        assert!(!Still.is_opposite(Still));
        assert!(!Right.is_opposite(Still));
    }

    #[test]
    fn steering_ignores_reversal_and_still() {
        assert_eq!(Right.steer(Left), Right);
        assert_eq!(Right.steer(Still), Right);
        assert_eq!(Right.steer(Up), Up);
        assert_eq!(Still.steer(Left), Left);
        assert_eq!(Still.steer(Still), Still);
    }

    #[test]
    fn advance_drops_tail_unless_growing() {
        let mut snake = Snake::from_body(vec![(5, 5), (4, 5)]).unwrap();

        assert_eq!(snake.advance((6, 5), false), Some((4, 5)));
        assert_eq!(snake.body(), &[(6, 5), (5, 5)]);

        assert_eq!(snake.advance((7, 5), true), None);
        assert_eq!(snake.body(), &[(7, 5), (6, 5), (5, 5)]);
    }

    #[test]
    fn trailing_segments_exclude_tail() {
        let snake = Snake::from_body(vec![(5, 5), (5, 6), (5, 7)]).unwrap();
        assert_eq!(snake.trailing_after_shift(), &[(5, 5), (5, 6)]);
        assert!(Snake::new((1, 1)).trailing_after_shift().is_empty());
        assert!(Snake::from_body(vec![]).is_none());
    }
}
