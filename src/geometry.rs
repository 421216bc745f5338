use crate::{Coords, GridInt};

/// True if `pos` is on the border or anywhere outside it.
pub fn is_wall_collision(pos: Coords, width: GridInt, height: GridInt) -> bool {
    pos.0 <= 0 || pos.1 <= 0 || pos.0 >= width - 1 || pos.1 >= height - 1
}

pub fn is_self_collision(head: Coords, body_without_head: &[Coords]) -> bool {
    body_without_head.contains(&head)
}

/// Board dimensions, border included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: GridInt,
    pub height: GridInt,
}

impl Grid {
    pub fn new(width: GridInt, height: GridInt) -> Self {
        Grid { width, height }
    }

    pub fn is_wall(&self, pos: Coords) -> bool {
        is_wall_collision(pos, self.width, self.height)
    }

    pub fn is_border(&self, pos: Coords) -> bool {
        pos.0 == 0 || pos.1 == 0 || pos.0 == self.width - 1 || pos.1 == self.height - 1
    }

    /// Number of cells a snake can occupy.
    pub fn interior_len(&self) -> usize {
        let w = (self.width - 2).max(0) as usize;
        let h = (self.height - 2).max(0) as usize;
        w * h
    }

    pub fn interior_cells(&self) -> impl Iterator<Item = Coords> + '_ {
        (1..self.height - 1).flat_map(move |y| (1..self.width - 1).map(move |x| (x, y)))
    }
}
