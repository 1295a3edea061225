use crate::Coords;
use crate::grid::TILE_SIZE;
use std::collections::VecDeque;
use Direction::*;

pub type Velocity = (i32, i32);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn delta(self) -> Velocity {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    head: Coords,
    body: VecDeque<Coords>,
    velocity: Velocity,
}

impl Snake {
    pub fn new(head: Coords) -> Self {
        Snake { head, body: VecDeque::new(), velocity: (0, 0) }
    }

    pub fn head(&self) -> Coords {
        self.head
    }

    /// Segments behind the head, nearest first.
    pub fn body(&self) -> &VecDeque<Coords> {
        &self.body
    }

    pub fn move_step(&mut self) {
        if self.velocity == (0, 0) {
            return;
        }

        if !self.body.is_empty() {
            self.body.pop_back();
            self.body.push_front(self.head);
        }

        self.head.0 += self.velocity.0 * TILE_SIZE;
        self.head.1 += self.velocity.1 * TILE_SIZE;
    }

    pub fn grow(&mut self) {
        self.body.push_back(self.head);
    }

    pub fn check_self_collision(&self) -> bool {
        self.body.contains(&self.head)
    }

    /// Ignores the current heading and its reverse, so a quick double tap
    /// can't turn the snake back into itself.
    pub fn set_direction(&mut self, dx: i32, dy: i32) {
        let (vx, vy) = self.velocity;
        if (dx, dy) == (vx, vy) || (dx, dy) == (-vx, -vy) {
            return;
        }
        self.velocity = (dx, dy);
    }
}

#[cfg(test)]
impl Snake {
    pub(crate) fn from_parts(head: Coords, body: &[Coords], velocity: Velocity) -> Self {
        Snake { head, body: body.iter().copied().collect(), velocity }
    }

    pub(crate) fn velocity(&self) -> Velocity {
        self.velocity
    }
}
