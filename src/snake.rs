use log::info;

use crate::config::{HEAD_CHAR, TRAIL_CHAR, WALL_CHAR};
use crate::error::TrailError;
use crate::screen::Screen;
use crate::trail::Trail;
use crate::Coords;
use Direction::*;
use MoveResult::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    Still,
}

impl Direction {
    pub fn delta(self) -> Coords {
        match self {
            Up => Coords::new(-1, 0),
            Down => Coords::new(1, 0),
            Left => Coords::new(0, -1),
            Right => Coords::new(0, 1),
            Still => Coords::new(0, 0),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Coords, old_head: Coords },
    Crashed { at: Coords },
}

#[derive(Debug, Clone)]
pub struct Snake {
    pos: Coords,
    direction: Direction,
    alive: bool,
    score: u32,
    trail: Trail,
}

impl Snake {
    /// A motionless snake at `pos`, with trail room for `max_len` segments.
    pub fn new(pos: Coords, max_len: usize) -> Self {
        Snake { pos, direction: Still, alive: true, score: 0, trail: Trail::with_capacity(max_len) }
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// Takes effect on the next `move_step`. Turning back into the trail is
    /// allowed and ends the game.
    pub fn set_direction(&mut self, direction: Direction) {
        self.direction = direction;
    }

    /// True if `pos` is the head or one of the placed trail segments.
    pub fn occupies(&self, pos: Coords) -> bool {
        self.pos == pos || self.trail.contains(pos)
    }

    /// Advances one cell along the current direction. The old head only
    /// joins the trail if the move succeeds; a crash leaves the head and
    /// trail where they were.
    pub fn move_step(&mut self, screen: &Screen) -> MoveResult {
        let old_head = self.pos;
        let new_head = old_head + self.direction.delta();

        if !is_walkable(screen, new_head) {
            self.alive = false;
            info!("snake crashed at {:?} with score {}", new_head, self.score);
            return Crashed { at: new_head };
        }

        self.trail.shift_insert(old_head);
        self.pos = new_head;
        Moved { new_head, old_head }
    }

    pub fn grow(&mut self) -> Result<(), TrailError> {
        self.score += 1;
        self.trail.grow(self.score as usize + 1)?;
        info!("snake grew, score {}", self.score);
        Ok(())
    }

    pub fn draw(&self, screen: &mut Screen) {
        for pos in self.trail.iter() {
            screen.draw_char(pos, TRAIL_CHAR);
        }
        screen.draw_char(self.pos, HEAD_CHAR);
    }
}

/// Whether the head may enter `pos` according to what is drawn there.
pub fn is_walkable(screen: &Screen, pos: Coords) -> bool {
    !matches!(screen.peek_char(pos), TRAIL_CHAR | WALL_CHAR)
}
