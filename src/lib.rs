//! Terminal snake: a fixed-tick game where a snake roams a walled grid,
//! eats food, grows, and dies when it runs into a wall or itself.
//!
//! The core (`trail`, `snake`, `food`, `game`) only ever talks to an
//! in-memory [`screen::Screen`]; `term` is the crossterm side that puts
//! those screens on an actual terminal.

pub mod config;
pub mod error;
pub mod food;
pub mod game;
pub mod screen;
pub mod snake;
pub mod term;
pub mod trail;

use std::ops::Add;

pub use error::{ConfigError, SnekError, TrailError};
pub use game::{GameState, Input, SnakeGame};

/// A grid cell, row first.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Coords {
    pub y: i32,
    pub x: i32,
}

impl Coords {
    pub const fn new(y: i32, x: i32) -> Self {
        Coords { y, x }
    }
}

impl Add for Coords {
    type Output = Coords;

    fn add(self, other: Coords) -> Coords {
        Coords::new(self.y + other.y, self.x + other.x)
    }
}
