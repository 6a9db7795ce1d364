use log::{debug, warn};
use rand::{seq::SliceRandom, Rng};

use crate::config::{FLOOR_CHAR, FOOD_CHAR, PLACE_ATTEMPTS};
use crate::error::TrailError;
use crate::screen::Screen;
use crate::snake::Snake;
use crate::Coords;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Food {
    pos: Coords,
    exists: bool,
}

impl Default for Food {
    /// Already eaten; the next tick places a fresh one.
    fn default() -> Self {
        Food { pos: Coords::default(), exists: false }
    }
}

impl Food {
    /// Food at a known spot, skipping the random placement.
    pub fn at(pos: Coords) -> Self {
        Food { pos, exists: true }
    }

    /// Picks an open floor cell inside the `height` x `width` play field
    /// starting at (1,1). Returns `None` once no such cell is left.
    pub fn place<R: Rng>(
        screen: &Screen,
        snake: &Snake,
        (height, width): (i32, i32),
        rng: &mut R,
    ) -> Option<Food> {
        let is_open = |pos: Coords| screen.peek_char(pos) == FLOOR_CHAR && !snake.occupies(pos);

        for _ in 0..PLACE_ATTEMPTS {
            let pos = Coords::new(rng.gen_range(1..=height), rng.gen_range(1..=width));
            if is_open(pos) {
                debug!("food placed at {:?}", pos);
                return Some(Food::at(pos));
            }
        }

        // Crowded board, sample from what's actually left
        let choices: Vec<Coords> = (1..=height)
            .flat_map(|y| (1..=width).map(move |x| Coords::new(y, x)))
            .filter(|pos| is_open(*pos))
            .collect();
        warn!("random food placement gave up, {} open cells left", choices.len());

        choices.choose(rng).copied().map(Food::at)
    }

    pub fn pos(&self) -> Coords {
        self.pos
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    /// Eats the food if the snake's head is on it. Returns whether it did.
    pub fn collect(&mut self, snake: &mut Snake) -> Result<bool, TrailError> {
        if !self.exists || snake.pos() != self.pos {
            return Ok(false);
        }

        self.exists = false;
        snake.grow()?;
        Ok(true)
    }

    pub fn draw(&self, screen: &mut Screen) {
        if self.exists {
            screen.draw_char(self.pos, FOOD_CHAR);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::config::WALL_CHAR;
    use crate::screen::Border;
    use crate::snake::Direction;

    fn level(height: i32, width: i32) -> Screen {
        let mut screen = Screen::new(height + 2, width + 2, Coords::default());
        screen.draw_border(Border::solid(WALL_CHAR));
        screen
    }

    #[test]
    fn only_lands_on_open_floor() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut snake = Snake::new(Coords::new(2, 2), 16);
        snake.grow().unwrap();
        snake.set_direction(Direction::Right);

        for _ in 0..50 {
            let mut screen = level(4, 4);
            snake.draw(&mut screen);
            let food = Food::place(&screen, &snake, (4, 4), &mut rng).unwrap();

            assert!(food.exists());
            assert_eq!(screen.peek_char(food.pos()), FLOOR_CHAR);
            assert!(!snake.occupies(food.pos()));
            assert!((1..=4).contains(&food.pos().y) && (1..=4).contains(&food.pos().x));
        }
    }

    #[test]
    fn avoids_a_head_that_has_not_been_drawn_yet() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // 1x2 field: the stale frame shows both cells as floor
        let screen = level(1, 2);
        let snake = Snake::new(Coords::new(1, 1), 2);

        for _ in 0..20 {
            let food = Food::place(&screen, &snake, (1, 2), &mut rng).unwrap();
            assert_eq!(food.pos(), Coords::new(1, 2));
        }
    }

    #[test]
    fn full_board_yields_nothing() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let mut screen = level(1, 2);
        let snake = Snake::new(Coords::new(1, 1), 2);
        screen.draw_char(Coords::new(1, 2), 's');
        snake.draw(&mut screen);

        assert_eq!(Food::place(&screen, &snake, (1, 2), &mut rng), None);
    }

    #[test]
    fn collect_only_when_on_the_food() {
        let mut snake = Snake::new(Coords::new(1, 1), 16);
        let mut food = Food::at(Coords::new(1, 2));

        assert!(!food.collect(&mut snake).unwrap());
        assert!(food.exists());
        assert_eq!(snake.score(), 0);

        snake.set_direction(Direction::Right);
        snake.move_step(&level(4, 4));
        assert!(food.collect(&mut snake).unwrap());
        assert!(!food.exists());
        assert_eq!(snake.score(), 1);
        assert_eq!(snake.trail().len(), 2);

        // already eaten
        assert!(!food.collect(&mut snake).unwrap());
        assert_eq!(snake.score(), 1);
    }
}
