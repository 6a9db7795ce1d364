//! In-memory character buffers the game draws into and queries.
//!
//! A `Screen` is what the game treats as ground truth for "what occupies
//! this cell right now": the snake and the food ask it before moving or
//! placing. Putting it on a real terminal is `term::TermManager::present`.

use crate::Coords;

/// Characters used by `Screen::draw_border`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Border {
    pub corner: char,
    pub horizontal: char,
    pub vertical: char,
}

impl Border {
    /// Every border cell is the same glyph.
    pub const fn solid(ch: char) -> Self {
        Border { corner: ch, horizontal: ch, vertical: ch }
    }

    pub const BOX: Border = Border { corner: '+', horizontal: '-', vertical: '|' };
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    height: i32,
    width: i32,
    origin: Coords,
    cells: Vec<char>,
}

impl Screen {
    /// A blank screen whose top-left cell sits at `origin` on the terminal.
    pub fn new(height: i32, width: i32, origin: Coords) -> Self {
        let (height, width) = (height.max(0), width.max(0));
        Screen { height, width, origin, cells: vec![' '; (height * width) as usize] }
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn origin(&self) -> Coords {
        self.origin
    }

    pub fn contains(&self, pos: Coords) -> bool {
        pos.y >= 0 && pos.x >= 0 && pos.y < self.height && pos.x < self.width
    }

    /// Glyph at `pos`; anything off the screen reads as a blank cell.
    pub fn peek_char(&self, pos: Coords) -> char {
        self.index(pos).map_or(' ', |i| self.cells[i])
    }

    /// Writes are clipped to the screen.
    pub fn draw_char(&mut self, pos: Coords, ch: char) {
        if let Some(i) = self.index(pos) {
            self.cells[i] = ch;
        }
    }

    pub fn draw_text(&mut self, pos: Coords, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.draw_char(Coords::new(pos.y, pos.x + i as i32), ch);
        }
    }

    pub fn draw_border(&mut self, border: Border) {
        if self.height == 0 || self.width == 0 {
            return;
        }

        let (end_y, end_x) = (self.height - 1, self.width - 1);

        for x in 0..self.width {
            let ch = if x == 0 || x == end_x { border.corner } else { border.horizontal };
            self.draw_char(Coords::new(0, x), ch);
            self.draw_char(Coords::new(end_y, x), ch);
        }

        for y in 1..end_y {
            self.draw_char(Coords::new(y, 0), border.vertical);
            self.draw_char(Coords::new(y, end_x), border.vertical);
        }
    }

    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = ' ');
    }

    /// Rows top to bottom, as the terminal should show them.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.width.max(1) as usize).map(|row| row.iter().collect())
    }

    fn index(&self, pos: Coords) -> Option<usize> {
        if self.contains(pos) {
            Some((pos.y * self.width + pos.x) as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn border_surrounds_the_interior() {
        let mut screen = Screen::new(3, 4, Coords::default());
        screen.draw_border(Border::BOX);

        let rows: Vec<String> = screen.rows().collect();
        assert_eq!(rows, vec!["+--+", "|  |", "+--+"]);
    }

    #[test]
    fn text_and_chars_are_clipped() {
        let mut screen = Screen::new(2, 3, Coords::new(5, 5));
        screen.draw_text(Coords::new(1, 1), "abc");
        screen.draw_char(Coords::new(-1, 0), 'x');
        screen.draw_char(Coords::new(0, 3), 'x');

        assert_eq!(screen.peek_char(Coords::new(1, 1)), 'a');
        assert_eq!(screen.peek_char(Coords::new(1, 2)), 'b');
        assert_eq!(screen.peek_char(Coords::new(9, 9)), ' ');
        assert_eq!(screen.rows().collect::<Vec<_>>(), vec!["   ", " ab"]);
    }

    #[test]
    fn clear_blanks_every_cell() {
        let mut screen = Screen::new(3, 3, Coords::default());
        screen.draw_border(Border::solid('#'));
        screen.clear();
        assert_eq!(screen, Screen::new(3, 3, Coords::default()));
    }
}
