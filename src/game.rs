use std::{thread::sleep, time::{Duration, Instant}};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, info};
use rand::Rng;

use crate::config::{GameConfig, GAME_OVER_DELAY_MS, SCORE_PANEL_H, SCORE_PANEL_W, WALL_CHAR};
use crate::error::SnekError;
use crate::food::Food;
use crate::screen::{Border, Screen};
use crate::snake::{Direction::{self, *}, MoveResult, Snake};
use crate::term::TermManager;
use crate::Coords;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameState {
    Running,
    PlayerDead,
    /// No floor left to put food on.
    BoardFull,
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Input {
    Turn(Direction),
    Quit,
}

impl Input {
    pub fn from_key(ev: &KeyEvent) -> Option<Input> {
        if ev.kind == KeyEventKind::Release {
            return None;
        }

        match ev.code {
            KeyCode::Char('c') if ev.modifiers.contains(KeyModifiers::CONTROL) => Some(Input::Quit),
            KeyCode::Char('q') => Some(Input::Quit),
            KeyCode::Char('w') | KeyCode::Up => Some(Input::Turn(Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Input::Turn(Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Input::Turn(Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Input::Turn(Right)),
            _ => None,
        }
    }
}

/// One game session: owns the snake, the food and the screens they are
/// drawn on.
pub struct SnakeGame<R> {
    config: GameConfig,
    screen: Screen,
    score_screen: Screen,
    snake: Snake,
    food: Food,
    state: GameState,
    rng: R,
}

impl<R: Rng> SnakeGame<R> {
    pub fn new(config: GameConfig, rng: R) -> Result<Self, SnekError> {
        config.validate()?;

        let (height, width) = config.screen_size();
        let screen = Screen::new(height, width, Coords::new(0, 0));
        let score_screen = Screen::new(SCORE_PANEL_H, SCORE_PANEL_W, Coords::new(height, 0));
        let snake = Snake::new(Coords::new(1, 1), config.max_snake_len());

        let mut game = SnakeGame {
            config,
            screen,
            score_screen,
            snake,
            food: Food::default(),
            state: GameState::Running,
            rng,
        };

        // Food has to see the snake on screen, so draw once before placing it
        game.render();
        game.food = Food::place(&game.screen, &game.snake, game.field(), &mut game.rng)
            .unwrap_or_default();
        game.render();

        Ok(game)
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }

    /// Swaps in a specific food, e.g. to replay a known layout.
    pub fn set_food(&mut self, food: Food) {
        self.food = food;
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn score_screen(&self) -> &Screen {
        &self.score_screen
    }

    /// Play field rows and columns, border excluded.
    fn field(&self) -> (i32, i32) {
        (self.config.level_height, self.config.level_width)
    }

    /// Advances the game by one tick. Once the game has left `Running`
    /// this does nothing and keeps returning the final state.
    pub fn tick(&mut self, input: Option<Input>) -> Result<GameState, SnekError> {
        if self.state != GameState::Running {
            return Ok(self.state);
        }

        match input {
            Some(Input::Quit) => {
                self.state = GameState::Quit;
                return Ok(self.state);
            }
            Some(Input::Turn(dir)) => self.snake.set_direction(dir),
            None => {}
        }

        self.render();

        if let MoveResult::Crashed { .. } = self.snake.move_step(&self.screen) {
            self.state = GameState::PlayerDead;
            return Ok(self.state);
        }

        if !self.food.exists() {
            match Food::place(&self.screen, &self.snake, self.field(), &mut self.rng) {
                Some(food) => self.food = food,
                None => {
                    info!("no room left for food, score {}", self.snake.score());
                    self.state = GameState::BoardFull;
                    return Ok(self.state);
                }
            }
        }

        if self.food.collect(&mut self.snake)? {
            debug!("food eaten at {:?}", self.snake.pos());
        }

        Ok(self.state)
    }

    /// Redraws both screens from the current state.
    pub fn render(&mut self) {
        self.screen.clear();
        self.screen.draw_border(Border::solid(WALL_CHAR));
        self.food.draw(&mut self.screen);
        self.snake.draw(&mut self.screen);

        self.score_screen.clear();
        self.score_screen.draw_border(Border::BOX);
        self.score_screen.draw_text(Coords::new(1, 2), &self.snake.score().to_string());
    }

    /// Boxed message centered over the game screen.
    pub fn notice(&self, lines: &[&str]) -> Screen {
        let height = lines.len() as i32 + 2;
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0) as i32 + 4;
        let origin = Coords::new(
            (self.screen.height() - height).max(0) / 2,
            (self.screen.width() - width).max(0) / 2,
        );

        let mut notice = Screen::new(height, width, origin);
        notice.draw_border(Border::BOX);
        for (i, line) in lines.iter().enumerate() {
            notice.draw_text(Coords::new(i as i32 + 1, 2), line);
        }
        notice
    }

    /// Runs the session on a real terminal until the player quits, dies
    /// or fills the board.
    pub fn run(&mut self, term: &mut TermManager) -> Result<GameState, SnekError> {
        let frame = self.config.frame_interval();
        info!("session started, {:?} per frame", frame);

        loop {
            let started = Instant::now();
            let input = term.poll_key()?.as_ref().and_then(Input::from_key);

            let state = self.tick(input)?;
            term.present(&[&self.screen, &self.score_screen])?;

            match state {
                GameState::Running => {}
                GameState::Quit => break,
                GameState::PlayerDead => {
                    self.render();
                    self.acknowledge(term, "GAME OVER")?;
                    break;
                }
                GameState::BoardFull => {
                    self.render();
                    self.acknowledge(term, "YOU WIN")?;
                    break;
                }
            }

            sleep(frame.saturating_sub(started.elapsed()));
        }

        info!("session ended in {:?} with score {}", self.state, self.snake.score());
        Ok(self.state)
    }

    ///////////////////////////////////////////////////////////////////////////

    fn acknowledge(&self, term: &mut TermManager, title: &str) -> Result<(), SnekError> {
        let score = format!("Score: {}", self.snake.score());
        let notice = self.notice(&[title, &score]);
        term.present(&[&self.screen, &self.score_screen, &notice])?;

        sleep(Duration::from_millis(GAME_OVER_DELAY_MS));
        term.drain_keys()?;
        term.read_key_blocking()?;
        Ok(())
    }
}
