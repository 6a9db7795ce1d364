//! Game constants and the handful of knobs read from the environment.

use std::{env, path::PathBuf, time::Duration};

use log::LevelFilter;

use crate::error::ConfigError;

pub const LEVEL_W: i32 = 30;
pub const LEVEL_H: i32 = 15;
pub const FRAME_RATE: u64 = 6;

pub const WALL_CHAR: char = '#';
pub const FLOOR_CHAR: char = ' ';
pub const HEAD_CHAR: char = 'S';
pub const TRAIL_CHAR: char = 's';
pub const FOOD_CHAR: char = '@';

/// Random samples tried before food placement scans the whole board.
pub const PLACE_ATTEMPTS: usize = 64;

/// Pause before the game over notice starts accepting keys.
pub const GAME_OVER_DELAY_MS: u64 = 500;

pub const SCORE_PANEL_H: i32 = 3;
pub const SCORE_PANEL_W: i32 = 7;

const LOG_FILE_VAR: &str = "SNEK_LOG";
const LOG_LEVEL_VAR: &str = "SNEK_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Play field columns, not counting the border.
    pub level_width: i32,
    /// Play field rows, not counting the border.
    pub level_height: i32,
    pub frame_rate: u64,
    pub log_file: Option<PathBuf>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            level_width: LEVEL_W,
            level_height: LEVEL_H,
            frame_rate: FRAME_RATE,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Defaults, plus `SNEK_LOG` (log file path) and `SNEK_LOG_LEVEL`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var(LOG_FILE_VAR).ok(), env::var(LOG_LEVEL_VAR).ok())
    }

    fn from_vars(log_file: Option<String>, log_level: Option<String>) -> Result<Self, ConfigError> {
        let mut config = GameConfig::default();

        config.log_file = log_file.filter(|p| !p.is_empty()).map(PathBuf::from);

        if let Some(level) = log_level {
            config.log_level = level.parse().map_err(|_| ConfigError::BadLogLevel(level))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.level_width < 3 || self.level_height < 3 {
            return Err(ConfigError::LevelTooSmall {
                width: self.level_width,
                height: self.level_height,
            });
        }

        if self.frame_rate == 0 {
            return Err(ConfigError::ZeroFrameRate);
        }

        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(1000 / self.frame_rate.max(1))
    }

    /// Rows and columns of the game screen, border included.
    pub fn screen_size(&self) -> (i32, i32) {
        (self.level_height + 2, self.level_width + 2)
    }

    /// Terminal size needed to fit the game and score screens, as
    /// (columns, rows) the way crossterm reports it.
    pub fn required_terminal_size(&self) -> (u16, u16) {
        let (h, w) = self.screen_size();
        let cols = w.max(SCORE_PANEL_W);
        let rows = h + SCORE_PANEL_H;
        (cols as u16, rows as u16)
    }

    pub fn max_snake_len(&self) -> usize {
        (self.level_width * self.level_height) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_level() {
        let config = GameConfig::default();
        assert_eq!(config.screen_size(), (17, 32));
        assert_eq!(config.frame_interval(), Duration::from_millis(166));
        assert_eq!(config.required_terminal_size(), (32, 20));
        assert_eq!(config.max_snake_len(), 450);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn env_values_are_applied() {
        let config = GameConfig::from_vars(Some("snek.log".into()), Some("debug".into())).unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("snek.log")));
        assert_eq!(config.log_level, LevelFilter::Debug);

        let config = GameConfig::from_vars(Some(String::new()), None).unwrap();
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            GameConfig::from_vars(None, Some("chatty".into())),
            Err(ConfigError::BadLogLevel("chatty".into()))
        );

        let tiny = GameConfig { level_width: 2, ..GameConfig::default() };
        assert_eq!(tiny.validate(), Err(ConfigError::LevelTooSmall { width: 2, height: LEVEL_H }));

        let frozen = GameConfig { frame_rate: 0, ..GameConfig::default() };
        assert_eq!(frozen.validate(), Err(ConfigError::ZeroFrameRate));
    }
}
