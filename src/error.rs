use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrailError {
    #[error("could not allocate room for {requested} trail segments")]
    Exhausted { requested: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("level must be at least 3x3, got {width}x{height}")]
    LevelTooSmall { width: i32, height: i32 },
    #[error("frame rate must be greater than zero")]
    ZeroFrameRate,
    #[error("unknown log level {0:?}")]
    BadLogLevel(String),
}

#[derive(Debug, Error)]
pub enum SnekError {
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Trail(#[from] TrailError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("terminal is {actual:?} (columns, rows) but the game needs at least {needed:?}")]
    TerminalTooSmall { needed: (u16, u16), actual: (u16, u16) },
}
