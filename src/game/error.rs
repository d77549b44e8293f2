use std::io;

use thiserror::Error;

use crate::tower::{ConfigurationError, InternalInvariantError};

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("terminal io error: {0}")]
    Io(#[from] io::Error),
    #[error("Terminal must be at least {required_width}x{required_height}, found {width}x{height}")]
    TerminalTooSmall {
        required_width: u16,
        required_height: u16,
        width: u16,
        height: u16,
    },
}

#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("internal error, the solver broke a tower invariant: {0}")]
    Invariant(#[from] InternalInvariantError),
    #[error(transparent)]
    Display(#[from] DisplayError),
}
