pub mod animation;
pub mod config;
pub mod display;
pub mod error;
pub mod layout;
pub mod r#loop; // `loop` is reserved keyword, need to escape with `r#`
pub mod pacing;
pub mod renderer;

pub use config::SolverConfig;
pub use error::{DisplayError, GameError};
pub use pacing::Pacing;
pub use r#loop::{GameLoop, Outcome};
pub use renderer::{KeyAction, MoveRenderer, SimpleRenderer};
