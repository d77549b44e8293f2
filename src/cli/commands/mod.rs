//! CLI command implementations.

pub trait Command {
    fn execute(self);
}

pub mod list;
pub mod play;
