//! Command-line interface for the towers animator.
//! This module is not part of the public library API.

pub mod args;
pub mod commands;

pub use args::Hanoi;
