pub mod game;
pub mod move_generator;
pub mod tower;
pub mod tui;
