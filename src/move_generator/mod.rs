//! Towers of Hanoi move generation.

pub mod descriptor;
pub mod generator;
pub mod rotation;

pub use descriptor::MoveDescriptor;
pub use generator::MoveGenerator;
pub use rotation::Rotation;
