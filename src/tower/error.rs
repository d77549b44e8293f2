use thiserror::Error;

use super::disk::DiskSize;
use super::peg::Peg;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("Error in number of disks. Requested number = {requested}, must be in the range 1 <= disks <= {max}")]
    DiskCountOutOfRange { requested: i64, max: usize },
}

/// Raised when an operation would break a puzzle invariant. The move
/// generator never triggers these for a valid disk count, so seeing one
/// means the solver itself is broken.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InternalInvariantError {
    #[error("Cannot pop a disk, the {peg} peg is empty")]
    EmptyPeg { peg: Peg },
    #[error("Cannot place disk {disk} on the {peg} peg, its top disk is {top}")]
    IllegalPlacement {
        disk: DiskSize,
        peg: Peg,
        top: DiskSize,
    },
}
