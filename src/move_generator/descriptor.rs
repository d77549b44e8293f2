use std::fmt;

use crate::tower::{DiskSize, Peg};

/// Reports one completed move to a renderer.
///
/// Heights are 0-based stack positions, not disk sizes: `from_height` is
/// where the disk sat before the move and `to_height` where it sits after.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub struct MoveDescriptor {
    /// 1-based move number.
    pub number: u64,
    pub from_peg: Peg,
    pub to_peg: Peg,
    pub from_height: usize,
    pub to_height: usize,
    pub disk_size: DiskSize,
}

impl fmt::Display for MoveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: disk {} {} -> {}",
            self.number, self.disk_size, self.from_peg, self.to_peg
        )
    }
}
