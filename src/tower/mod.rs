//! The three pegs and the disks stacked on them.
//!
//! `TowerStore` only offers primitive stack operations. Deciding which disk
//! moves where is the job of the `move_generator` module.

pub mod disk;
pub mod error;
pub mod peg;

mod display;

use std::convert::TryFrom;

use log::trace;
use smallvec::SmallVec;

pub use disk::{DiskSize, TopDisk};
pub use display::{disk_image, BASE, BASE_WITH_POLE, DISK, POLE};
pub use error::{ConfigurationError, InternalInvariantError};
pub use peg::Peg;

/// Largest disk count the store accepts. Renderers may support fewer.
pub const MAX_DISKS: usize = 15;

/// Disk sizes from bottom (index 0) to top.
pub type PegStack = SmallVec<[DiskSize; MAX_DISKS]>;

/// Checks a requested disk count against `1..=max`.
pub fn validate_disk_count(requested: i64, max: usize) -> Result<usize, ConfigurationError> {
    match usize::try_from(requested) {
        Ok(count) if (1..=max).contains(&count) => Ok(count),
        _ => Err(ConfigurationError::DiskCountOutOfRange { requested, max }),
    }
}

/// Holds the three pegs. Every disk size in `1..=disk_count` lives on
/// exactly one peg, and each peg is strictly decreasing from bottom to top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TowerStore {
    pegs: [PegStack; 3],
    disk_count: usize,
}

impl TowerStore {
    /// Builds the starting position: all disks on the source peg, largest at
    /// the bottom.
    pub fn new(disk_count: usize) -> Result<Self, ConfigurationError> {
        let requested = i64::try_from(disk_count).unwrap_or(i64::MAX);
        let disk_count = validate_disk_count(requested, MAX_DISKS)?;

        let mut store = Self {
            pegs: Default::default(),
            disk_count,
        };
        for size in (1..=disk_count).rev() {
            store.push(Peg::Source, size as DiskSize);
        }
        Ok(store)
    }

    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    pub fn peg(&self, peg: Peg) -> &[DiskSize] {
        &self.pegs[peg.index()]
    }

    pub fn pegs(&self) -> [&[DiskSize]; 3] {
        [
            self.peg(Peg::Source),
            self.peg(Peg::Target),
            self.peg(Peg::Temp),
        ]
    }

    /// Places `size` on top of `peg`. The caller is responsible for only
    /// placing a disk on a larger one or on an empty peg.
    pub fn push(&mut self, peg: Peg, size: DiskSize) {
        debug_assert!(
            self.top_size(peg) > TopDisk::Disk(size),
            "disk {} placed on top of {} on the {} peg",
            size,
            self.top_size(peg),
            peg
        );
        debug_assert!(self.height(peg) < self.disk_count);
        self.pegs[peg.index()].push(size);
    }

    pub fn pop(&mut self, peg: Peg) -> Result<DiskSize, InternalInvariantError> {
        self.pegs[peg.index()]
            .pop()
            .ok_or(InternalInvariantError::EmptyPeg { peg })
    }

    pub fn top_size(&self, peg: Peg) -> TopDisk {
        self.pegs[peg.index()].last().copied().into()
    }

    pub fn height(&self, peg: Peg) -> usize {
        self.pegs[peg.index()].len()
    }

    pub fn is_empty(&self, peg: Peg) -> bool {
        self.height(peg) == 0
    }

    /// True once every disk has migrated to the target peg.
    pub fn is_solved(&self) -> bool {
        self.is_empty(Peg::Source) && self.is_empty(Peg::Temp)
    }

    /// Moves the top disk of `from` onto `to` as one atomic step. Unlike
    /// `push`, the placement is validated, and the store is left untouched
    /// when the move is illegal.
    pub fn relocate(&mut self, from: Peg, to: Peg) -> Result<DiskSize, InternalInvariantError> {
        let disk = match self.top_size(from) {
            TopDisk::Disk(size) => size,
            TopDisk::Empty => return Err(InternalInvariantError::EmptyPeg { peg: from }),
        };
        if let TopDisk::Disk(top) = self.top_size(to) {
            if top <= disk {
                return Err(InternalInvariantError::IllegalPlacement { disk, peg: to, top });
            }
        }

        let disk = self.pop(from)?;
        self.push(to, disk);
        trace!("relocated disk {} from {} to {}", disk, from, to);
        Ok(disk)
    }
}

#[cfg(test)]
mod tests;
