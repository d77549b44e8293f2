//! Iterative Towers of Hanoi solver.
//!
//! Produces the same move sequence as the textbook recursive solution
//! without recursion:
//! - On odd-numbered moves the smallest disk steps one peg along the
//!   rotation.
//! - On even-numbered moves the only legal move not involving the smallest
//!   disk is made: of the two other pegs, the smaller top disk goes onto the
//!   larger one (an empty peg counts as larger than any disk).
//!
//! The rotation is picked from the disk count parity so the completed stack
//! always ends up on the target peg.

use std::ops::ControlFlow;

use log::{debug, info};

use crate::tower::{ConfigurationError, InternalInvariantError, Peg, TowerStore};

use super::descriptor::MoveDescriptor;
use super::rotation::Rotation;

/// Drives a `TowerStore` from the starting position to the solved one, one
/// move per call.
#[derive(Clone, Debug)]
pub struct MoveGenerator {
    store: TowerStore,
    rotation: Rotation,
    smallest_on: Peg,
    moves: u64,
}

impl MoveGenerator {
    pub fn new(disk_count: usize) -> Result<Self, ConfigurationError> {
        let store = TowerStore::new(disk_count)?;
        let rotation = Rotation::for_disk_count(store.disk_count());
        info!(
            "solving for {} disks, smallest disk rotates {}",
            store.disk_count(),
            rotation
        );

        Ok(Self {
            store,
            rotation,
            smallest_on: Peg::Source,
            moves: 0,
        })
    }

    pub fn store(&self) -> &TowerStore {
        &self.store
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Number of moves made so far.
    pub fn move_count(&self) -> u64 {
        self.moves
    }

    /// Number of moves a full solution takes: `2^n - 1`.
    pub fn total_moves(&self) -> u64 {
        (1u64 << self.store.disk_count()) - 1
    }

    pub fn is_finished(&self) -> bool {
        self.store.is_solved()
    }

    /// Makes the next move and describes it, or returns `None` once the
    /// puzzle is solved.
    pub fn next_move(&mut self) -> Result<Option<MoveDescriptor>, InternalInvariantError> {
        if self.is_finished() {
            return Ok(None);
        }

        let number = self.moves + 1;
        let (from_peg, to_peg) = if number % 2 == 1 {
            (self.smallest_on, self.rotation.next(self.smallest_on))
        } else {
            self.select_other_move()
        };

        // Pre-move coordinates, taken before the store changes.
        let from_height = self.store.height(from_peg).saturating_sub(1);
        let to_height = self.store.height(to_peg);

        let disk_size = self.store.relocate(from_peg, to_peg)?;
        if disk_size == 1 {
            self.smallest_on = to_peg;
        }
        self.moves = number;

        let descriptor = MoveDescriptor {
            number,
            from_peg,
            to_peg,
            from_height,
            to_height,
            disk_size,
        };
        debug!("move {}", descriptor);
        Ok(Some(descriptor))
    }

    /// Picks the even-move pair from the two pegs not holding the smallest
    /// disk. Returns `(from, to)`.
    fn select_other_move(&self) -> (Peg, Peg) {
        let a = self.rotation.next(self.smallest_on);
        let b = self.rotation.next(a);

        if self.store.top_size(a) > self.store.top_size(b) {
            (b, a)
        } else {
            (a, b)
        }
    }

    /// Runs the remaining moves, calling `on_move` after each one with the
    /// updated store. Returning `ControlFlow::Break` stops early; the store is
    /// always left between two complete moves. Returns the number of moves
    /// made by this call.
    pub fn run<F>(&mut self, mut on_move: F) -> Result<u64, InternalInvariantError>
    where
        F: FnMut(&MoveDescriptor, &TowerStore) -> ControlFlow<()>,
    {
        let start = self.moves;
        while let Some(descriptor) = self.next_move()? {
            if on_move(&descriptor, &self.store).is_break() {
                debug!("run stopped after move {}", descriptor.number);
                break;
            }
        }
        Ok(self.moves - start)
    }
}

/// Yields descriptors until the puzzle is solved.
///
/// Panics if a move breaks a tower invariant. That cannot happen for a store
/// built by `MoveGenerator::new`; use `next_move` to handle the error instead.
impl Iterator for MoveGenerator {
    type Item = MoveDescriptor;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_move() {
            Ok(descriptor) => descriptor,
            Err(error) => panic!("move generation broke a tower invariant: {}", error),
        }
    }
}
