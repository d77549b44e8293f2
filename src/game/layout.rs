//! Screen geometry shared by the renderers.
//!
//! All coordinates are 0-based offsets into an 80 column area. Levels count
//! disk slots up from the base: level 0 is the bottom disk, level
//! `disk_count` is the pole tip, and the float level sits two rows above it.

use crate::tower::Peg;

/// Disk count the 80 column layout can fit side by side.
pub const TERMINAL_MAX_DISKS: usize = 12;

pub const LAYOUT_WIDTH: u16 = 80;

const PEG_COLUMNS: [u16; 3] = [13, 39, 65];

pub const TITLE_ROW: u16 = 0;
pub const TITLE_COLUMN: u16 = 30;
pub const MOVES_ROW: u16 = 2;
pub const MOVES_COLUMN: u16 = 36;
pub const PROMPT_ROW: u16 = 4;
pub const PROMPT_COLUMN: u16 = 9;
const FLOAT_ROW: u16 = 6;

#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub struct TowerLayout {
    disk_count: usize,
}

impl TowerLayout {
    pub fn new(disk_count: usize) -> Self {
        Self { disk_count }
    }

    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    /// Width of every disk image, pole included.
    pub fn disk_width(&self) -> u16 {
        2 * self.disk_count as u16 + 1
    }

    pub fn pole_column(&self, peg: Peg) -> u16 {
        PEG_COLUMNS[peg.index()]
    }

    /// Left edge of a disk image whose pole sits at `pole_column`.
    pub fn image_column(&self, pole_column: u16) -> u16 {
        pole_column - self.disk_count as u16
    }

    pub fn pole_top_level(&self) -> usize {
        self.disk_count
    }

    pub fn float_level(&self) -> usize {
        self.disk_count + 2
    }

    pub fn row_for_level(&self, level: usize) -> u16 {
        FLOAT_ROW + (self.float_level() - level) as u16
    }

    pub fn base_row(&self) -> u16 {
        self.row_for_level(0) + 1
    }

    /// Rows needed to draw everything, base included.
    pub fn height(&self) -> u16 {
        self.base_row() + 1
    }
}
