use std::fmt;

/// Disks are identified purely by their size. Size 1 is the smallest disk.
pub type DiskSize = u8;

/// The top of a peg: either a disk, or nothing at all.
///
/// Variant order matters. The derived `Ord` places `Empty` above every disk,
/// so an empty peg always compares as able to receive the other peg's top
/// disk, and `Disk(a) < Disk(b)` whenever `a < b`.
#[derive(Clone, Copy, PartialEq, Debug, Eq, PartialOrd, Ord)]
pub enum TopDisk {
    Disk(DiskSize),
    Empty,
}

impl TopDisk {
    pub fn disk(self) -> Option<DiskSize> {
        match self {
            TopDisk::Disk(size) => Some(size),
            TopDisk::Empty => None,
        }
    }

    pub fn is_empty(self) -> bool {
        self == TopDisk::Empty
    }
}

impl From<Option<DiskSize>> for TopDisk {
    fn from(value: Option<DiskSize>) -> Self {
        value.map_or(TopDisk::Empty, TopDisk::Disk)
    }
}

impl fmt::Display for TopDisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopDisk::Disk(size) => write!(f, "{}", size),
            TopDisk::Empty => write!(f, "empty"),
        }
    }
}
