use std::fmt;

/// One of the three pegs. The discriminants are the peg indices used by the
/// rotation arithmetic in the move generator.
#[derive(Clone, Copy, PartialEq, Debug, Eq, Hash, PartialOrd, Ord)]
pub enum Peg {
    Source = 0,
    Target = 1,
    Temp = 2,
}

impl Peg {
    pub const ALL: [Peg; 3] = [Peg::Source, Peg::Target, Peg::Temp];

    pub fn index(self) -> usize {
        self as usize
    }
}

impl From<usize> for Peg {
    fn from(value: usize) -> Self {
        match value {
            0 => Peg::Source,
            1 => Peg::Target,
            2 => Peg::Temp,
            _ => panic!("Invalid peg index: {} (must be 0, 1 or 2)", value),
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let peg_str = match self {
            Peg::Source => "source",
            Peg::Target => "target",
            Peg::Temp => "temp",
        };
        write!(f, "{}", peg_str)
    }
}
