use std::fmt;

use crate::tower::Peg;

/// Direction in which the smallest disk travels around the pegs.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum Rotation {
    Clockwise,
    CounterClockwise,
}

impl Rotation {
    /// Odd disk counts rotate clockwise and even counts counter-clockwise,
    /// which is what lands the finished stack on the target peg rather than
    /// the temp peg.
    pub fn for_disk_count(disk_count: usize) -> Self {
        if disk_count % 2 == 1 {
            Rotation::Clockwise
        } else {
            Rotation::CounterClockwise
        }
    }

    /// Index offset mod 3. Counter-clockwise is -1, written as +2 to stay
    /// in unsigned arithmetic.
    fn step(self) -> usize {
        match self {
            Rotation::Clockwise => 1,
            Rotation::CounterClockwise => 2,
        }
    }

    pub fn next(self, peg: Peg) -> Peg {
        Peg::from((peg.index() + self.step()) % 3)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rotation_str = match self {
            Rotation::Clockwise => "clockwise",
            Rotation::CounterClockwise => "counter-clockwise",
        };
        write!(f, "{}", rotation_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotation_follows_disk_count_parity() {
        assert_eq!(Rotation::for_disk_count(1), Rotation::Clockwise);
        assert_eq!(Rotation::for_disk_count(2), Rotation::CounterClockwise);
        assert_eq!(Rotation::for_disk_count(3), Rotation::Clockwise);
        assert_eq!(Rotation::for_disk_count(12), Rotation::CounterClockwise);
    }

    #[test]
    fn test_clockwise_next() {
        assert_eq!(Rotation::Clockwise.next(Peg::Source), Peg::Target);
        assert_eq!(Rotation::Clockwise.next(Peg::Target), Peg::Temp);
        assert_eq!(Rotation::Clockwise.next(Peg::Temp), Peg::Source);
    }

    #[test]
    fn test_counter_clockwise_next() {
        assert_eq!(Rotation::CounterClockwise.next(Peg::Source), Peg::Temp);
        assert_eq!(Rotation::CounterClockwise.next(Peg::Temp), Peg::Target);
        assert_eq!(Rotation::CounterClockwise.next(Peg::Target), Peg::Source);
    }

    #[test]
    fn test_two_steps_from_a_peg_reach_the_other_two_pegs() {
        for rotation in [Rotation::Clockwise, Rotation::CounterClockwise] {
            for peg in Peg::ALL {
                let a = rotation.next(peg);
                let b = rotation.next(a);
                assert_ne!(a, peg);
                assert_ne!(b, peg);
                assert_ne!(a, b);
            }
        }
    }
}
