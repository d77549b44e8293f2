//! Frames for floating a disk from one pole to another.
//!
//! A float has three phases: the disk rises up its pole to the float level,
//! slides one column at a time until it hangs over the destination pole, then
//! drops down to its new height. `FloatPath` only computes positions; the
//! renderer decides how to draw them and how long to wait between frames.

use std::time::Duration;

use crate::move_generator::MoveDescriptor;

use super::layout::TowerLayout;

/// Delay for each vertical frame.
pub const VERTICAL_STEP: Duration = Duration::from_millis(70);
/// Delay for each horizontal frame.
pub const HORIZONTAL_STEP: Duration = Duration::from_millis(30);

#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum FloatPhase {
    Lift,
    Slide,
    Drop,
}

impl FloatPhase {
    pub fn delay(self) -> Duration {
        match self {
            FloatPhase::Lift | FloatPhase::Drop => VERTICAL_STEP,
            FloatPhase::Slide => HORIZONTAL_STEP,
        }
    }
}

/// Where the floating disk is drawn. `column` is the column of the disk's
/// center.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub struct FloatFrame {
    pub phase: FloatPhase,
    pub column: u16,
    pub level: usize,
}

#[derive(Clone, Debug)]
pub struct FloatPath {
    phase: Option<FloatPhase>,
    column: u16,
    level: usize,
    target_column: u16,
    target_level: usize,
    float_level: usize,
}

impl FloatPath {
    pub fn new(descriptor: &MoveDescriptor, layout: &TowerLayout) -> Self {
        Self {
            phase: Some(FloatPhase::Lift),
            column: layout.pole_column(descriptor.from_peg),
            level: descriptor.from_height,
            target_column: layout.pole_column(descriptor.to_peg),
            target_level: descriptor.to_height,
            float_level: layout.float_level(),
        }
    }

    fn frame(&self, phase: FloatPhase) -> FloatFrame {
        FloatFrame {
            phase,
            column: self.column,
            level: self.level,
        }
    }
}

impl Iterator for FloatPath {
    type Item = FloatFrame;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.phase? {
                FloatPhase::Lift => {
                    if self.level < self.float_level {
                        self.level += 1;
                        return Some(self.frame(FloatPhase::Lift));
                    }
                    self.phase = Some(FloatPhase::Slide);
                }
                FloatPhase::Slide => {
                    if self.column != self.target_column {
                        if self.column < self.target_column {
                            self.column += 1;
                        } else {
                            self.column -= 1;
                        }
                        return Some(self.frame(FloatPhase::Slide));
                    }
                    self.phase = Some(FloatPhase::Drop);
                }
                FloatPhase::Drop => {
                    if self.level > self.target_level {
                        self.level -= 1;
                        return Some(self.frame(FloatPhase::Drop));
                    }
                    self.phase = None;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tower::Peg;

    fn descriptor(
        from_peg: Peg,
        to_peg: Peg,
        from_height: usize,
        to_height: usize,
    ) -> MoveDescriptor {
        MoveDescriptor {
            number: 1,
            from_peg,
            to_peg,
            from_height,
            to_height,
            disk_size: 1,
        }
    }

    #[test]
    fn test_path_lifts_slides_then_drops() {
        let layout = TowerLayout::new(3);
        let frames: Vec<FloatFrame> =
            FloatPath::new(&descriptor(Peg::Source, Peg::Target, 2, 0), &layout).collect();

        let lifts: Vec<_> = frames.iter().filter(|f| f.phase == FloatPhase::Lift).collect();
        let slides: Vec<_> = frames.iter().filter(|f| f.phase == FloatPhase::Slide).collect();
        let drops: Vec<_> = frames.iter().filter(|f| f.phase == FloatPhase::Drop).collect();

        // 2 -> 5, then 26 columns, then 5 -> 0
        assert_eq!(lifts.len(), 3);
        assert_eq!(slides.len(), 26);
        assert_eq!(drops.len(), 5);
        assert_eq!(frames.len(), lifts.len() + slides.len() + drops.len());

        let phases: Vec<FloatPhase> = frames.iter().map(|f| f.phase).collect();
        let first_slide = phases.iter().position(|&p| p == FloatPhase::Slide).unwrap();
        let first_drop = phases.iter().position(|&p| p == FloatPhase::Drop).unwrap();
        assert!(phases[..first_slide].iter().all(|&p| p == FloatPhase::Lift));
        assert!(phases[first_slide..first_drop].iter().all(|&p| p == FloatPhase::Slide));
        assert!(phases[first_drop..].iter().all(|&p| p == FloatPhase::Drop));
    }

    #[test]
    fn test_path_ends_at_the_destination() {
        let layout = TowerLayout::new(4);
        let last = FloatPath::new(&descriptor(Peg::Temp, Peg::Source, 0, 3), &layout)
            .last()
            .unwrap();
        assert_eq!(last.column, layout.pole_column(Peg::Source));
        assert_eq!(last.level, 3);
        assert_eq!(last.phase, FloatPhase::Drop);
    }

    #[test]
    fn test_slides_move_one_column_per_frame_towards_the_target() {
        let layout = TowerLayout::new(2);
        let slides: Vec<u16> = FloatPath::new(&descriptor(Peg::Temp, Peg::Target, 0, 0), &layout)
            .filter(|f| f.phase == FloatPhase::Slide)
            .map(|f| f.column)
            .collect();
        let start = layout.pole_column(Peg::Temp);
        assert_eq!(slides.first().copied(), Some(start - 1));
        assert!(slides.windows(2).all(|w| w[0] == w[1] + 1));
        assert_eq!(slides.last().copied(), Some(layout.pole_column(Peg::Target)));
    }

    #[test]
    fn test_slides_happen_at_the_float_level() {
        let layout = TowerLayout::new(5);
        assert!(FloatPath::new(&descriptor(Peg::Source, Peg::Temp, 4, 1), &layout)
            .filter(|f| f.phase == FloatPhase::Slide)
            .all(|f| f.level == layout.float_level()));
    }

    #[test]
    fn test_phase_delays() {
        assert_eq!(FloatPhase::Lift.delay(), VERTICAL_STEP);
        assert_eq!(FloatPhase::Drop.delay(), VERTICAL_STEP);
        assert_eq!(FloatPhase::Slide.delay(), HORIZONTAL_STEP);
    }
}
