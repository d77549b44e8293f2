use std::fmt::Write;

use termion::{clear, cursor};

use crate::tower::{disk_image, DiskSize, Peg, TowerStore, BASE, BASE_WITH_POLE, POLE};

use super::animation::FloatFrame;
use super::layout::{
    TowerLayout, LAYOUT_WIDTH, MOVES_COLUMN, MOVES_ROW, PROMPT_COLUMN, PROMPT_ROW, TITLE_COLUMN,
    TITLE_ROW,
};

pub const TITLE: &str = "The Towers of Hanoi";
pub const MOVES_LABEL: &str = "Moves: ";
pub const PROMPT: &str = "Press any key to continue.";

/// A disk in mid-flight. The store it is drawn with already holds the disk
/// on `to_peg`, so that copy is hidden while the float is shown.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub struct FloatingDisk {
    pub frame: FloatFrame,
    pub disk_size: DiskSize,
    pub to_peg: Peg,
}

/// Character grid for one complete screen.
pub struct TowerScene {
    rows: Vec<Vec<char>>,
}

impl TowerScene {
    pub fn new(
        layout: &TowerLayout,
        store: &TowerStore,
        floating: Option<&FloatingDisk>,
        moves: u64,
        prompt: bool,
    ) -> Self {
        let mut scene = Self {
            rows: vec![vec![' '; LAYOUT_WIDTH as usize]; layout.height() as usize],
        };

        scene.put_text(TITLE_ROW, TITLE_COLUMN, TITLE);
        scene.put_text(MOVES_ROW, MOVES_COLUMN, &format!("{}{}", MOVES_LABEL, moves));
        if prompt {
            scene.put_text(PROMPT_ROW, PROMPT_COLUMN, PROMPT);
        }

        for peg in Peg::ALL {
            let column = layout.image_column(layout.pole_column(peg));
            let mut disks = store.peg(peg);
            if let Some(floating) = floating {
                if floating.to_peg == peg {
                    disks = &disks[..disks.len().saturating_sub(1)];
                }
            }
            for level in 0..=layout.pole_top_level() {
                let size = disks.get(level).copied().unwrap_or(0);
                let image = disk_image(size, layout.disk_count());
                scene.put_text(layout.row_for_level(level), column, &image);
            }
        }

        let mut base: Vec<char> = vec![BASE; LAYOUT_WIDTH as usize];
        for peg in Peg::ALL {
            base[layout.pole_column(peg) as usize] = BASE_WITH_POLE;
        }
        scene.rows[layout.base_row() as usize] = base;

        if let Some(floating) = floating {
            let mut image = disk_image(floating.disk_size, layout.disk_count());
            if floating.frame.level > layout.pole_top_level() {
                // Above the pole tip there is no pole to show through the disk.
                image = image.replace(POLE, " ");
            }
            let row = layout.row_for_level(floating.frame.level);
            scene.put_text(row, layout.image_column(floating.frame.column), &image);
        }

        scene
    }

    fn put_text(&mut self, row: u16, column: u16, text: &str) {
        let row = &mut self.rows[row as usize];
        for (offset, ch) in text.chars().enumerate() {
            if let Some(cell) = row.get_mut(column as usize + offset) {
                *cell = ch;
            }
        }
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn line(&self, row: usize) -> String {
        self.rows[row].iter().collect()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.rows.iter().map(|row| row.iter().collect())
    }
}

/// Text frame buffer for the plain renderer. Every line is addressed with an
/// explicit cursor position so it draws correctly in raw mode.
pub struct TowerDisplay {
    buffer: String,
}

impl TowerDisplay {
    pub fn new() -> Self {
        Self {
            buffer: String::with_capacity(4096),
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        write!(self.buffer, "{}{}", cursor::Goto(1, 1), clear::All).unwrap();
    }

    /// Fills the buffer with `scene`. Lines are overwritten in place rather
    /// than clearing the screen, which keeps animation frames from flickering.
    pub fn render_scene(&mut self, scene: &TowerScene) -> &str {
        self.buffer.clear();
        for (row, line) in scene.lines().enumerate() {
            write!(self.buffer, "{}{}", cursor::Goto(1, row as u16 + 1), line).unwrap();
        }
        &self.buffer
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }
}

impl Default for TowerDisplay {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::animation::FloatPhase;
    use crate::tower::DISK;

    fn scene_for(store: &TowerStore, floating: Option<&FloatingDisk>) -> TowerScene {
        let layout = TowerLayout::new(store.disk_count());
        TowerScene::new(&layout, store, floating, 0, false)
    }

    #[test]
    fn test_scene_shows_title_and_move_counter() {
        let store = TowerStore::new(3).unwrap();
        let layout = TowerLayout::new(3);
        let scene = TowerScene::new(&layout, &store, None, 42, true);
        assert!(scene.line(TITLE_ROW as usize).contains(TITLE));
        assert!(scene.line(MOVES_ROW as usize).contains("Moves: 42"));
        assert!(scene.line(PROMPT_ROW as usize).contains(PROMPT));
        assert_eq!(scene.height(), layout.height() as usize);
    }

    #[test]
    fn test_scene_draws_disks_at_their_levels() {
        let store = TowerStore::new(3).unwrap();
        let layout = TowerLayout::new(3);
        let scene = scene_for(&store, None);

        let bottom = scene.line(layout.row_for_level(0) as usize);
        let column = layout.image_column(layout.pole_column(Peg::Source)) as usize;
        let drawn: String = bottom.chars().skip(column).take(7).collect();
        assert_eq!(drawn, disk_image(3, 3));

        let tip = scene.line(layout.row_for_level(3) as usize);
        assert_eq!(tip.chars().filter(|&c| c == POLE).count(), 3);
        assert_eq!(tip.chars().filter(|&c| c == DISK).count(), 0);
    }

    #[test]
    fn test_scene_base_marks_every_pole() {
        let store = TowerStore::new(2).unwrap();
        let layout = TowerLayout::new(2);
        let base = scene_for(&store, None).line(layout.base_row() as usize);
        assert_eq!(base.chars().count(), LAYOUT_WIDTH as usize);
        assert_eq!(base.chars().filter(|&c| c == BASE_WITH_POLE).count(), 3);
    }

    #[test]
    fn test_floating_disk_hides_its_landed_copy() {
        let mut store = TowerStore::new(2).unwrap();
        store.relocate(Peg::Source, Peg::Temp).unwrap();
        let layout = TowerLayout::new(2);
        let floating = FloatingDisk {
            frame: FloatFrame {
                phase: FloatPhase::Slide,
                column: 30,
                level: layout.float_level(),
            },
            disk_size: 1,
            to_peg: Peg::Temp,
        };
        let scene = scene_for(&store, Some(&floating));

        let bottom = scene.line(layout.row_for_level(0) as usize);
        let temp_column = layout.image_column(layout.pole_column(Peg::Temp)) as usize;
        let drawn: String = bottom.chars().skip(temp_column).take(5).collect();
        assert_eq!(drawn, disk_image(0, 2));

        let float_row = scene.line(layout.row_for_level(layout.float_level()) as usize);
        let drawn: String = float_row.chars().skip(28).take(5).collect();
        assert_eq!(drawn, " ▄ ▄ ");
    }

    #[test]
    fn test_display_buffer_positions_every_line() {
        let store = TowerStore::new(1).unwrap();
        let scene = scene_for(&store, None);
        let mut display = TowerDisplay::new();
        let frame = display.render_scene(&scene).to_string();
        for row in 1..=scene.height() {
            assert!(frame.contains(&cursor::Goto(1, row as u16).to_string()));
        }
        assert!(display.buffer().contains(TITLE));
    }
}
