//! Tower scene widget for TUI rendering

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::game::display::{FloatingDisk, TowerScene};
use crate::game::layout::{TowerLayout, LAYOUT_WIDTH};
use crate::tui::Theme;

/// Widget that renders a `TowerScene`, highlighting the floating disk
pub struct TowerWidget<'a> {
    scene: &'a TowerScene,
    layout: &'a TowerLayout,
    floating: Option<&'a FloatingDisk>,
    theme: &'a Theme,
}

impl<'a> TowerWidget<'a> {
    pub fn new(
        scene: &'a TowerScene,
        layout: &'a TowerLayout,
        floating: Option<&'a FloatingDisk>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            scene,
            layout,
            floating,
            theme,
        }
    }

    fn is_floating_cell(&self, row: u16, column: u16) -> bool {
        match self.floating {
            Some(floating) => {
                let start = self.layout.image_column(floating.frame.column);
                row == self.layout.row_for_level(floating.frame.level)
                    && (start..start + self.layout.disk_width()).contains(&column)
            }
            None => false,
        }
    }
}

impl Widget for TowerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Center the fixed-width scene horizontally
        let left = area.x + area.width.saturating_sub(LAYOUT_WIDTH) / 2;

        for (row, line) in self.scene.lines().enumerate() {
            let row = row as u16;
            if row >= area.height {
                break;
            }
            for (column, ch) in line.chars().enumerate() {
                let column = column as u16;
                let x = left + column;
                if x >= area.x + area.width {
                    break;
                }
                let style = self
                    .theme
                    .cell_style(ch, self.is_floating_cell(row, column));
                if let Some(cell) = buf.cell_mut((x, area.y + row)) {
                    cell.set_char(ch).set_style(style);
                }
            }
        }
    }
}
