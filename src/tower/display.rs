use super::{DiskSize, Peg, TowerStore};

pub const DISK: char = '▄';
pub const POLE: char = '│';
pub const BASE: char = '═';
pub const BASE_WITH_POLE: char = '╧';

/// Builds the text image of a disk for a layout holding `disk_count` disks.
///
/// Every image is `2 * disk_count + 1` characters wide with the pole in the
/// middle, so disks of any size line up on the same column. Size 0 renders
/// the bare pole.
pub fn disk_image(size: DiskSize, disk_count: usize) -> String {
    let size = usize::from(size);
    let padding = disk_count.saturating_sub(size);
    let mut image = String::with_capacity(2 * disk_count + 1);
    image.extend(std::iter::repeat(' ').take(padding));
    image.extend(std::iter::repeat(DISK).take(size));
    image.push(POLE);
    image.extend(std::iter::repeat(DISK).take(size));
    image.extend(std::iter::repeat(' ').take(padding));
    image
}

impl TowerStore {
    /// Renders the three towers side by side, pole tops included, followed
    /// by the base line.
    pub fn to_ascii(&self) -> String {
        let disk_count = self.disk_count();
        let width = 2 * disk_count + 1;
        let mut result = String::new();

        for level in (0..=disk_count).rev() {
            let row: Vec<String> = Peg::ALL
                .iter()
                .map(|&peg| {
                    let size = self.peg(peg).get(level).copied().unwrap_or(0);
                    disk_image(size, disk_count)
                })
                .collect();
            result.push_str(row.join(" ").trim_end());
            result.push('\n');
        }

        let base: Vec<String> = Peg::ALL
            .iter()
            .map(|_| {
                let mut segment: String = std::iter::repeat(BASE).take(width).collect();
                segment.replace_range(
                    disk_count * BASE.len_utf8()..(disk_count + 1) * BASE.len_utf8(),
                    &BASE_WITH_POLE.to_string(),
                );
                segment
            })
            .collect();
        result.push_str(&base.join(&BASE.to_string()));
        result.push('\n');

        result
    }
}
