//! CLI argument parsing using StructOpt.

use hanoi::game::Pacing;
use structopt::clap::AppSettings;
use structopt::StructOpt;

use crate::cli::commands::{list::ListCommand, play::PlayCommand, Command};

#[derive(StructOpt)]
#[structopt(
    name = "hanoi",
    setting = AppSettings::AllowNegativeNumbers,
    about = "Solves the Towers of Hanoi and animates every move on the terminal.",
    after_help = "SPEED:\n    1 - No delay between moves, for large numbers of disks.\n    2 - Delay between moves (1 second unless `--delay` is given).\n    3 - Press a key to continue with each move.\n    4 - Animated display - cute, but slow.\n\nPress `q`, `Esc` or Ctrl-C at any pause to quit."
)]
pub struct Hanoi {
    #[structopt(default_value = "4", help = "Number of disks to solve for")]
    pub disks: i64,
    #[structopt(
        default_value = "animated",
        help = "1 (immediate), 2 (delay), 3 (manual) or 4 (animated); names are accepted too"
    )]
    pub speed: Pacing,
    #[structopt(
        long = "delay",
        default_value = "1000",
        help = "Delay between moves in milliseconds for speed 2"
    )]
    pub delay_ms: u64,
    #[structopt(
        long,
        help = "Draw with plain termion output instead of the full-screen TUI"
    )]
    pub plain: bool,
    #[structopt(long, help = "Print the moves as text instead of animating them")]
    pub list: bool,
}

impl Hanoi {
    /// Prints the usage text, for reporting a bad configuration.
    pub fn print_usage() {
        // Nothing useful can be done if stdout is gone
        let _ = Self::clap().print_help();
        println!();
    }
}

impl Command for Hanoi {
    fn execute(self) {
        if self.list {
            ListCommand { disks: self.disks }.execute();
        } else {
            PlayCommand {
                disks: self.disks,
                pacing: self.speed,
                delay_ms: self.delay_ms,
                plain: self.plain,
            }
            .execute();
        }
    }
}
