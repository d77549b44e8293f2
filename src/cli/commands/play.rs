//! Play command - animate the solution on the terminal.

use std::time::Duration;

use hanoi::game::layout::TERMINAL_MAX_DISKS;
use hanoi::game::{
    GameError, GameLoop, MoveRenderer, Outcome, Pacing, SimpleRenderer, SolverConfig,
};
use hanoi::tui::TuiRenderer;
use log::error;

use super::Command;
use crate::cli::Hanoi;

pub struct PlayCommand {
    pub disks: i64,
    pub pacing: Pacing,
    pub delay_ms: u64,
    pub plain: bool,
}

fn run_game_loop<R: MoveRenderer>(renderer: R, config: SolverConfig) -> Result<Outcome, GameError> {
    let mut game = GameLoop::new(renderer, config)?;
    game.run()
}

impl Command for PlayCommand {
    fn execute(self) {
        // Validate before touching the terminal so the usage text prints normally
        let config = match SolverConfig::new(self.disks, self.pacing, TERMINAL_MAX_DISKS) {
            Ok(config) => config.with_delay(Duration::from_millis(self.delay_ms)),
            Err(e) => {
                println!("{}\n", e);
                Hanoi::print_usage();
                std::process::exit(1);
            }
        };

        let result = if self.plain {
            SimpleRenderer::new()
                .map_err(GameError::from)
                .and_then(|renderer| run_game_loop(renderer, config))
        } else {
            TuiRenderer::new()
                .map_err(GameError::from)
                .and_then(|renderer| run_game_loop(renderer, config))
        };

        match result {
            Ok(Outcome::Solved { moves }) => println!("Solved in {} moves.", moves),
            Ok(Outcome::Interrupted { moves }) => {
                println!("User Interrupt after {} moves.", moves)
            }
            Err(e) => {
                error!("run failed: {:?}", e);
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
