use log::{debug, info};

use crate::move_generator::MoveGenerator;
use crate::tower::{validate_disk_count, MAX_DISKS};

use super::config::SolverConfig;
use super::error::GameError;
use super::pacing::Pacing;
use super::renderer::{KeyAction, MoveRenderer};

/// How a run ended.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum Outcome {
    Solved { moves: u64 },
    Interrupted { moves: u64 },
}

/// Pulls moves from the generator one at a time and hands them to the
/// renderer, pacing them as configured.
pub struct GameLoop<R: MoveRenderer> {
    generator: MoveGenerator,
    renderer: R,
    config: SolverConfig,
}

impl<R: MoveRenderer> GameLoop<R> {
    /// Fails with a configuration error if the renderer cannot draw the
    /// configured disk count.
    pub fn new(renderer: R, config: SolverConfig) -> Result<Self, GameError> {
        let max = MAX_DISKS.min(renderer.max_disks());
        validate_disk_count(config.disk_count as i64, max)?;
        let generator = MoveGenerator::new(config.disk_count)?;
        Ok(Self {
            generator,
            renderer,
            config,
        })
    }

    pub fn generator(&self) -> &MoveGenerator {
        &self.generator
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Runs to completion or until the user quits, then closes the renderer.
    /// The renderer is closed even when drawing fails.
    pub fn run(&mut self) -> Result<Outcome, GameError> {
        info!(
            "showing {} moves for {} disks, pacing: {}",
            self.generator.total_moves(),
            self.config.disk_count,
            self.config.pacing
        );
        let result = self.drive();
        let closed = self.renderer.close();
        let outcome = result?;
        closed?;

        debug!("run ended: {:?}", outcome);
        Ok(outcome)
    }

    fn drive(&mut self) -> Result<Outcome, GameError> {
        self.renderer.show_towers(self.generator.store())?;

        let action = match self.config.pacing {
            Pacing::Manual => {
                self.renderer.prompt_continue()?;
                self.renderer.wait_for_key()?
            }
            _ => self.renderer.pause(self.config.initial_hold)?,
        };
        if action == KeyAction::Quit {
            return Ok(self.interrupted());
        }

        while let Some(descriptor) = self.generator.next_move()? {
            let store = self.generator.store();
            let action = match self.config.pacing {
                Pacing::Immediate => {
                    self.renderer.show_move(&descriptor, store)?;
                    KeyAction::Continue
                }
                Pacing::Delay => {
                    self.renderer.show_move(&descriptor, store)?;
                    self.renderer.pause(self.config.delay)?
                }
                Pacing::Manual => {
                    self.renderer.show_move(&descriptor, store)?;
                    self.renderer.prompt_continue()?;
                    self.renderer.wait_for_key()?
                }
                Pacing::Animated => self.renderer.animate_move(&descriptor, store)?,
            };
            if action == KeyAction::Quit {
                return Ok(self.interrupted());
            }
        }

        let moves = self.generator.move_count();
        if self.config.pacing != Pacing::Manual {
            self.renderer.prompt_continue()?;
            self.renderer.wait_for_key()?;
        }
        Ok(Outcome::Solved { moves })
    }

    fn interrupted(&self) -> Outcome {
        let moves = self.generator.move_count();
        info!("interrupted after {} moves", moves);
        Outcome::Interrupted { moves }
    }
}
