use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use log::debug;
use termion::event::Key;
use termion::input::{Keys, TermRead};
use termion::raw::{IntoRawMode, RawTerminal};
use termion::{async_stdin, cursor, AsyncReader};

use crate::move_generator::MoveDescriptor;
use crate::tower::TowerStore;

use super::animation::FloatPath;
use super::display::{FloatingDisk, TowerDisplay, TowerScene, PROMPT};
use super::error::DisplayError;
use super::layout::{TowerLayout, PROMPT_COLUMN, PROMPT_ROW, TERMINAL_MAX_DISKS};

/// What the user asked for while the renderer was waiting.
#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum KeyAction {
    Continue,
    Quit,
}

/// Draws the puzzle. The game loop decides pacing; renderers only draw and
/// wait when told to.
pub trait MoveRenderer {
    /// Largest disk count this renderer can lay out.
    fn max_disks(&self) -> usize {
        TERMINAL_MAX_DISKS
    }

    fn show_towers(&mut self, store: &TowerStore) -> Result<(), DisplayError>;

    /// Draws a completed move. `store` already reflects it.
    fn show_move(
        &mut self,
        descriptor: &MoveDescriptor,
        store: &TowerStore,
    ) -> Result<(), DisplayError>;

    /// Draws a completed move as a float. Renderers without animation just
    /// show the result.
    fn animate_move(
        &mut self,
        descriptor: &MoveDescriptor,
        store: &TowerStore,
    ) -> Result<KeyAction, DisplayError> {
        self.show_move(descriptor, store)?;
        Ok(KeyAction::Continue)
    }

    fn prompt_continue(&mut self) -> Result<(), DisplayError>;

    fn wait_for_key(&mut self) -> Result<KeyAction, DisplayError>;

    /// Waits for `duration`, returning early if the user quits.
    fn pause(&mut self, duration: Duration) -> Result<KeyAction, DisplayError> {
        thread::sleep(duration);
        Ok(KeyAction::Continue)
    }

    /// Restores the terminal. Called once, whether or not the run finished.
    fn close(&mut self) -> Result<(), DisplayError>;
}

const POLL_INTERVAL: Duration = Duration::from_millis(10);

fn key_action(key: Key) -> KeyAction {
    match key {
        Key::Char('q') | Key::Esc | Key::Ctrl('c') => KeyAction::Quit,
        _ => KeyAction::Continue,
    }
}

/// Plain text renderer: writes whole frames with termion cursor addressing.
pub struct SimpleRenderer {
    stdout: RawTerminal<Stdout>,
    keys: Keys<AsyncReader>,
    display: TowerDisplay,
    layout: TowerLayout,
    moves: u64,
    prompt: bool,
}

impl SimpleRenderer {
    pub fn new() -> Result<Self, DisplayError> {
        let stdout = io::stdout().into_raw_mode()?;
        Ok(Self {
            stdout,
            keys: async_stdin().keys(),
            display: TowerDisplay::new(),
            layout: TowerLayout::new(0),
            moves: 0,
            prompt: false,
        })
    }

    fn draw(
        &mut self,
        store: &TowerStore,
        floating: Option<&FloatingDisk>,
    ) -> Result<(), DisplayError> {
        let scene = TowerScene::new(&self.layout, store, floating, self.moves, self.prompt);
        let frame = self.display.render_scene(&scene);
        self.stdout.write_all(frame.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Returns the action for a pending key, if any was pressed.
    fn poll_key(&mut self) -> Result<Option<KeyAction>, DisplayError> {
        match self.keys.next() {
            Some(Ok(key)) => Ok(Some(key_action(key))),
            Some(Err(error)) => Err(error.into()),
            None => Ok(None),
        }
    }
}

impl MoveRenderer for SimpleRenderer {
    fn show_towers(&mut self, store: &TowerStore) -> Result<(), DisplayError> {
        self.layout = TowerLayout::new(store.disk_count());
        self.display.clear();
        write!(self.stdout, "{}{}", self.display.buffer(), cursor::Hide)?;
        self.draw(store, None)
    }

    fn show_move(
        &mut self,
        descriptor: &MoveDescriptor,
        store: &TowerStore,
    ) -> Result<(), DisplayError> {
        self.moves = descriptor.number;
        self.draw(store, None)
    }

    fn animate_move(
        &mut self,
        descriptor: &MoveDescriptor,
        store: &TowerStore,
    ) -> Result<KeyAction, DisplayError> {
        self.moves = descriptor.number;
        for frame in FloatPath::new(descriptor, &self.layout) {
            let floating = FloatingDisk {
                frame,
                disk_size: descriptor.disk_size,
                to_peg: descriptor.to_peg,
            };
            self.draw(store, Some(&floating))?;
            if self.pause(frame.phase.delay())? == KeyAction::Quit {
                return Ok(KeyAction::Quit);
            }
        }
        self.draw(store, None)?;
        Ok(KeyAction::Continue)
    }

    fn prompt_continue(&mut self) -> Result<(), DisplayError> {
        self.prompt = true;
        let position = cursor::Goto(PROMPT_COLUMN + 1, PROMPT_ROW + 1);
        write!(self.stdout, "{}{}", position, PROMPT)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn wait_for_key(&mut self) -> Result<KeyAction, DisplayError> {
        loop {
            if let Some(action) = self.poll_key()? {
                return Ok(action);
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn pause(&mut self, duration: Duration) -> Result<KeyAction, DisplayError> {
        let deadline = Instant::now() + duration;
        loop {
            if let Some(KeyAction::Quit) = self.poll_key()? {
                return Ok(KeyAction::Quit);
            }
            let now = Instant::now();
            if now >= deadline {
                return Ok(KeyAction::Continue);
            }
            thread::sleep(POLL_INTERVAL.min(deadline - now));
        }
    }

    fn close(&mut self) -> Result<(), DisplayError> {
        debug!("closing plain renderer after {} moves", self.moves);
        self.display.clear();
        write!(self.stdout, "{}{}", self.display.buffer(), cursor::Show)?;
        self.stdout.flush()?;
        self.stdout.suspend_raw_mode()?;
        Ok(())
    }
}
