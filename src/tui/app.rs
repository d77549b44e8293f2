//! Full-screen renderer built on ratatui and crossterm

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::debug;
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::game::animation::FloatPath;
use crate::game::display::{FloatingDisk, TowerScene};
use crate::game::error::DisplayError;
use crate::game::layout::{TowerLayout, LAYOUT_WIDTH};
use crate::game::renderer::{KeyAction, MoveRenderer};
use crate::move_generator::MoveDescriptor;
use crate::tower::TowerStore;
use crate::tui::{tower_widget::TowerWidget, Theme};

fn key_action(key: &KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        _ => KeyAction::Continue,
    }
}

/// Main TUI renderer
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    layout: TowerLayout,
    moves: u64,
    prompt: bool,
    last_store: Option<TowerStore>,
    closed: bool,
}

impl TuiRenderer {
    /// Switch the terminal to raw mode on the alternate screen
    pub fn new() -> Result<Self, DisplayError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        terminal.clear()?;

        Ok(Self {
            terminal,
            theme: Theme::default(),
            layout: TowerLayout::new(0),
            moves: 0,
            prompt: false,
            last_store: None,
            closed: false,
        })
    }

    /// Render a single frame
    fn draw(
        &mut self,
        store: &TowerStore,
        floating: Option<&FloatingDisk>,
    ) -> Result<(), DisplayError> {
        let scene = TowerScene::new(&self.layout, store, floating, self.moves, self.prompt);
        let layout = &self.layout;
        let theme = &self.theme;
        self.terminal.draw(|frame| {
            let widget = TowerWidget::new(&scene, layout, floating, theme);
            frame.render_widget(widget, frame.area());
        })?;
        self.last_store = Some(store.clone());
        Ok(())
    }

    /// Returns the action for the next key pressed within `timeout`, if any
    fn poll_key(timeout: Duration) -> Result<Option<KeyAction>, DisplayError> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(Some(key_action(&key)));
                }
            }
        }
        Ok(None)
    }

    fn restore(&mut self) -> Result<(), DisplayError> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl MoveRenderer for TuiRenderer {
    fn show_towers(&mut self, store: &TowerStore) -> Result<(), DisplayError> {
        self.layout = TowerLayout::new(store.disk_count());

        let size = self.terminal.size()?;
        if size.width < LAYOUT_WIDTH || size.height < self.layout.height() {
            return Err(DisplayError::TerminalTooSmall {
                required_width: LAYOUT_WIDTH,
                required_height: self.layout.height(),
                width: size.width,
                height: size.height,
            });
        }

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
        match self.last_store.take() {
            Some(store) => {
                let result = self.draw(&store, None);
                self.last_store = Some(store);
                result
            }
            None => Ok(()),
        }
    }

    fn wait_for_key(&mut self) -> Result<KeyAction, DisplayError> {
        loop {
            if let Some(action) = Self::poll_key(Duration::from_millis(100))? {
                return Ok(action);
            }
        }
    }

    fn pause(&mut self, duration: Duration) -> Result<KeyAction, DisplayError> {
        let deadline = Instant::now() + duration;
        loop {
            let now = Instant::now();
            if now >= deadline {
                return Ok(KeyAction::Continue);
            }
            if let Some(KeyAction::Quit) = Self::poll_key(deadline - now)? {
                return Ok(KeyAction::Quit);
            }
        }
    }

    fn close(&mut self) -> Result<(), DisplayError> {
        debug!("closing tui renderer after {} moves", self.moves);
        self.restore()
    }
}

impl Drop for TuiRenderer {
    fn drop(&mut self) {
        // Leave the terminal usable even if the game loop panicked
        let _ = self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_keys() {
        let q = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_action(&q), KeyAction::Quit);
        assert_eq!(key_action(&esc), KeyAction::Quit);
        assert_eq!(key_action(&ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn test_plain_c_continues() {
        let c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE);
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(key_action(&c), KeyAction::Continue);
        assert_eq!(key_action(&enter), KeyAction::Continue);
    }
}
