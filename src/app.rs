use std::time::Instant;

use crate::config::Config;
use crate::game::{GameController, Snapshot};
use crate::render::{self, board_center, DrawCall};
use crate::snake::Direction::{*, self};
use crate::term::{TermError, TermManager};

use crossterm::event::{KeyEvent, KeyModifiers, KeyCode};
use log::{debug, info};
use rand::Rng;

const INTRO_LINES: &str = "Arrow keys or WASD to move\n\
                           Space to restart after a crash\n\
                           Esc to pause\n\
                           CTRL+C to quit\n\
                           \n\
                           Press any key to begin";

const PAUSE_LINES: &str = "Paused\nPress Esc to resume\nor CTRL+C to quit";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Restart,
    Pause,
    Quit,
}

impl Command {
    pub fn from_key_event(ev: &KeyEvent) -> Option<Command> {
        if is_ctrl_c(ev) {
            return Some(Command::Quit);
        }

        match ev.code {
            KeyCode::Char('w') | KeyCode::Up => Some(Command::Turn(Up)),
            KeyCode::Char('a') | KeyCode::Left => Some(Command::Turn(Left)),
            KeyCode::Char('s') | KeyCode::Down => Some(Command::Turn(Down)),
            KeyCode::Char('d') | KeyCode::Right => Some(Command::Turn(Right)),
            KeyCode::Char(' ') => Some(Command::Restart),
            KeyCode::Esc => Some(Command::Pause),
            _ => None,
        }
    }
}

/// Owns the controller and the terminal, and drives both at a fixed rate.
pub struct App<R> {
    game: GameController<R>,
    term: TermManager,
    config: Config,
    paused: bool,
}

impl<R: Rng> App<R> {
    pub fn new(config: Config, rng: R, term: TermManager) -> Self {
        App { game: GameController::new(rng), term, config, paused: false }
    }

    pub fn term_mut(&mut self) -> &mut TermManager {
        &mut self.term
    }

    /// Returns `false` if the user quit from the intro screen.
    pub fn show_intro(&mut self) -> Result<bool, TermError> {
        let mut frame = render::render(&self.game.snapshot());
        frame.push(render::text(board_center(), INTRO_LINES.to_string()));
        self.term.present(&frame)?;

        let key = self.term.read_key_blocking()?;
        Ok(!is_ctrl_c(&key))
    }

    pub fn run(&mut self) -> Result<(), TermError> {
        let interval = self.config.tick_interval;
        let mut snapshot = self.game.snapshot();
        let mut next_tick = Instant::now() + interval;

        self.draw(&snapshot)?;

        loop {
            let now = Instant::now();
            if now < next_tick {
                if let Some(key_ev) = self.term.poll_key(next_tick - now)? {
                    match Command::from_key_event(&key_ev) {
                        Some(Command::Quit) => break,
                        Some(cmd) => {
                            self.dispatch(cmd);
                            snapshot = self.game.snapshot();
                            self.draw(&snapshot)?;
                        }
                        None => {}
                    }
                }
                continue;
            }

            // Schedule from the deadline, not from now, so slow frames don't drift
            next_tick += interval;
            if next_tick < now {
                next_tick = now + interval;
            }

            if self.paused { continue; }

            snapshot = self.game.tick();
            self.draw(&snapshot)?;
        }

        info!("Quit with score {}", snapshot.score);
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn dispatch(&mut self, cmd: Command) {
        match cmd {
            Command::Turn(dir) if !self.paused => self.game.handle_direction_input(dir),
            Command::Turn(_) => {}
            Command::Restart => self.game.handle_restart_input(),
            Command::Pause => {
                self.paused = !self.paused;
                debug!("Paused: {}", self.paused);
            }
            Command::Quit => {}
        }
    }

    fn draw(&mut self, snapshot: &Snapshot) -> Result<(), TermError> {
        let mut frame: Vec<DrawCall> = render::render(snapshot);
        if self.paused {
            frame.push(render::text(board_center(), PAUSE_LINES.to_string()));
        }
        self.term.present(&frame)
    }
}

fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers } if modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent { code, modifiers: KeyModifiers::NONE }
    }

    #[test]
    fn arrows_and_wasd_turn() {
        assert_eq!(Command::from_key_event(&key(KeyCode::Up)), Some(Command::Turn(Up)));
        assert_eq!(Command::from_key_event(&key(KeyCode::Char('w'))), Some(Command::Turn(Up)));
        assert_eq!(Command::from_key_event(&key(KeyCode::Left)), Some(Command::Turn(Left)));
        assert_eq!(Command::from_key_event(&key(KeyCode::Char('a'))), Some(Command::Turn(Left)));
        assert_eq!(Command::from_key_event(&key(KeyCode::Down)), Some(Command::Turn(Down)));
        assert_eq!(Command::from_key_event(&key(KeyCode::Char('s'))), Some(Command::Turn(Down)));
        assert_eq!(Command::from_key_event(&key(KeyCode::Right)), Some(Command::Turn(Right)));
        assert_eq!(Command::from_key_event(&key(KeyCode::Char('d'))), Some(Command::Turn(Right)));
    }

    #[test]
    fn space_restarts_and_esc_pauses() {
        assert_eq!(Command::from_key_event(&key(KeyCode::Char(' '))), Some(Command::Restart));
        assert_eq!(Command::from_key_event(&key(KeyCode::Esc)), Some(Command::Pause));
    }

    #[test]
    fn ctrl_c_quits_but_plain_c_does_nothing() {
        let ctrl_c = KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL };
        assert_eq!(Command::from_key_event(&ctrl_c), Some(Command::Quit));
        assert_eq!(Command::from_key_event(&key(KeyCode::Char('c'))), None);
        assert_eq!(Command::from_key_event(&key(KeyCode::Enter)), None);
    }
}
