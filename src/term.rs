use crate::TermCoords;
use crate::grid::{pixel_to_cell, COLS, ROWS, TILE_SIZE};
use crate::render::{Color, DrawCall};
use std::{io::{self, Stdout, Write, stdout}, time::Duration};

use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::{Attribute, SetAttribute, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::event::{Event, KeyEvent, read, poll};
use log::debug;
use thiserror::Error;

pub const TITLE: &str = "U-Beee Pro Snake";

// Terminal characters are roughly twice as tall as they are wide
const CHARS_PER_CELL: i32 = 2;
const SCREEN_WIDTH: i32 = COLS * CHARS_PER_CELL;
const SCREEN_HEIGHT: i32 = ROWS;

const TILE_CHAR: char = '█';

#[derive(Debug, Error)]
pub enum TermError {
    #[error("terminal is {have_w}x{have_h}, the board needs at least {need_w}x{need_h}")]
    TooSmall { have_w: u16, have_h: u16, need_w: u16, need_h: u16 },
    #[error("terminal error: {0}")]
    Crossterm(#[from] crossterm::ErrorKind),
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    ch: char,
    color: Option<Color>,
    bold: bool,
}

const BLANK: Cell = Cell { ch: ' ', color: None, bold: false };

pub struct TermManager {
    stdout: Stdout,
    origin: TermCoords,
    screen: Vec<Cell>,
}

impl TermManager {
    pub fn new() -> Result<Self, TermError> {
        let (width, height) = terminal::size()?;
        let (need_w, need_h) = ((SCREEN_WIDTH + 2) as u16, (SCREEN_HEIGHT + 2) as u16);
        if width < need_w || height < need_h {
            return Err(TermError::TooSmall { have_w: width, have_h: height, need_w, need_h });
        }
        debug!("Terminal is {}x{}", width, height);

        // Top-left of the board, inside the border
        let origin = ((width - need_w) / 2 + 1, (height - need_h) / 2 + 1);
        Ok(TermManager { stdout: stdout(), origin, screen: blank_screen() })
    }

    pub fn setup(&mut self) -> Result<(), TermError> {
        execute!(self.stdout, EnterAlternateScreen, SetTitle(TITLE))?;
        terminal::enable_raw_mode()?;
        execute!(self.stdout, cursor::Hide, cursor::DisableBlinking)?;
        self.clear()?;
        self.draw_borders()
    }

    pub fn restore(&mut self) -> Result<(), TermError> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::Show, cursor::EnableBlinking, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn read_key_blocking(&self) -> Result<KeyEvent, TermError> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    /// Waits up to `timeout` for a key press.
    pub fn poll_key(&self, timeout: Duration) -> Result<Option<KeyEvent>, TermError> {
        if !poll(timeout)? {
            return Ok(None);
        }

        match read()? {
            Event::Key(ev) => Ok(Some(ev)),
            Event::Resize(w, h) => {
                debug!("Terminal resized to {}x{}, keeping layout", w, h);
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    /// Draws a frame, writing only the cells that changed since the last one.
    pub fn present(&mut self, calls: &[DrawCall]) -> Result<(), TermError> {
        let frame = compose(calls);

        for ((x, y), cell) in changed_cells(&self.screen, &frame) {
            self.print_at((self.origin.0 + x, self.origin.1 + y), cell)?;
        }

        self.screen = frame;
        self.flush()
    }

    ///////////////////////////////////////////////////////////////////////////

    fn clear(&mut self) -> Result<(), TermError> {
        execute!(self.stdout, terminal::Clear(ClearType::All))?;
        self.screen = blank_screen();
        Ok(())
    }

    fn draw_borders(&mut self) -> Result<(), TermError> {
        let (left, top) = (self.origin.0 - 1, self.origin.1 - 1);
        let right = self.origin.0 + SCREEN_WIDTH as u16;
        let bottom = self.origin.1 + SCREEN_HEIGHT as u16;

        for x in left..=right {
            let ch = if x == left || x == right {'+'} else {'-'};
            queue!(self.stdout, cursor::MoveTo(x, top), style::Print(ch))?;
            queue!(self.stdout, cursor::MoveTo(x, bottom), style::Print(ch))?;
        }

        for y in top + 1..bottom {
            queue!(self.stdout, cursor::MoveTo(left, y), style::Print('|'))?;
            queue!(self.stdout, cursor::MoveTo(right, y), style::Print('|'))?;
        }

        self.flush()
    }

    fn print_at(&mut self, pos: TermCoords, cell: Cell) -> Result<(), TermError> {
        let color = cell.color.map_or(style::Color::Reset, term_color);
        queue!(self.stdout, cursor::MoveTo(pos.0, pos.1), SetForegroundColor(color))?;

        if cell.bold {
            queue!(self.stdout, SetAttribute(Attribute::Bold), style::Print(cell.ch), SetAttribute(Attribute::Reset))?;
        } else {
            queue!(self.stdout, style::Print(cell.ch))?;
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<(), TermError> {
        self.stdout.flush()?;
        Ok(())
    }
}

fn blank_screen() -> Vec<Cell> {
    vec![BLANK; (SCREEN_WIDTH * SCREEN_HEIGHT) as usize]
}

/// Board-relative positions of the cells that differ between two frames.
fn changed_cells(old: &[Cell], new: &[Cell]) -> Vec<(TermCoords, Cell)> {
    new.iter()
        .zip(old.iter())
        .enumerate()
        .filter(|(_, (n, o))| n != o)
        .map(|(i, (n, _))| {
            let x = (i as i32 % SCREEN_WIDTH) as u16;
            let y = (i as i32 / SCREEN_WIDTH) as u16;
            ((x, y), *n)
        })
        .collect()
}

fn term_color(color: Color) -> style::Color {
    match color {
        Color::Red => style::Color::Red,
        Color::Lime => style::Color::Green,
        Color::White => style::Color::White,
    }
}

/// Rasterizes draw calls into a board-sized character grid. Anything off
/// the board is clipped.
pub fn compose(calls: &[DrawCall]) -> Vec<Cell> {
    let mut screen = blank_screen();

    let mut put = |x: i32, y: i32, cell: Cell| {
        if (0..SCREEN_WIDTH).contains(&x) && (0..SCREEN_HEIGHT).contains(&y) {
            screen[(y * SCREEN_WIDTH + x) as usize] = cell;
        }
    };

    for call in calls {
        match call {
            DrawCall::Clear => {
                for y in 0..SCREEN_HEIGHT {
                    for x in 0..SCREEN_WIDTH {
                        put(x, y, BLANK);
                    }
                }
            }
            DrawCall::Rect { pos, size, color } => {
                let (col, row) = pixel_to_cell(*pos);
                let span = (*size / TILE_SIZE).max(1);
                let cell = Cell { ch: TILE_CHAR, color: Some(*color), bold: false };
                for y in row..row + span {
                    for x in col * CHARS_PER_CELL..(col + span) * CHARS_PER_CELL {
                        put(x, y, cell);
                    }
                }
            }
            DrawCall::Text { pos, text, color, bold } => {
                let cx = pos.0 * CHARS_PER_CELL / TILE_SIZE;
                let cy = pos.1 / TILE_SIZE;
                let lines: Vec<&str> = text.lines().collect();
                let top = cy - lines.len() as i32 / 2;

                for (i, line) in lines.iter().enumerate() {
                    let start = cx - line.chars().count() as i32 / 2;
                    for (j, ch) in line.chars().enumerate() {
                        put(start + j as i32, top + i as i32, Cell { ch, color: Some(*color), bold: *bold });
                    }
                }
            }
        }
    }

    screen
}
