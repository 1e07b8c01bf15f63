//! Full-screen terminal interface.

use cellauto_lib::PolyAutomaton;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal::{self, ClearType},
    QueueableCommand,
};
use log::debug;
use std::{
    error::Error,
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// Color of living cells, as stored in a `BGRA8` frame.
const ALIVE_COLOR: u32 = 0xFF13A00E;
/// Color of dead cells, as stored in a `BGRA8` frame.
const DEAD_COLOR: u32 = 0xFF000000;

/// How long to wait for an event while paused.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Size of the grid that fills a terminal of `cols × rows`:
/// each row but the status bar shows two rows of cells.
fn grid_size(cols: u16, rows: u16) -> (i32, i32) {
    let width = i32::from(cols).max(1);
    let height = (i32::from(rows) - 1).max(1) * 2;
    (width, height)
}

/// Size of the grid that fills the current terminal.
pub(crate) fn terminal_grid_size() -> io::Result<(i32, i32)> {
    let (cols, rows) = terminal::size()?;
    Ok(grid_size(cols, rows))
}

/// Converts a `BGRA8` pixel to a terminal color. The alpha channel is
/// ignored.
fn pixel_color(pixel: u32) -> Color {
    let [b, g, r, _] = pixel.to_le_bytes();
    Color::Rgb { r, g, b }
}

struct AutomatonWindow {
    stdout: Stdout,
    paused: bool,
    interval: Duration,
    last_tick: Instant,
    /// One pixel per cell, reused between frames.
    pixels: Vec<u32>,
}

impl AutomatonWindow {
    fn new(interval: Duration) -> Self {
        AutomatonWindow {
            stdout: io::stdout(),
            paused: false,
            interval,
            last_tick: Instant::now(),
            pixels: Vec::new(),
        }
    }

    fn enter(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()
    }

    fn exit(&mut self) -> io::Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()
    }

    /// Draws the current generation, two rows of cells per terminal row,
    /// and the status bar below.
    fn update(&mut self, automaton: &PolyAutomaton) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let view = automaton.view();
        self.pixels.resize(view.cells.len(), DEAD_COLOR);
        view.write_pixels(&mut self.pixels, ALIVE_COLOR, DEAD_COLOR);

        let width = view.width.min(i32::from(cols)) as usize;
        let lines = ((view.height + 1) / 2).min(i32::from(rows) - 1).max(0);
        for line in 0..lines {
            self.stdout.queue(cursor::MoveTo(0, line as u16))?;
            let upper = (2 * line) as usize * view.width as usize;
            let lower = upper + view.width as usize;
            for x in 0..width {
                let top = self.pixels[upper + x];
                let bottom = self.pixels.get(lower + x).copied().unwrap_or(DEAD_COLOR);
                self.stdout.queue(SetForegroundColor(pixel_color(top)))?;
                self.stdout.queue(SetBackgroundColor(pixel_color(bottom)))?;
                self.stdout.queue(Print('▀'))?;
            }
        }
        self.stdout.queue(ResetColor)?;

        let status = if self.paused {
            "Paused. [space] resume  [n] step  [r] reseed  [c] clear  [q] quit"
        } else {
            "Running. [space] pause  [r] reseed  [c] clear  [q] quit"
        };
        let bar = format!(
            "Gen: {}  Cells: {}  {}x{} {}  {}  {}",
            automaton.generation(),
            automaton.cell_count(),
            view.width,
            view.height,
            automaton.boundary(),
            automaton.rule(),
            status
        );
        let bar: String = bar.chars().take(cols as usize).collect();
        self.stdout.queue(cursor::MoveTo(0, rows.saturating_sub(1)))?;
        self.stdout.queue(SetAttribute(Attribute::Reverse))?;
        self.stdout.queue(Print(format!("{:<1$}", bar, cols as usize)))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()
    }

    fn resize(
        &mut self,
        automaton: &mut PolyAutomaton,
        cols: u16,
        rows: u16,
    ) -> Result<(), Box<dyn Error>> {
        let (width, height) = grid_size(cols, rows);
        debug!("terminal resized to {}x{}", cols, rows);
        automaton.resize(width, height)?;
        automaton.randomize();
        self.stdout.queue(terminal::Clear(ClearType::All))?;
        Ok(())
    }

    /// Time to wait for an event before the next tick is due.
    fn timeout(&self) -> Duration {
        if self.paused {
            IDLE_POLL
        } else {
            self.interval.saturating_sub(self.last_tick.elapsed())
        }
    }
}

/// Whether the key quits the interface.
fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

fn run(
    window: &mut AutomatonWindow,
    automaton: &mut PolyAutomaton,
    resize_to_terminal: bool,
) -> Result<(), Box<dyn Error>> {
    if resize_to_terminal {
        let (width, height) = terminal_grid_size()?;
        let view = automaton.view();
        if (view.width, view.height) != (width, height) {
            automaton.resize(width, height)?;
            automaton.randomize();
        }
    }
    window.update(automaton)?;

    loop {
        if event::poll(window.timeout())? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if is_quit(&key) {
                        return Ok(());
                    }
                    match key.code {
                        KeyCode::Char(' ') | KeyCode::Enter => {
                            window.paused = !window.paused;
                            window.last_tick = Instant::now();
                        }
                        KeyCode::Char('n') | KeyCode::Right => {
                            window.paused = true;
                            automaton.tick();
                        }
                        KeyCode::Char('r') => {
                            let seed = automaton.config().seed.wrapping_add(1);
                            automaton.seed(seed);
                        }
                        KeyCode::Char('c') => automaton.clear(),
                        _ => (),
                    }
                    window.update(automaton)?;
                }
                Event::Resize(cols, rows) => {
                    if resize_to_terminal {
                        window.resize(automaton, cols, rows)?;
                    } else {
                        window.stdout.queue(terminal::Clear(ClearType::All))?;
                    }
                    window.update(automaton)?;
                }
                _ => (),
            }
        }

        if !window.paused && window.last_tick.elapsed() >= window.interval {
            window.last_tick = Instant::now();
            automaton.tick();
            window.update(automaton)?;
        }
    }
}

/// Runs the automaton in the terminal until the user quits.
///
/// If `resize_to_terminal` is set, the grid follows the size of the
/// terminal, and is refilled randomly whenever it changes.
pub(crate) fn run_with_tui(
    automaton: &mut PolyAutomaton,
    interval: Duration,
    resize_to_terminal: bool,
) -> Result<(), Box<dyn Error>> {
    let mut window = AutomatonWindow::new(interval);
    window.enter()?;
    let result = run(&mut window, automaton, resize_to_terminal);
    window.exit()?;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette() {
        assert_eq!(
            pixel_color(ALIVE_COLOR),
            Color::Rgb {
                r: 0x13,
                g: 0xA0,
                b: 0x0E
            }
        );
        assert_eq!(pixel_color(DEAD_COLOR), Color::Rgb { r: 0, g: 0, b: 0 });
    }

    #[test]
    fn two_rows_per_line() {
        assert_eq!(grid_size(80, 25), (80, 48));
        assert_eq!(grid_size(0, 0), (1, 2));
    }
}
