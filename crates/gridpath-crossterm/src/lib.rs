//! Crossterm terminal driver for the gridpath demos.
//!
//! [`TermDriver`] owns the terminal state (raw mode, alternate screen, mouse
//! capture), turns crossterm events into [`Input`]s and draws [`Canvas`]es,
//! sending only the glyphs that changed since the previous flush.

mod canvas;
mod input;

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor, event, queue,
    style::{Color as CtColor, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use log::debug;

pub use canvas::{Canvas, Change, Color, Glyph};
pub use input::{Input, translate};

/// Maps a [`Color`] to a [`crossterm::style::Color`].
fn to_ct_color(c: Color) -> CtColor {
    if c == Color::DEFAULT {
        CtColor::Reset
    } else {
        CtColor::Rgb {
            r: c.r(),
            g: c.g(),
            b: c.b(),
        }
    }
}

/// A terminal back-end using crossterm.
pub struct TermDriver {
    mouse_enabled: bool,
    active: bool,
    last: Option<Canvas>,
}

impl TermDriver {
    /// Create a new driver. The terminal is untouched until [`init`](Self::init).
    pub fn new() -> Self {
        Self {
            mouse_enabled: true,
            active: false,
            last: None,
        }
    }

    /// Configure whether mouse events are captured.
    pub fn with_mouse(mut self, enabled: bool) -> Self {
        self.mouse_enabled = enabled;
        self
    }

    /// Enter raw mode and the alternate screen.
    pub fn init(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )?;
        if self.mouse_enabled {
            queue!(stdout, event::EnableMouseCapture)?;
        }
        stdout.flush()?;
        debug!("terminal: initialised (mouse: {})", self.mouse_enabled);
        Ok(())
    }

    /// Current terminal size as `(columns, rows)`.
    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Wait up to `timeout` for input, then drain everything pending.
    pub fn poll(&mut self, timeout: Duration) -> io::Result<Vec<Input>> {
        let mut out = Vec::new();
        if !event::poll(timeout)? {
            return Ok(out);
        }
        while event::poll(Duration::ZERO)? {
            let ev = event::read()?;
            if let Some(input) = translate(&ev) {
                if let Input::Resize { .. } = input {
                    // Terminals clear or reflow on resize; redraw everything.
                    self.last = None;
                }
                out.push(input);
            }
        }
        Ok(out)
    }

    /// Draw `canvas`, writing only glyphs that differ from the last flush.
    pub fn flush(&mut self, canvas: &Canvas) -> io::Result<()> {
        let mut stdout = io::stdout();
        let changes = match &self.last {
            Some(prev) if prev.width() == canvas.width() && prev.height() == canvas.height() => {
                canvas.diff(prev)
            }
            _ => {
                queue!(stdout, terminal::Clear(ClearType::All))?;
                canvas.diff(&Canvas::new(0, 0))
            }
        };

        for Change { x, y, glyph } in changes {
            queue!(
                stdout,
                cursor::MoveTo(x, y),
                SetForegroundColor(to_ct_color(glyph.fg)),
                SetBackgroundColor(to_ct_color(glyph.bg)),
                Print(glyph.ch)
            )?;
        }

        stdout.flush()?;
        self.last = Some(canvas.clone());
        Ok(())
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let mut stdout = io::stdout();
        if self.mouse_enabled {
            let _ = queue!(stdout, event::DisableMouseCapture);
        }
        let _ = queue!(
            stdout,
            SetForegroundColor(CtColor::Reset),
            SetBackgroundColor(CtColor::Reset),
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = stdout.flush();
        let _ = terminal::disable_raw_mode();
        debug!("terminal: restored");
    }
}

impl Default for TermDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TermDriver {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_color_maps_to_reset() {
        assert_eq!(to_ct_color(Color::DEFAULT), CtColor::Reset);
        assert_eq!(
            to_ct_color(Color::from_rgb(56, 189, 248)),
            CtColor::Rgb {
                r: 56,
                g: 189,
                b: 248
            }
        );
    }

    #[test]
    fn close_without_init_is_noop() {
        let mut d = TermDriver::new().with_mouse(false);
        d.close();
        d.close();
        assert!(!d.active);
    }
}
