//! Translation of crossterm events into the few inputs the demos react to.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};

/// A user input, in terminal screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    /// Main button pressed at column `x`, row `y`.
    Click { x: u16, y: u16, shift: bool },
    /// Secondary button pressed at column `x`, row `y`.
    RightClick { x: u16, y: u16 },
    /// A printable key.
    Key(char),
    Escape,
    /// The terminal was resized.
    Resize { width: u16, height: u16 },
}

/// Map a crossterm event to an [`Input`], dropping everything else
/// (releases, drags, wheel, focus, paste).
pub fn translate(ev: &Event) -> Option<Input> {
    match ev {
        Event::Key(KeyEvent {
            code, kind, ..
        }) => {
            if *kind == KeyEventKind::Release {
                return None;
            }
            match code {
                KeyCode::Char(c) => Some(Input::Key(*c)),
                KeyCode::Esc => Some(Input::Escape),
                _ => None,
            }
        }
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers,
        }) => match kind {
            MouseEventKind::Down(MouseButton::Left) => Some(Input::Click {
                x: *column,
                y: *row,
                shift: modifiers.contains(KeyModifiers::SHIFT),
            }),
            MouseEventKind::Down(MouseButton::Right) => Some(Input::RightClick {
                x: *column,
                y: *row,
            }),
            _ => None,
        },
        Event::Resize(w, h) => Some(Input::Resize {
            width: *w,
            height: *h,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn mouse(kind: MouseEventKind, modifiers: KeyModifiers) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers,
        })
    }

    #[test]
    fn clicks() {
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left), KeyModifiers::NONE)),
            Some(Input::Click {
                x: 7,
                y: 3,
                shift: false
            })
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Left), KeyModifiers::SHIFT)),
            Some(Input::Click {
                x: 7,
                y: 3,
                shift: true
            })
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Down(MouseButton::Right), KeyModifiers::NONE)),
            Some(Input::RightClick { x: 7, y: 3 })
        );
        assert_eq!(
            translate(&mouse(MouseEventKind::Up(MouseButton::Left), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn keys() {
        let press = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(translate(&press), Some(Input::Key('q')));

        let esc = Event::Key(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE));
        assert_eq!(translate(&esc), Some(Input::Escape));

        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(translate(&release), None);

        let tab = Event::Key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        assert_eq!(translate(&tab), None);
    }

    #[test]
    fn resize() {
        assert_eq!(
            translate(&Event::Resize(80, 24)),
            Some(Input::Resize {
                width: 80,
                height: 24
            })
        );
    }
}
