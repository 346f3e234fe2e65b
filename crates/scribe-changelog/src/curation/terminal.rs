//! Terminal input and output for curation

use std::borrow::Cow;
use std::collections::VecDeque;
use std::io::ErrorKind;

use console::{style, truncate_str, Key, Term};
use scribe_core::CurationError;
use tracing::debug;

/// A source of key presses
pub trait EventSource {
    /// Block for the next key; `None` once input is exhausted
    fn next_key(&mut self) -> Result<Option<Key>, CurationError>;
}

/// Something a frame can be drawn on
pub trait Screen {
    /// Replace the previous frame with `lines`
    fn draw(&mut self, lines: &[String]) -> Result<(), CurationError>;

    /// Clear the last frame and restore the terminal
    fn finish(&mut self) -> Result<(), CurationError>;
}

/// Key presses read from the controlling terminal
pub struct TerminalEvents {
    term: Term,
}

impl TerminalEvents {
    /// Read keys through stderr, which must be a terminal
    pub fn stderr() -> Result<Self, CurationError> {
        let term = Term::stderr();
        if !term.is_term() {
            return Err(CurationError::NotATerminal);
        }
        Ok(Self { term })
    }
}

impl EventSource for TerminalEvents {
    fn next_key(&mut self) -> Result<Option<Key>, CurationError> {
        match self.term.read_key() {
            Ok(key) => Ok(Some(key)),
            Err(e) if e.kind() == ErrorKind::Interrupted => {
                debug!("interrupted while reading key");
                Err(CurationError::Aborted)
            }
            Err(e) if e.kind() == ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(CurationError::Terminal(e)),
        }
    }
}

/// A fixed sequence of keys
#[derive(Debug, Clone, Default)]
pub struct ScriptedEvents {
    keys: VecDeque<Key>,
}

impl ScriptedEvents {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_key(&mut self) -> Result<Option<Key>, CurationError> {
        Ok(self.keys.pop_front())
    }
}

/// Redraws frames in place on a terminal
pub struct TermScreen {
    term: Term,
    drawn: usize,
}

impl TermScreen {
    pub fn stderr() -> Self {
        Self {
            term: Term::stderr(),
            drawn: 0,
        }
    }
}

impl Screen for TermScreen {
    fn draw(&mut self, lines: &[String]) -> Result<(), CurationError> {
        if self.drawn == 0 {
            self.term.hide_cursor()?;
        } else {
            self.term.clear_last_lines(self.drawn)?;
        }

        // A wrapped line would take more rows than `clear_last_lines` removes
        let width = usize::from(self.term.size().1);
        for (idx, line) in lines.iter().enumerate() {
            let line = fit_to_width(line, width);
            if idx == 0 {
                self.term.write_line(&style(line).bold().to_string())?;
            } else if line.starts_with('>') {
                self.term.write_line(&style(line).cyan().to_string())?;
            } else {
                self.term.write_line(&line)?;
            }
        }
        self.drawn = lines.len();
        Ok(())
    }

    fn finish(&mut self) -> Result<(), CurationError> {
        if self.drawn > 0 {
            self.term.clear_last_lines(self.drawn)?;
            self.drawn = 0;
        }
        self.term.show_cursor()?;
        Ok(())
    }
}

/// Cut `line` so it occupies at most `width` terminal columns
fn fit_to_width(line: &str, width: usize) -> Cow<'_, str> {
    truncate_str(line, width, "…")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_events_drain_in_order() {
        let mut events = ScriptedEvents::new([Key::Char('j'), Key::Enter]);
        assert_eq!(events.next_key().unwrap(), Some(Key::Char('j')));
        assert_eq!(events.next_key().unwrap(), Some(Key::Enter));
        assert_eq!(events.next_key().unwrap(), None);
    }

    #[test]
    fn test_fit_to_width() {
        assert_eq!(fit_to_width("> [x] feat: short", 40), "> [x] feat: short");

        let long = "> [x] feat(ui)!: a description far wider than the terminal";
        let fitted = fit_to_width(long, 20);
        assert_eq!(console::measure_text_width(&fitted), 20);
        assert!(fitted.starts_with("> [x] feat(ui)!:"));
        assert!(fitted.ends_with('…'));
    }
}
