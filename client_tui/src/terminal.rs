//! Terminal collaborators: raw-mode session, key source and display sink

use std::collections::VecDeque;
use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use game_core::{KeySource, KEY_ESC};
use log::{debug, warn};

/// Clear the screen, home the cursor and hide it
pub const SCREEN_SETUP: &[u8] = b"\x1b[2J\x1b[H\x1b[?25l";
/// Show the cursor again
pub const SCREEN_RESTORE: &[u8] = b"\x1b[?25h";

/// Anything a finished frame can be written to
pub trait DisplaySink {
    /// Write `frame` as one piece
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()>;
}

impl DisplaySink for Vec<u8> {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        self.extend_from_slice(frame);
        Ok(())
    }
}

/// Frames go straight to stdout, one write and flush each
pub struct StdoutSink {
    out: Stdout,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for StdoutSink {
    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        let mut out = self.out.lock();
        out.write_all(frame)?;
        out.flush()
    }
}

/// Raw-mode terminal for the lifetime of the value
///
/// Starting writes [`SCREEN_SETUP`] to the display sink. Dropping writes
/// [`SCREEN_RESTORE`] to the same sink and restores the previous mode, so
/// every way out of the program (quit key, termination signal, error return,
/// panic unwind) goes through the same teardown.
pub struct TerminalSession<D: DisplaySink = StdoutSink> {
    sink: D,
    raw_mode: bool,
}

impl TerminalSession {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let session = Self::start(StdoutSink::new(), true)?;
        debug!("Terminal switched to raw mode");
        Ok(session)
    }
}

impl<D: DisplaySink> TerminalSession<D> {
    fn start(mut sink: D, raw_mode: bool) -> io::Result<Self> {
        if let Err(err) = sink.write_frame(SCREEN_SETUP) {
            if raw_mode {
                restore_mode();
            }
            return Err(err);
        }
        Ok(Self { sink, raw_mode })
    }
}

impl<D: DisplaySink> Drop for TerminalSession<D> {
    fn drop(&mut self) {
        // Best effort: there is nowhere left to report a failure
        if let Err(err) = self.sink.write_frame(SCREEN_RESTORE) {
            warn!("Failed to show cursor: {}", err);
        }
        if self.raw_mode {
            restore_mode();
        }
        debug!("Terminal restored");
    }
}

fn restore_mode() {
    if let Err(err) = terminal::disable_raw_mode() {
        warn!("Failed to restore terminal mode: {}", err);
    }
}

/// Key codes read from the terminal without blocking
///
/// Key events are turned back into the bytes a raw terminal would send, so
/// arrows arrive as `ESC [ A` and friends.
#[derive(Debug, Default)]
pub struct TerminalKeys {
    pending: VecDeque<u8>,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeySource for TerminalKeys {
    fn next_key(&mut self) -> Option<u8> {
        loop {
            if let Some(key) = self.pending.pop_front() {
                return Some(key);
            }

            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => return None,
                Err(err) => {
                    warn!("Polling terminal input failed: {}", err);
                    return None;
                }
            }

            match event::read() {
                Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                    encode_key(&key, &mut self.pending);
                }
                Ok(_) => {}
                Err(err) => {
                    warn!("Reading terminal input failed: {}", err);
                    return None;
                }
            }
        }
    }
}

/// Append the raw byte sequence for `key` to `out`
///
/// Keys with no single-byte or CSI form (function keys, media keys, ...) are
/// dropped.
pub fn encode_key(key: &KeyEvent, out: &mut VecDeque<u8>) {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if c.is_ascii_alphabetic() {
                out.push_back(c.to_ascii_lowercase() as u8 & 0x1f);
            }
        }
        KeyCode::Char(c) if c.is_ascii() => out.push_back(c as u8),
        KeyCode::Up => out.extend([KEY_ESC, b'[', b'A']),
        KeyCode::Down => out.extend([KEY_ESC, b'[', b'B']),
        KeyCode::Right => out.extend([KEY_ESC, b'[', b'C']),
        KeyCode::Left => out.extend([KEY_ESC, b'[', b'D']),
        KeyCode::Esc => out.push_back(KEY_ESC),
        KeyCode::Enter => out.push_back(b'\r'),
        KeyCode::Tab => out.push_back(b'\t'),
        KeyCode::Backspace => out.push_back(0x7f),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::KEY_INTERRUPT;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct SharedSink(Rc<RefCell<Vec<u8>>>);

    impl DisplaySink for SharedSink {
        fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
            self.0.borrow_mut().extend_from_slice(frame);
            Ok(())
        }
    }

    struct BrokenSink;

    impl DisplaySink for BrokenSink {
        fn write_frame(&mut self, _frame: &[u8]) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    fn encoded(code: KeyCode, modifiers: KeyModifiers) -> Vec<u8> {
        let mut out = VecDeque::new();
        encode_key(&KeyEvent::new(code, modifiers), &mut out);
        out.into_iter().collect()
    }

    #[test]
    fn test_encode_printable() {
        assert_eq!(encoded(KeyCode::Char('w'), KeyModifiers::NONE), b"w");
        assert_eq!(encoded(KeyCode::Char('S'), KeyModifiers::SHIFT), b"S");
    }

    #[test]
    fn test_encode_arrows() {
        assert_eq!(encoded(KeyCode::Up, KeyModifiers::NONE), b"\x1b[A");
        assert_eq!(encoded(KeyCode::Down, KeyModifiers::NONE), b"\x1b[B");
        assert_eq!(encoded(KeyCode::Left, KeyModifiers::NONE), b"\x1b[D");
    }

    #[test]
    fn test_encode_control_keys() {
        assert_eq!(
            encoded(KeyCode::Char('c'), KeyModifiers::CONTROL),
            vec![KEY_INTERRUPT]
        );
        assert_eq!(encoded(KeyCode::Esc, KeyModifiers::NONE), vec![KEY_ESC]);
    }

    #[test]
    fn test_encode_drops_unsupported() {
        assert!(encoded(KeyCode::F(5), KeyModifiers::NONE).is_empty());
        assert!(encoded(KeyCode::Char('é'), KeyModifiers::NONE).is_empty());
    }

    #[test]
    fn test_session_setup_and_restore_go_through_sink() {
        let sink = SharedSink::default();
        let session = TerminalSession::start(sink.clone(), false).unwrap();
        assert_eq!(*sink.0.borrow(), SCREEN_SETUP);

        drop(session);

        let mut expected = SCREEN_SETUP.to_vec();
        expected.extend_from_slice(SCREEN_RESTORE);
        assert_eq!(*sink.0.borrow(), expected);
    }

    #[test]
    fn test_session_start_fails_when_sink_fails() {
        assert!(TerminalSession::start(BrokenSink, false).is_err());
    }

    #[test]
    fn test_vec_sink_appends() {
        let mut sink: Vec<u8> = Vec::new();
        sink.write_frame(b"ab").unwrap();
        sink.write_frame(b"cd").unwrap();
        assert_eq!(sink, b"abcd");
    }
}
