//! Line writer that routes formatted tracing output to the browser console.
//!
//! `tracing-subscriber`'s fmt layer writes each event through a fresh writer
//! obtained from a [`MakeWriter`]. [`ConsoleMakeWriter`] hands out a
//! [`ConsoleWriter`] tagged with the event's level; the writer buffers the
//! formatted line and emits it to the matching `console` method when flushed
//! or dropped, so an `ERROR` event shows up as a console error and can be
//! filtered in the devtools.
//!
//! On non-wasm targets (tests, headless runs) lines go to stderr instead.

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// [`MakeWriter`] producing level-aware console writers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on flush or drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    #[must_use]
    pub const fn new(level: Level) -> Self {
        Self {
            level,
            buffer: Vec::new(),
        }
    }

    fn emit(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        write_line(self.level, line.trim_end());
        self.buffer.clear();
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    use web_sys::console;

    let value = wasm_bindgen::JsValue::from_str(line);
    if level == Level::ERROR {
        console::error_1(&value);
    } else if level == Level::WARN {
        console::warn_1(&value);
    } else if level == Level::INFO {
        console::info_1(&value);
    } else {
        console::debug_1(&value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{line}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_writer_for_keeps_event_level() {
        let make = ConsoleMakeWriter;
        let writer = make.make_writer();
        assert_eq!(writer.level, Level::INFO);
    }

    #[test]
    fn test_flush_clears_buffer() {
        let mut writer = ConsoleWriter::new(Level::DEBUG);
        writer.write_all(b"catalog indexed record_count=3\n").unwrap();
        assert!(!writer.buffer.is_empty());
        writer.flush().unwrap();
        assert!(writer.buffer.is_empty());
    }
}
