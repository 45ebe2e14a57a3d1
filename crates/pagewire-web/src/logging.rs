//! `tracing` output routed to the browser console.
//!
//! `tracing-subscriber`'s fmt layer formats each event into one buffer and
//! writes it through a fresh writer, so a writer that forwards its buffer on
//! drop emits exactly one console call per event. ERROR maps to
//! `console.error`, WARN to `console.warn`, everything else to `console.log`.
//!
//! Timestamps are disabled: `wasm32-unknown-unknown` has no wall clock and
//! the console stamps entries itself.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use crate::SetupError;

/// Console method an event is forwarded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Log,
    Warn,
    Error,
}

impl ConsoleMethod {
    #[must_use]
    pub fn for_level(level: &Level) -> Self {
        if *level == Level::ERROR {
            Self::Error
        } else if *level == Level::WARN {
            Self::Warn
        } else {
            Self::Log
        }
    }
}

/// Buffers one formatted event and forwards it when dropped.
#[derive(Debug)]
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    #[must_use]
    pub fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buf: Vec::new(),
        }
    }

    /// The buffered text without its trailing newline, `None` if blank.
    #[must_use]
    pub fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buf);
        let line = text.trim_end_matches(['\n', '\r']);
        (!line.is_empty()).then(|| line.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.line() {
            emit(self.method, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(method: ConsoleMethod, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match method {
        ConsoleMethod::Log => web_sys::console::log_1(&value),
        ConsoleMethod::Warn => web_sys::console::warn_1(&value),
        ConsoleMethod::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_method: ConsoleMethod, line: &str) {
    eprintln!("{line}");
}

/// [`MakeWriter`] producing one [`ConsoleWriter`] per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::for_level(meta.level()))
    }
}

/// Install the console subscriber as the global default.
///
/// Returns `Ok(false)` if another subscriber was already installed; that one
/// stays in place.
pub fn install(directive: &str) -> Result<bool, SetupError> {
    let filter = EnvFilter::try_new(directive).map_err(|e| SetupError::Logging(e.to_string()))?;
    let subscriber = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .finish();
    Ok(tracing::subscriber::set_global_default(subscriber).is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::for_level(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::for_level(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::for_level(&Level::INFO), ConsoleMethod::Log);
        assert_eq!(ConsoleMethod::for_level(&Level::TRACE), ConsoleMethod::Log);
    }

    #[test]
    fn writer_strips_trailing_newline() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Log);
        writer.write_all(b" INFO pagewire: ready").unwrap();
        writer.write_all(b"\n").unwrap();
        assert_eq!(writer.line().as_deref(), Some(" INFO pagewire: ready"));
    }

    #[test]
    fn blank_writer_has_no_line() {
        let mut writer = ConsoleWriter::new(ConsoleMethod::Warn);
        assert_eq!(writer.line(), None);
        writer.write_all(b"\n").unwrap();
        assert_eq!(writer.line(), None);
    }

    #[test]
    fn bad_directive_rejected() {
        assert!(matches!(install("pagewire=loudest"), Err(SetupError::Logging(_))));
    }
}
