//! Serial trace sink
//!
//! The simulation modules report everything they do as human-readable
//! trace text. On the original hardware this went over a UART; here the
//! sink is a trait so the demo binary can write to stdout while tests
//! capture lines in memory.

use std::io::Write;

/// Append-only text output for simulation traces.
///
/// Writes are assumed to succeed; no status is reported to callers.
pub trait SerialSink {
    /// Write raw text.
    fn write(&mut self, s: &str);

    /// Write an unsigned integer in decimal.
    fn write_decimal(&mut self, v: u32) {
        self.write(&v.to_string());
    }

    /// Write a byte as hexadecimal (`0xNN`).
    fn write_hex(&mut self, v: u8) {
        self.write(&format!("0x{v:02X}"));
    }

    /// Write a float with a fixed number of digits after the decimal
    /// point. The simulation core uses 5 digits throughout.
    fn write_float(&mut self, v: f64, digits: usize) {
        self.write(&format!("{v:.digits$}"));
    }
}

/// Serial sink backed by stdout.
#[derive(Debug, Default)]
pub struct ConsoleSerial;

impl SerialSink for ConsoleSerial {
    fn write(&mut self, s: &str) {
        let mut out = std::io::stdout().lock();
        // Trace output is best-effort; a closed stdout is not our problem.
        let _ = out.write_all(s.as_bytes());
        let _ = out.flush();
    }
}

/// Serial sink that records complete lines in memory, for tests.
#[derive(Debug, Default)]
pub struct MemorySerial {
    buffer: String,
    lines: Vec<String>,
}

impl MemorySerial {
    pub fn new() -> Self {
        Self::default()
    }

    /// Complete lines written so far, in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// True if any completed line contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl SerialSink for MemorySerial {
    fn write(&mut self, s: &str) {
        self.buffer.push_str(s);
        while let Some(pos) = self.buffer.find('\n') {
            let line: String = self.buffer.drain(..=pos).collect();
            self.lines.push(line.trim_end_matches('\n').to_string());
        }
    }
}
