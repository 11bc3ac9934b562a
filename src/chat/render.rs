//! Output rendering for the chat application.
//!
//! This module provides a trait-based rendering abstraction that allows
//! for different output styles. The default implementation uses ANSI
//! escape codes for styling informational and error messages.

use std::io::{self, Stdout, Write};

/// ANSI escape code for dim text (used for informational messages).
const ANSI_DIM: &str = "\x1b[2m";

/// ANSI escape code to reset all styling.
const ANSI_RESET: &str = "\x1b[0m";

/// ANSI escape code for red text (used for errors).
const ANSI_RED: &str = "\x1b[31m";

/// ANSI escape code for yellow text (used for interruptions).
const ANSI_YELLOW: &str = "\x1b[33m";

/// Trait for rendering chat output.
///
/// This abstraction allows for different rendering strategies:
/// - Plain text with ANSI styling
/// - Plain text without styling (for piping/redirecting)
/// - TUI or web rendering
pub trait Renderer: Send {
    /// Print an assistant reply.
    fn print_reply(&mut self, text: &str);

    /// Print an error message.
    fn print_error(&mut self, error: &str);

    /// Print an informational message.
    fn print_info(&mut self, info: &str);

    /// Called when an in-flight request is interrupted by the user.
    fn print_interrupted(&mut self);
}

/// Plain text renderer with optional ANSI styling.
///
/// This renderer outputs text directly to stdout with optional
/// ANSI escape codes for styling errors and informational messages.
pub struct PlainTextRenderer {
    stdout: Stdout,
    use_color: bool,
}

impl PlainTextRenderer {
    /// Creates a new renderer with color enabled.
    pub fn new() -> Self {
        Self::with_color(true)
    }

    /// Creates a new renderer with the given color setting.
    pub fn with_color(use_color: bool) -> Self {
        Self {
            stdout: io::stdout(),
            use_color,
        }
    }

    fn write_styled(&mut self, style: &str, text: &str) {
        let mut handle = self.stdout.lock();
        if self.use_color {
            let _ = write!(handle, "{style}{text}{ANSI_RESET}");
        } else {
            let _ = write!(handle, "{text}");
        }
        let _ = writeln!(handle);
        let _ = handle.flush();
    }
}

impl Default for PlainTextRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for PlainTextRenderer {
    fn print_reply(&mut self, text: &str) {
        let mut handle = self.stdout.lock();
        let _ = writeln!(handle, "{text}");
        let _ = writeln!(handle);
        let _ = handle.flush();
    }

    fn print_error(&mut self, error: &str) {
        self.write_styled(ANSI_RED, &format!("Error: {error}"));
    }

    fn print_info(&mut self, info: &str) {
        self.write_styled(ANSI_DIM, info);
    }

    fn print_interrupted(&mut self) {
        self.write_styled(ANSI_YELLOW, "[interrupted]");
    }
}
