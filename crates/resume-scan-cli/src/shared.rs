use std::io::{self, IsTerminal, Write};

/// A progress reporter that prints "Rendering page N/M..." to stderr,
/// but only when stderr is connected to a TTY (terminal).
pub struct ProgressReporter {
    is_tty: bool,
    active: bool,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            is_tty: io::stderr().is_terminal(),
            active: false,
        }
    }

    /// Report progress for page `current` (1-indexed) of `total`.
    pub fn report(&mut self, current: usize, total: usize) {
        if self.is_tty {
            eprint!("\rRendering page {current}/{total}...");
            let _ = io::stderr().flush();
            self.active = true;
        }
    }

    /// Clear the progress line (if one was drawn).
    pub fn finish(&mut self) {
        if self.active {
            // Clear the line with carriage return and spaces
            eprint!("\r{}\r", " ".repeat(40));
            let _ = io::stderr().flush();
            self.active = false;
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}
