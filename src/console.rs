//! Output capability shared by every demonstration.
//!
//! Parts, shapes and skins never call `println!` directly; they print through
//! a `Console` so tests can swap stdout for a recorder.

use colored::Colorize;
use std::cell::RefCell;

pub trait Console {
    fn print(&self, line: &str);

    /// Prints a section divider between two scenarios.
    fn separator(&self, text: &str) {
        self.print(text);
    }
}

/// Writes each line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print(&self, line: &str) {
        println!("{line}");
    }

    fn separator(&self, text: &str) {
        println!("{}", text.cyan());
    }
}

/// Keeps every printed line in memory.
#[derive(Debug, Default)]
pub struct RecordingConsole {
    lines: RefCell<Vec<String>>,
}

impl RecordingConsole {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.lines.borrow_mut().clear();
    }
}

impl Console for RecordingConsole {
    fn print(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_console_keeps_order() {
        let console = RecordingConsole::new();
        assert!(console.is_empty());

        console.print("first");
        console.separator("---");
        console.print("second");

        assert_eq!(console.lines(), vec!["first", "---", "second"]);

        console.clear();
        assert!(console.is_empty());
    }

    #[test]
    fn works_as_trait_object() {
        let recorder = RecordingConsole::new();
        let console: &dyn Console = &recorder;
        console.print("via dyn");
        assert_eq!(recorder.lines(), vec!["via dyn"]);
    }
}
