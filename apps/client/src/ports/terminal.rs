//! Terminal adapters for the UI ports.

use std::cell::RefCell;
use std::io::{self, Write};

use super::{ListRenderPort, NotifyPort};

/// A list area printed once the operation finishes.
///
/// A terminal cannot take back lines already written, so lines are held
/// until [`TerminalList::print_to`] is called.
pub struct TerminalList {
    heading: &'static str,
    lines: RefCell<Vec<String>>,
}

impl TerminalList {
    pub fn new(heading: &'static str) -> Self {
        Self {
            heading,
            lines: RefCell::new(Vec::new()),
        }
    }

    pub fn print_to(&self, out: &mut dyn Write) -> io::Result<()> {
        let lines = self.lines.borrow();
        writeln!(out, "{}", self.heading)?;
        for line in lines.iter() {
            writeln!(out, "  - {line}")?;
        }
        Ok(())
    }
}

impl ListRenderPort for TerminalList {
    fn clear(&self) {
        self.lines.borrow_mut().clear();
    }

    fn append(&self, line: String) {
        self.lines.borrow_mut().push(line);
    }
}

/// Writes notifications straight to stdout.
pub struct TerminalNotifier;

impl NotifyPort for TerminalNotifier {
    fn notify(&self, message: &str) {
        println!("[!] {message}");
    }
}
