/*!
Console output sink for the PRN / PRA instructions.

Each emission is one line of text. The bus owns a boxed `Console`, so the
binary can stream to stdout while tests and embedders capture output and
inspect it after the CPU stops.
*/

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

/// Destination for instruction output. Emissions arrive in execution order.
pub trait Console {
    fn emit(&mut self, line: &str);
}

/// Writes every emission to stdout followed by a newline.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn emit(&mut self, line: &str) {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        // A closed stdout is not a CPU fault; drop the line.
        let _ = writeln!(lock, "{line}");
    }
}

/// Records every emission. Clones share the same buffer, so a host can keep
/// one handle while the bus owns the other.
#[derive(Debug, Default, Clone)]
pub struct CaptureConsole {
    lines: Rc<RefCell<Vec<String>>>,
}

impl CaptureConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all lines emitted so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    /// All lines joined with `\n` (no trailing newline).
    pub fn transcript(&self) -> String {
        self.lines.borrow().join("\n")
    }
}

impl Console for CaptureConsole {
    fn emit(&mut self, line: &str) {
        self.lines.borrow_mut().push(line.to_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_shares_buffer_between_clones() {
        let host = CaptureConsole::new();
        let mut sink = host.clone();
        sink.emit("8");
        sink.emit("A");
        assert_eq!(host.lines(), vec!["8".to_string(), "A".to_string()]);
        assert_eq!(host.transcript(), "8\nA");
    }
}
