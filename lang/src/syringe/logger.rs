use std::cell::RefCell;
use std::rc::Rc;

/// Destination for `log` lines and for `die` messages.
///
/// Choosing stdout, stderr or a file is up to the host; the toolkit only
/// needs somewhere to print one line at a time.
pub trait Logger {
    fn print(&self, line: &str);
}

/// Writes each line to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrLogger;

impl Logger for StderrLogger {
    fn print(&self, line: &str) {
        eprintln!("{line}");
    }
}

/// Collects lines in memory. Clones share the same buffer, so a host can keep
/// one handle and give the other to the toolkit.
#[derive(Debug, Clone, Default)]
pub struct MemoryLogger {
    lines: Rc<RefCell<Vec<String>>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.borrow().is_empty()
    }
}

impl Logger for MemoryLogger {
    fn print(&self, line: &str) {
        self.lines.borrow_mut().push(line.to_string());
    }
}
