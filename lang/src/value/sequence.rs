use std::cell::RefCell;
use std::fmt;
use std::hash::Hasher;
use std::rc::Rc;

/// Half-open ascending integer range consumed one value at a time.
///
/// The cursor lives behind a shared handle: every clone of a `Sequence`
/// advances the same position, so a sequence can be walked once only and a
/// fresh `loop` call is needed for each pass. Nothing runs ahead of the
/// consumer, so abandoning a sequence half way costs nothing.
#[derive(Clone)]
pub struct Sequence(Rc<RefCell<Cursor>>);

#[derive(Debug)]
struct Cursor {
    current: i64,
    end: i64,
}

impl Sequence {
    /// `[from, to)`; empty when `from >= to`.
    pub fn range(from: i64, to: i64) -> Self {
        Sequence(Rc::new(RefCell::new(Cursor {
            current: from,
            end: to,
        })))
    }

    pub fn has_next(&self) -> bool {
        let cursor = self.0.borrow();
        cursor.current < cursor.end
    }

    /// Number of values not yet pulled
    pub fn remaining(&self) -> u64 {
        let cursor = self.0.borrow();
        cursor.end.saturating_sub(cursor.current).max(0) as u64
    }

    pub(crate) fn ptr_eq(&self, other: &Sequence) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn hash_ptr<H: Hasher>(&self, state: &mut H) {
        std::ptr::hash(Rc::as_ptr(&self.0), state);
    }
}

impl Iterator for Sequence {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let mut cursor = self.0.borrow_mut();
        if cursor.current >= cursor.end {
            return None;
        }
        let value = cursor.current;
        cursor.current += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cursor = self.0.borrow();
        write!(f, "Sequence({}..{})", cursor.current, cursor.end)
    }
}
