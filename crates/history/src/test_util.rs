//! Recording commands shared by the unit tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::Command;

/// Target that records every call made by commands, in order.
#[derive(Debug, Default)]
pub struct Journal {
    pub calls: Vec<String>,
    /// Simulated document value, incremented by execute and decremented by unexecute.
    pub value: i64,
}

/// A leaf command that logs `"<name>.execute"` / `"<name>.unexecute"` into the journal.
pub struct Step {
    name: String,
    size: usize,
    executed: bool,
    dropped: Option<Rc<Cell<bool>>>,
}

impl Step {
    pub fn new(name: &str, size: usize) -> Self {
        Self {
            name: name.to_string(),
            size,
            executed: false,
            dropped: None,
        }
    }

    /// Marks the step as already applied, for commands handed to the history with
    /// `execute_now = false`.
    pub fn applied(mut self) -> Self {
        self.executed = true;
        self
    }

    /// Same as `new`, but flips the returned flag when the command is destroyed.
    pub fn tracked(name: &str, size: usize) -> (Self, Rc<Cell<bool>>) {
        let flag = Rc::new(Cell::new(false));
        let mut step = Self::new(name, size);
        step.dropped = Some(flag.clone());
        (step, flag)
    }
}

impl Command<Journal> for Step {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> usize {
        self.size
    }

    fn execute(&mut self, target: &mut Journal) {
        debug_assert!(!self.executed, "{} executed twice", self.name);
        self.executed = true;
        target.value += 1;
        target.calls.push(format!("{}.execute", self.name));
    }

    fn unexecute(&mut self, target: &mut Journal) {
        debug_assert!(self.executed, "{} unexecuted before execute", self.name);
        self.executed = false;
        target.value -= 1;
        target.calls.push(format!("{}.unexecute", self.name));
    }
}

impl Drop for Step {
    fn drop(&mut self) {
        if let Some(flag) = &self.dropped {
            flag.set(true);
        }
    }
}
