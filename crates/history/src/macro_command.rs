//! Composite command applying an ordered group of commands as one undo step.

use crate::command::{BoxedCommand, Command};

/// A [`Command`] made of child commands.
///
/// Children execute in insertion order and are reverted in reverse order, so a child may
/// rely on the effects of the children added before it. The macro owns its children.
pub struct MacroCommand<T> {
    name: String,
    children: Vec<BoxedCommand<T>>,
    executed: bool,
}

impl<T> MacroCommand<T> {
    /// Create an empty macro with the given label
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            executed: false,
        }
    }

    /// Append a child. Only valid while the macro is being built.
    pub fn add_command(&mut self, cmd: BoxedCommand<T>) {
        debug_assert!(
            !self.executed,
            "command added to macro '{}' after it was executed",
            self.name
        );
        self.children.push(cmd);
    }

    /// Builder form of [`add_command`](Self::add_command)
    pub fn with(mut self, cmd: impl Command<T> + 'static) -> Self {
        self.add_command(Box::new(cmd));
        self
    }

    /// Number of children
    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Labels of the children, in insertion order
    pub fn child_names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|c| c.name())
    }
}

impl<T> Command<T> for MacroCommand<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> usize {
        self.children
            .iter()
            .fold(0usize, |total, c| total.saturating_add(c.size()))
    }

    fn execute(&mut self, target: &mut T) {
        for child in self.children.iter_mut() {
            child.execute(target);
        }
        self.executed = true;
    }

    fn unexecute(&mut self, target: &mut T) {
        for child in self.children.iter_mut().rev() {
            child.unexecute(target);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{Journal, Step};

    fn abc() -> MacroCommand<Journal> {
        MacroCommand::new("Transform Selection")
            .with(Step::new("A", 1))
            .with(Step::new("B", 2))
            .with(Step::new("C", 3))
    }

    #[test]
    fn test_execute_in_insertion_order() {
        let mut m = abc();
        let mut j = Journal::default();
        m.execute(&mut j);
        assert_eq!(j.calls, vec!["A.execute", "B.execute", "C.execute"]);
        assert_eq!(j.value, 3);
    }

    #[test]
    fn test_unexecute_in_reverse_order() {
        let mut m = abc();
        let mut j = Journal::default();
        m.execute(&mut j);
        j.calls.clear();
        m.unexecute(&mut j);
        assert_eq!(j.calls, vec!["C.unexecute", "B.unexecute", "A.unexecute"]);
        assert_eq!(j.value, 0);
    }

    #[test]
    fn test_name_is_own_label() {
        let m = abc();
        assert_eq!(m.name(), "Transform Selection");
        assert_eq!(m.child_names().collect::<Vec<_>>(), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_size_is_sum_of_children() {
        assert_eq!(abc().size(), 6);
        let empty: MacroCommand<Journal> = MacroCommand::new("Empty");
        assert_eq!(empty.size(), 0);
        assert!(empty.is_empty());
    }

    #[test]
    fn test_size_saturates() {
        let m: MacroCommand<Journal> = MacroCommand::new("Huge")
            .with(Step::new("A", usize::MAX))
            .with(Step::new("B", 10));
        assert_eq!(m.size(), usize::MAX);
    }

    #[test]
    fn test_children_dropped_with_macro() {
        let (a, a_dropped) = Step::tracked("A", 0);
        let (b, b_dropped) = Step::tracked("B", 0);
        let m: MacroCommand<Journal> = MacroCommand::new("M").with(a).with(b);
        assert_eq!(m.len(), 2);
        drop(m);
        assert!(a_dropped.get());
        assert!(b_dropped.get());
    }
}
