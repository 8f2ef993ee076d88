//! The reversible unit of work driven by [`CommandHistory`](crate::CommandHistory).

/// A reversible edit applied to a target document of type `T`.
///
/// The history guarantees that calls alternate: `execute`, `unexecute`, `execute`, ...
/// `unexecute` must restore the target exactly to the state it had before the matching
/// `execute`, so any data needed for that has to be captured at construction or on the
/// first `execute`.
///
/// Neither operation reports errors. Calling `unexecute` without a prior `execute` is a
/// programming error; implementations are expected to `debug_assert!` against it.
pub trait Command<T> {
    /// User-facing label, e.g. shown as "Undo: <name>".
    fn name(&self) -> &str;

    /// Approximate number of bytes held by this command. Only used for trimming.
    fn size(&self) -> usize {
        0
    }

    /// Apply the forward edit to `target`.
    fn execute(&mut self, target: &mut T);

    /// Revert the edit made by the most recent [`execute`](Command::execute).
    fn unexecute(&mut self, target: &mut T);
}

/// Owning handle stored in the undo/redo stacks.
pub type BoxedCommand<T> = Box<dyn Command<T>>;

impl<T> std::fmt::Debug for dyn Command<T> + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name())
            .field("size", &self.size())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{Journal, Step};

    #[test]
    fn test_default_size_is_zero() {
        struct Noop;
        impl Command<Journal> for Noop {
            fn name(&self) -> &str {
                "Noop"
            }
            fn execute(&mut self, _: &mut Journal) {}
            fn unexecute(&mut self, _: &mut Journal) {}
        }
        assert_eq!(Noop.size(), 0);
    }

    #[test]
    fn test_boxed_command_debug() {
        let cmd: BoxedCommand<Journal> = Box::new(Step::new("Brush", 12));
        let text = format!("{:?}", cmd);
        assert!(text.contains("Brush"));
        assert!(text.contains("12"));
    }
}
