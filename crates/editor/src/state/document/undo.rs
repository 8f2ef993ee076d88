//! Undo/redo functionality

use history::{BoxedCommand, Command, HistoryLimits};

use super::{Document, DocumentState};

impl DocumentState {
    /// Execute a command and record it in the history
    pub fn apply(&mut self, cmd: impl Command<Document> + 'static) {
        self.apply_boxed(Box::new(cmd));
    }

    /// Boxed form of [`apply`](Self::apply)
    pub fn apply_boxed(&mut self, cmd: BoxedCommand<Document>) {
        self.history.add(cmd, &mut self.document, true);
        self.collect_events();
    }

    /// Record a command whose effect is already present in the document
    pub fn record(&mut self, cmd: BoxedCommand<Document>) {
        self.history.add(cmd, &mut self.document, false);
        self.collect_events();
    }

    /// Swap the next undo command for `cmd` without running either
    pub fn replace_last(&mut self, cmd: BoxedCommand<Document>) -> bool {
        let replaced = self.history.set_next_undo_command(cmd);
        self.collect_events();
        replaced
    }

    /// Undo last change
    pub fn undo(&mut self) -> bool {
        let done = self.history.undo(&mut self.document);
        self.collect_events();
        done
    }

    /// Redo last undone change
    pub fn redo(&mut self) -> bool {
        let done = self.history.redo(&mut self.document);
        self.collect_events();
        done
    }

    /// Undo `n + 1` changes, returns how many were undone
    pub fn undo_up_to(&mut self, n: usize) -> usize {
        let steps = self.history.undo_up_to(n, &mut self.document);
        self.collect_events();
        steps
    }

    /// Redo `n + 1` changes, returns how many were redone
    pub fn redo_up_to(&mut self, n: usize) -> usize {
        let steps = self.history.redo_up_to(n, &mut self.document);
        self.collect_events();
        steps
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Forget all undo/redo steps; the current image becomes the save point
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.collect_events();
    }

    /// The document was written out by some other means; the current state is the save point
    pub fn mark_saved(&mut self) {
        self.history.document_saved();
    }

    /// Apply new retention limits. Values out of range are ignored.
    ///
    /// Returns `true` if at least one limit changed.
    pub fn apply_limits(&mut self, limits: &HistoryLimits) -> bool {
        let min = self.history.set_min_limit(limits.min_limit);
        let max = self.history.set_max_limit(limits.max_limit);
        let size = self.history.set_size_limit(limits.size_limit);
        self.collect_events();
        min || max || size
    }

    /// Set the retention floor (see [`HistoryLimits::min_limit`])
    pub fn set_min_limit(&mut self, value: usize) -> bool {
        let applied = self.history.set_min_limit(value);
        self.collect_events();
        applied
    }

    /// Set the retention ceiling (see [`HistoryLimits::max_limit`])
    pub fn set_max_limit(&mut self, value: usize) -> bool {
        let applied = self.history.set_max_limit(value);
        self.collect_events();
        applied
    }

    /// Set the cumulative size ceiling (see [`HistoryLimits::size_limit`])
    pub fn set_size_limit(&mut self, value: usize) -> bool {
        let applied = self.history.set_size_limit(value);
        self.collect_events();
        applied
    }
}
