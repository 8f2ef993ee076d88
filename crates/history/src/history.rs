//! Two-stack undo/redo history.

use std::collections::VecDeque;

use crate::command::{BoxedCommand, Command};
use crate::events::HistoryEvent;
use crate::limits::HistoryLimits;
use crate::position::RestoredPosition;
use crate::retention;

/// Undo and redo stacks of commands editing a target of type `T`.
///
/// Both stacks hold the most recent command at the front. Every mutating call runs to
/// completion, trims both stacks to the configured [`HistoryLimits`] and queues
/// [`HistoryEvent`]s that the owner collects with [`take_events`](Self::take_events).
///
/// The target is passed to each call instead of being held by the commands, so the history
/// never aliases the document it edits.
pub struct CommandHistory<T> {
    /// Commands that can be undone, most recent first
    undo_stack: VecDeque<BoxedCommand<T>>,
    /// Commands that can be redone, most recent first
    redo_stack: VecDeque<BoxedCommand<T>>,
    limits: HistoryLimits,
    restored: RestoredPosition,
    events: Vec<HistoryEvent>,
    /// Monotonically increasing counter, bumped on every structural change
    version: u64,
}

impl<T> Default for CommandHistory<T> {
    fn default() -> Self {
        Self::new(HistoryLimits::default())
    }
}

impl<T> std::fmt::Debug for CommandHistory<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandHistory")
            .field("undo", &self.undo_names(usize::MAX))
            .field("redo", &self.redo_names(usize::MAX))
            .field("limits", &self.limits)
            .field("restored", &self.restored)
            .finish()
    }
}

impl<T> CommandHistory<T> {
    /// Create an empty history. The document is considered saved.
    pub fn new(limits: HistoryLimits) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: VecDeque::new(),
            limits,
            restored: RestoredPosition::saved(),
            events: Vec::new(),
            version: 0,
        }
    }

    // ── Stack operations ──────────────────────────────────────

    /// Record `cmd` as the next undo step, executing it first if `execute_now` is set.
    ///
    /// Anything that could be redone is discarded.
    pub fn add(&mut self, mut cmd: BoxedCommand<T>, target: &mut T, execute_now: bool) {
        if execute_now {
            cmd.execute(target);
        }
        tracing::trace!("History: add '{}'", cmd.name());
        self.undo_stack.push_front(cmd);
        self.redo_stack.clear();
        self.restored.on_add();
        self.trim();
        self.changed();
    }

    /// Convenience wrapper around [`add`](Self::add) for unboxed commands
    pub fn add_command(&mut self, cmd: impl Command<T> + 'static, target: &mut T, execute_now: bool) {
        self.add(Box::new(cmd), target, execute_now);
    }

    /// Revert the most recent command. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self, target: &mut T) -> bool {
        let Some(mut cmd) = self.undo_stack.pop_front() else {
            return false;
        };
        tracing::trace!("History: undo '{}'", cmd.name());
        cmd.unexecute(target);
        self.redo_stack.push_front(cmd);
        if self.restored.on_undo() {
            self.events.push(HistoryEvent::SavePointReached);
        }
        self.trim();
        self.changed();
        true
    }

    /// Re-apply the most recently undone command. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self, target: &mut T) -> bool {
        let Some(mut cmd) = self.redo_stack.pop_front() else {
            return false;
        };
        tracing::trace!("History: redo '{}'", cmd.name());
        cmd.execute(target);
        self.undo_stack.push_front(cmd);
        if self.restored.on_redo() {
            self.events.push(HistoryEvent::SavePointReached);
        }
        self.trim();
        self.changed();
        true
    }

    /// Undo `n + 1` steps, or fewer if the undo stack runs out. Returns the number of steps.
    ///
    /// Each step completes, notifications included, before the next one starts.
    pub fn undo_up_to(&mut self, n: usize, target: &mut T) -> usize {
        let mut steps = 0;
        while steps <= n && self.undo(target) {
            steps += 1;
        }
        steps
    }

    /// Redo `n + 1` steps, or fewer if the redo stack runs out. Returns the number of steps.
    pub fn redo_up_to(&mut self, n: usize, target: &mut T) -> usize {
        let mut steps = 0;
        while steps <= n && self.redo(target) {
            steps += 1;
        }
        steps
    }

    /// Replace the next undo command with `cmd` without executing or reverting either.
    ///
    /// Used to swap a placeholder, pushed to reserve the undo slot, for the full command.
    /// Does nothing (and drops `cmd`) if the undo stack is empty.
    pub fn set_next_undo_command(&mut self, cmd: BoxedCommand<T>) -> bool {
        let Some(front) = self.undo_stack.front_mut() else {
            return false;
        };
        tracing::trace!("History: replace '{}' with '{}'", front.name(), cmd.name());
        *front = cmd;
        self.trim();
        self.changed();
        true
    }

    /// Drop every command in both stacks. The current document becomes the save point.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.restored.reset();
        self.changed();
    }

    /// The document has just been saved
    pub fn document_saved(&mut self) {
        self.restored.reset();
    }

    // ── Queries ───────────────────────────────────────────────

    /// The command [`undo`](Self::undo) would revert
    pub fn next_undo_command(&self) -> Option<&dyn Command<T>> {
        self.undo_stack.front().map(|c| c.as_ref())
    }

    /// The command [`redo`](Self::redo) would re-apply
    pub fn next_redo_command(&self) -> Option<&dyn Command<T>> {
        self.redo_stack.front().map(|c| c.as_ref())
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// Names of up to `limit` pending undo steps, most recent first
    pub fn undo_names(&self, limit: usize) -> Vec<&str> {
        self.undo_stack.iter().take(limit).map(|c| c.name()).collect()
    }

    /// Names of up to `limit` pending redo steps, most recent first
    pub fn redo_names(&self, limit: usize) -> Vec<&str> {
        self.redo_stack.iter().take(limit).map(|c| c.name()).collect()
    }

    /// Menu label such as "Undo: Fill", or `None` if there is nothing to undo
    pub fn undo_label(&self) -> Option<String> {
        self.next_undo_command().map(|c| format!("Undo: {}", c.name()))
    }

    /// Menu label such as "Redo: Fill", or `None` if there is nothing to redo
    pub fn redo_label(&self) -> Option<String> {
        self.next_redo_command().map(|c| format!("Redo: {}", c.name()))
    }

    /// Cumulative size of every command held by both stacks
    pub fn total_size(&self) -> usize {
        self.undo_stack
            .iter()
            .chain(self.redo_stack.iter())
            .fold(0usize, |total, c| total.saturating_add(c.size()))
    }

    /// Steps between the current state and the last save, see [`RestoredPosition`]
    pub fn restored_position(&self) -> Option<isize> {
        self.restored.get()
    }

    /// Whether the document differs from its last saved state
    pub fn is_modified(&self) -> bool {
        !self.restored.is_saved()
    }

    /// Current version (increments on every structural change)
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Drain the notifications queued since the last call
    pub fn take_events(&mut self) -> Vec<HistoryEvent> {
        std::mem::take(&mut self.events)
    }

    // ── Limits ────────────────────────────────────────────────

    pub fn limits(&self) -> &HistoryLimits {
        &self.limits
    }

    /// Change the number of entries always kept. Returns `false` if the value was rejected.
    pub fn set_min_limit(&mut self, value: usize) -> bool {
        if !HistoryLimits::is_valid_count(value) {
            tracing::warn!("Rejected undo min limit {value}");
            return false;
        }
        self.update_limits(HistoryLimits {
            min_limit: value,
            ..self.limits
        })
    }

    /// Change the maximum number of entries. Returns `false` if the value was rejected.
    pub fn set_max_limit(&mut self, value: usize) -> bool {
        if !HistoryLimits::is_valid_count(value) {
            tracing::warn!("Rejected undo max limit {value}");
            return false;
        }
        self.update_limits(HistoryLimits {
            max_limit: value,
            ..self.limits
        })
    }

    /// Change the cumulative size limit in bytes. Returns `false` if the value was rejected.
    pub fn set_size_limit(&mut self, value: usize) -> bool {
        if !HistoryLimits::is_valid_size(value) {
            tracing::warn!("Rejected undo size limit {value}");
            return false;
        }
        self.update_limits(HistoryLimits {
            size_limit: value,
            ..self.limits
        })
    }

    fn update_limits(&mut self, limits: HistoryLimits) -> bool {
        if limits == self.limits {
            return false;
        }
        tracing::debug!("History limits changed: {:?} -> {:?}", self.limits, limits);
        self.limits = limits;
        if self.trim() > 0 {
            self.changed();
        }
        true
    }

    // ── Internals ─────────────────────────────────────────────

    /// Apply the retention policy to both stacks, then drop the save point if it was evicted.
    fn trim(&mut self) -> usize {
        let evicted = retention::trim(&mut self.undo_stack, &self.limits)
            + retention::trim(&mut self.redo_stack, &self.limits);
        if self
            .restored
            .validate(self.undo_stack.len(), self.redo_stack.len())
        {
            tracing::debug!("Save point evicted from history");
        }
        evicted
    }

    fn changed(&mut self) {
        self.version += 1;
        self.events.push(HistoryEvent::Changed);
    }
}
