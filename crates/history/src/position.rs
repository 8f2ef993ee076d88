//! Distance, in undo steps, between the current document and its last saved state.

/// Tracks where the last save point lies relative to the current position in the history.
///
/// * `Some(0)`: the document matches the last save.
/// * `Some(n)` with `n < 0`: the save point is `-n` undo steps back.
/// * `Some(n)` with `n > 0`: the save point is `n` redo steps forward.
/// * `None`: the save point can no longer be reached through the stacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RestoredPosition(Option<isize>);

impl Default for RestoredPosition {
    fn default() -> Self {
        Self::saved()
    }
}

impl RestoredPosition {
    /// Position right after a save
    pub fn saved() -> Self {
        Self(Some(0))
    }

    /// Position that cannot be correlated with the save point
    pub fn unknown() -> Self {
        Self(None)
    }

    pub fn get(&self) -> Option<isize> {
        self.0
    }

    pub fn is_saved(&self) -> bool {
        self.0 == Some(0)
    }

    pub fn is_unknown(&self) -> bool {
        self.0.is_none()
    }

    /// The document was saved
    pub fn reset(&mut self) {
        self.0 = Some(0);
    }

    /// A new command was pushed onto the undo stack.
    ///
    /// If the save point was in the redo stack, that branch is gone now.
    pub fn on_add(&mut self) {
        self.0 = match self.0 {
            Some(n) if n > 0 => None,
            Some(n) => n.checked_sub(1),
            None => None,
        };
    }

    /// One step was undone. Returns `true` if that reached the save point.
    pub fn on_undo(&mut self) -> bool {
        self.0 = self.0.and_then(|n| n.checked_add(1));
        self.is_saved()
    }

    /// One step was redone. Returns `true` if that reached the save point.
    pub fn on_redo(&mut self) -> bool {
        self.0 = self.0.and_then(|n| n.checked_sub(1));
        self.is_saved()
    }

    /// Forget the save point if the stack needed to reach it has become too short.
    ///
    /// Returns `true` if the position was invalidated.
    pub fn validate(&mut self, undo_len: usize, redo_len: usize) -> bool {
        let Some(n) = self.0 else {
            return false;
        };
        let reachable = if n > 0 {
            n.unsigned_abs() <= redo_len
        } else {
            n.unsigned_abs() <= undo_len
        };
        if !reachable {
            self.0 = None;
        }
        !reachable
    }
}
