//! Undo/redo command engine.
//!
//! A [`CommandHistory`] owns two bounded stacks of reversible [`Command`]s, trims them
//! according to [`HistoryLimits`] and tracks how far the document has moved away from
//! its last saved state.

pub mod command;
pub mod events;
pub mod history;
pub mod limits;
pub mod macro_command;
pub mod position;
pub mod retention;

#[cfg(test)]
mod test_util;

pub use command::{BoxedCommand, Command};
pub use events::HistoryEvent;
pub use history::CommandHistory;
pub use limits::HistoryLimits;
pub use macro_command::MacroCommand;
pub use position::RestoredPosition;
