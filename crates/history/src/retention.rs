//! Trimming of a command stack to the configured [`HistoryLimits`].

use std::collections::VecDeque;

use crate::command::BoxedCommand;
use crate::limits::HistoryLimits;

/// Index of the first entry that must be evicted from a stack whose entries have the given
/// sizes (most recent first), or `None` if everything fits.
///
/// An entry's size is added to the running total before the entry is checked, and the entry
/// is evicted once that total is strictly greater than `size_limit`. The first `min_limit`
/// entries are never evicted.
pub fn first_evicted<I>(sizes: I, limits: &HistoryLimits) -> Option<usize>
where
    I: IntoIterator<Item = usize>,
{
    let mut size_so_far = 0usize;
    for (i, size) in sizes.into_iter().enumerate() {
        if size_so_far <= limits.size_limit {
            size_so_far = size_so_far.saturating_add(size);
        }
        if i < limits.min_limit {
            continue;
        }
        if i >= limits.max_limit || size_so_far > limits.size_limit {
            return Some(i);
        }
    }
    None
}

/// Evict entries from the back of `stack` (front = most recent) until it satisfies `limits`.
///
/// Once an entry past the floor is evicted every older entry goes with it: the running size
/// only grows and the position only increases. Returns the number of evicted commands.
pub fn trim<T>(stack: &mut VecDeque<BoxedCommand<T>>, limits: &HistoryLimits) -> usize {
    if stack.len() <= limits.min_limit {
        return 0;
    }
    match first_evicted(stack.iter().map(|c| c.size()), limits) {
        Some(index) => {
            let evicted = stack.len() - index;
            for cmd in stack.drain(index..) {
                tracing::debug!("Evicting '{}' ({} bytes) from history", cmd.name(), cmd.size());
            }
            evicted
        }
        None => 0,
    }
}
