//! Registry of lines owned by motors.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::PinError;

use super::LineId;

/// Set of lines currently claimed by any motor.
///
/// A line appears at most once. Lines are only given back all at once by
/// [`release_all`](Self::release_all); motors never release individually.
#[derive(Debug, Default)]
pub struct LineRegistry {
    lines: BTreeSet<LineId>,
}

impl LineRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            lines: BTreeSet::new(),
        }
    }

    /// Claim a batch of lines.
    ///
    /// Either every line is inserted or, if any of them is already owned,
    /// none is.
    ///
    /// # Errors
    ///
    /// Returns [`PinError::PinConflict`] naming the first line already in use.
    pub fn claim(&mut self, ids: &[LineId]) -> Result<(), PinError> {
        if let Some(&taken) = ids.iter().find(|&id| self.lines.contains(id)) {
            return Err(PinError::PinConflict(taken));
        }
        self.lines.extend(ids.iter().copied());
        debug!(lines = ?ids, total = self.lines.len(), "claimed lines");
        Ok(())
    }

    /// Give back a batch claimed by a construction that did not complete.
    pub(crate) fn release(&mut self, ids: &[LineId]) {
        for id in ids {
            self.lines.remove(id);
        }
    }

    /// Clear every claim.
    pub fn release_all(&mut self) {
        self.lines.clear();
    }

    /// Check if a line is claimed.
    pub fn contains(&self, id: LineId) -> bool {
        self.lines.contains(&id)
    }

    /// Get the number of claimed lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if no line is claimed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate claimed lines in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = LineId> + '_ {
        self.lines.iter().copied()
    }
}
