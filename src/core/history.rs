//! Visited-state history with undo/redo.
//!
//! Tracks the trajectory of states a machine has moved through. The current
//! state is held apart from the earlier entries, so the visited stack can
//! never be empty.

use std::mem;

/// Linear undo/redo history over visited state names.
///
/// The visited stack holds every state moved through, oldest first, topped
/// by the current state. The redo stack holds states removed by
/// [`undo`](History::undo), most recently undone last. Any forward move
/// discards the redo stack.
///
/// # Example
///
/// ```rust
/// use undoable_fsm::core::History;
///
/// let mut history = History::new("draft");
/// history.advance("review");
/// history.advance("published");
///
/// assert_eq!(history.path(), vec!["draft", "review", "published"]);
///
/// assert!(history.undo());
/// assert_eq!(history.current(), "review");
///
/// assert!(history.redo());
/// assert_eq!(history.current(), "published");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    previous: Vec<String>,
    current: String,
    undone: Vec<String>,
}

impl History {
    /// Create a history holding only `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            previous: Vec::new(),
            current: initial.into(),
            undone: Vec::new(),
        }
    }

    /// Current state, the top of the visited stack.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Move forward to `state`.
    ///
    /// The redo stack is cleared: once the machine moves forward, states
    /// that were undone can no longer be restored.
    pub fn advance(&mut self, state: impl Into<String>) {
        let previous = mem::replace(&mut self.current, state.into());
        self.previous.push(previous);
        self.undone.clear();
    }

    /// Step back to the previous state.
    ///
    /// Returns `false` without changing anything when only one state has
    /// been visited.
    pub fn undo(&mut self) -> bool {
        let Some(previous) = self.previous.pop() else {
            return false;
        };
        let undone = mem::replace(&mut self.current, previous);
        self.undone.push(undone);
        true
    }

    /// Restore the most recently undone state.
    ///
    /// Returns `false` without changing anything when nothing was undone.
    pub fn redo(&mut self) -> bool {
        let Some(restored) = self.undone.pop() else {
            return false;
        };
        let previous = mem::replace(&mut self.current, restored);
        self.previous.push(previous);
        true
    }

    /// Replace the visited stack with `[initial]`, keeping the redo stack.
    pub fn rewind(&mut self, initial: impl Into<String>) {
        self.previous.clear();
        self.current = initial.into();
    }

    /// Replace the visited stack with `[initial]` and drop the redo stack.
    pub fn clear(&mut self, initial: impl Into<String>) {
        self.rewind(initial);
        self.undone.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.previous.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of entries on the visited stack, current state included.
    pub fn depth(&self) -> usize {
        self.previous.len() + 1
    }

    /// Visited states, oldest first, ending with the current state.
    pub fn path(&self) -> Vec<&str> {
        self.previous
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(self.current.as_str()))
            .collect()
    }

    /// Undone states, the next one [`redo`](History::redo) restores last.
    pub fn undone(&self) -> &[String] {
        &self.undone
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_history_holds_initial_state() {
        let history = History::new("idle");

        assert_eq!(history.current(), "idle");
        assert_eq!(history.depth(), 1);
        assert_eq!(history.path(), vec!["idle"]);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
    }

    #[test]
    fn advance_pushes_state() {
        let mut history = History::new("a");

        history.advance("b");
        history.advance("c");

        assert_eq!(history.current(), "c");
        assert_eq!(history.depth(), 3);
        assert_eq!(history.path(), vec!["a", "b", "c"]);
    }

    #[test]
    fn undo_on_single_state_is_noop() {
        let mut history = History::new("a");

        assert!(!history.undo());
        assert_eq!(history, History::new("a"));
    }

    #[test]
    fn undo_moves_state_to_redo_stack() {
        let mut history = History::new("a");
        history.advance("b");
        history.advance("c");

        assert!(history.undo());
        assert!(history.undo());

        assert_eq!(history.current(), "a");
        assert_eq!(history.undone(), ["c", "b"]);
        assert!(!history.undo());
    }

    #[test]
    fn redo_restores_in_reverse_undo_order() {
        let mut history = History::new("a");
        history.advance("b");
        history.advance("c");
        history.undo();
        history.undo();

        assert!(history.redo());
        assert_eq!(history.current(), "b");
        assert!(history.redo());
        assert_eq!(history.current(), "c");
        assert!(!history.redo());
        assert_eq!(history.path(), vec!["a", "b", "c"]);
    }

    #[test]
    fn advance_discards_redo_stack() {
        let mut history = History::new("a");
        history.advance("b");
        history.undo();

        history.advance("c");

        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.path(), vec!["a", "c"]);
    }

    #[test]
    fn rewind_keeps_redo_stack() {
        let mut history = History::new("a");
        history.advance("b");
        history.advance("c");
        history.undo();

        history.rewind("a");

        assert_eq!(history.path(), vec!["a"]);
        assert_eq!(history.undone(), ["c"]);
        assert!(history.redo());
        assert_eq!(history.path(), vec!["a", "c"]);
    }

    #[test]
    fn clear_drops_both_stacks() {
        let mut history = History::new("a");
        history.advance("b");
        history.advance("c");
        history.undo();

        history.clear("a");

        assert_eq!(history, History::new("a"));
    }
}
