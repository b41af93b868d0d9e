//! Return-state stack

use super::state::ReturnState;

/// States to resume once a nested construct completes or is abandoned.
#[derive(Debug, Clone, Default)]
pub struct ReturnStack {
    states: Vec<ReturnState>,
}

impl ReturnStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: ReturnState) {
        self.states.push(state);
    }

    /// Pop the top state. An empty stack is an anomaly, not an error: it yields `Data`.
    pub fn pop(&mut self) -> ReturnState {
        self.states.pop().unwrap_or_else(|| {
            tracing::warn!("popping an empty return-state stack, resuming in Data");
            ReturnState::Data
        })
    }

    pub fn top(&self) -> Option<ReturnState> {
        self.states.last().copied()
    }

    /// Whether the construct being scanned sits inside a table header or cell.
    pub fn in_table_cell(&self) -> bool {
        self.top().is_some_and(ReturnState::is_table)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_in_reverse_push_order() {
        let mut stack = ReturnStack::new();
        stack.push(ReturnState::Data);
        stack.push(ReturnState::TableCellData);
        assert!(stack.in_table_cell());
        assert_eq!(stack.pop(), ReturnState::TableCellData);
        assert_eq!(stack.pop(), ReturnState::Data);
        assert!(stack.is_empty());
    }

    #[test]
    fn empty_pop_falls_back_to_data() {
        let mut stack = ReturnStack::new();
        assert_eq!(stack.pop(), ReturnState::Data);
        assert!(!stack.in_table_cell());
    }
}
