use crate::frontier::{FrontierError, FrontierStore, Strategy};

/// "Which entry does `strategy` expand next?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    strategy: Strategy,
}

impl Question {
    pub fn new(strategy: Strategy) -> Self {
        Question { strategy }
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn prompt(&self) -> String {
        format!(
            "Which node of the fringe will {} expand next?",
            self.strategy
        )
    }

    /// Every position accepted as a correct answer.
    ///
    /// Score based questions can be ambiguous; all entries tied for the lowest score
    /// are accepted.
    pub fn answers(&self, store: &FrontierStore) -> Result<Vec<usize>, FrontierError> {
        store.candidate_indices(self.strategy)
    }

    pub fn is_correct(&self, store: &FrontierStore, answer: usize) -> Result<bool, FrontierError> {
        Ok(self.answers(store)?.contains(&answer))
    }
}
