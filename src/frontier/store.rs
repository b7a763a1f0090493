use std::collections::VecDeque;

use crate::{
    frontier::{EntryGenerator, FrontierEntry, FrontierError, NodeLabel, Strategy},
    random::RandomSource,
};

/// An ordered search frontier.
///
/// Entries are kept in insertion order: the front is the oldest entry still present
/// and the back is the newest. That order is what breadth-first and depth-first
/// removal rely on, and it is also the tie-break for the three score-based
/// strategies.
///
/// # Invariants
/// - Entries are never mutated in place, only appended or removed.
/// - Queries and removals on an empty frontier fail with
///   [`FrontierError::EmptyStore`] rather than returning a vacuous result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontierStore {
    entries: VecDeque<FrontierEntry>,
}

impl FrontierStore {
    pub fn new() -> Self {
        FrontierStore {
            entries: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&FrontierEntry> {
        self.entries.get(index)
    }

    /// Iterates over the entries from oldest to newest.
    pub fn iter(&self) -> std::collections::vec_deque::Iter<'_, FrontierEntry> {
        self.entries.iter()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Replaces the whole frontier with `count` freshly generated entries.
    pub fn populate_random<R: RandomSource + ?Sized>(
        &mut self,
        count: usize,
        generator: &EntryGenerator,
        rng: &mut R,
    ) {
        self.entries.clear();
        self.entries.reserve(count);
        for _ in 0..count {
            self.entries.push_back(generator.random_entry(rng));
        }
        tracing::debug!("populated frontier with {count} random entries");
    }

    /// Appends an entry built from explicit values.
    ///
    /// Nothing is validated: duplicates and empty paths are accepted, the heuristic
    /// is taken as given.
    pub fn add_entry(&mut self, path: Vec<NodeLabel>, path_cost: u32, heuristic: u32) {
        self.push(FrontierEntry::new(path, path_cost, heuristic));
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        tracing::trace!(
            "adding {} (cost {}, heuristic {}) at position {}",
            entry.path_symbols(),
            entry.path_cost,
            entry.heuristic,
            self.entries.len()
        );
        self.entries.push_back(entry);
    }

    /// Positions of every entry tied for the lowest path cost, in ascending order.
    pub fn lowest_cost_indices(&self) -> Result<Vec<usize>, FrontierError> {
        self.lowest_indices_by(|entry| u64::from(entry.path_cost))
    }

    /// Positions of every entry tied for the lowest heuristic, in ascending order.
    pub fn lowest_heuristic_indices(&self) -> Result<Vec<usize>, FrontierError> {
        self.lowest_indices_by(|entry| u64::from(entry.heuristic))
    }

    /// Positions of every entry tied for the lowest combined score, in ascending
    /// order. This is the A* selection rule.
    pub fn lowest_combined_score_indices(&self) -> Result<Vec<usize>, FrontierError> {
        self.lowest_indices_by(FrontierEntry::combined_score)
    }

    fn lowest_indices_by<F>(&self, score: F) -> Result<Vec<usize>, FrontierError>
    where
        F: Fn(&FrontierEntry) -> u64,
    {
        let min_score = self
            .entries
            .iter()
            .map(&score)
            .min()
            .ok_or(FrontierError::EmptyStore)?;

        Ok(self
            .entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| (score(entry) == min_score).then_some(index))
            .collect())
    }

    /// Every position `strategy` may legitimately expand next.
    ///
    /// Breadth-first and depth-first always yield a single position. The score based
    /// strategies yield all entries tied for the lowest score.
    pub fn candidate_indices(&self, strategy: Strategy) -> Result<Vec<usize>, FrontierError> {
        if self.entries.is_empty() {
            return Err(FrontierError::EmptyStore);
        }

        match strategy {
            Strategy::BreadthFirst => Ok(vec![0]),
            Strategy::DepthFirst => Ok(vec![self.entries.len() - 1]),
            Strategy::UniformCost => self.lowest_cost_indices(),
            Strategy::Greedy => self.lowest_heuristic_indices(),
            Strategy::AStar => self.lowest_combined_score_indices(),
        }
    }

    /// Position of the entry `strategy` expands next. Ties go to the oldest entry.
    pub fn next_index(&self, strategy: Strategy) -> Result<usize, FrontierError> {
        self.candidate_indices(strategy)?
            .first()
            .copied()
            .ok_or(FrontierError::EmptyStore)
    }

    /// Removes and returns the entry `strategy` expands next.
    pub fn remove_next(&mut self, strategy: Strategy) -> Result<FrontierEntry, FrontierError> {
        let index = self.next_index(strategy)?;
        let removed = self
            .entries
            .remove(index)
            .ok_or(FrontierError::EmptyStore)?;

        tracing::debug!(
            "{strategy} expands {} from position {index}, {} entries left",
            removed.path_symbols(),
            self.entries.len()
        );
        Ok(removed)
    }
}

impl<'a> IntoIterator for &'a FrontierStore {
    type Item = &'a FrontierEntry;
    type IntoIter = std::collections::vec_deque::Iter<'a, FrontierEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
