use crate::{
    config::{ConfigError, ScenarioParams},
    frontier::{FrontierEntry, MAX_ALPHABET_SIZE, NodeLabel},
    random::RandomSource,
};

/// Synthesizes plausible-looking frontier entries.
///
/// Paths are random label sequences; they are not walks through an actual graph.
/// The heuristic is still derived from the terminal label, so it stays consistent
/// across entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryGenerator {
    path_len: (u32, u32),
    path_cost: (u32, u32),
    alphabet: Vec<NodeLabel>,
}

impl EntryGenerator {
    /// Validates `params` and takes its bounds from them.
    pub fn new(params: &ScenarioParams) -> Result<Self, ConfigError> {
        params.validate()?;

        let alphabet = (0..params.alphabet_size)
            .map(NodeLabel::new)
            .collect::<Option<Vec<_>>>()
            .filter(|alphabet| !alphabet.is_empty())
            .ok_or(ConfigError::AlphabetSize {
                alphabet_size: params.alphabet_size,
                max: MAX_ALPHABET_SIZE,
            })?;

        Ok(EntryGenerator {
            path_len: (params.min_path_len, params.max_path_len),
            path_cost: (params.min_path_cost, params.max_path_cost),
            alphabet,
        })
    }

    /// Draws one entry: the path length first, then every label in path order, then
    /// the path cost.
    ///
    /// Every path holds at least one label, and the heuristic is that of the last one.
    pub fn random_entry<R: RandomSource + ?Sized>(&self, rng: &mut R) -> FrontierEntry {
        let (min_len, max_len) = self.path_len;
        let length = rng.int_in_range(min_len, max_len) as usize;

        let mut path = Vec::with_capacity(length);
        let mut terminal = self.random_label(rng);
        path.push(terminal);
        for _ in 1..length {
            terminal = self.random_label(rng);
            path.push(terminal);
        }

        let (min_cost, max_cost) = self.path_cost;
        let path_cost = rng.int_in_range(min_cost, max_cost);

        FrontierEntry::new(path, path_cost, terminal.heuristic())
    }

    fn random_label<R: RandomSource + ?Sized>(&self, rng: &mut R) -> NodeLabel {
        let last = self.alphabet.len() as u32 - 1;
        self.alphabet[rng.int_in_range(0, last) as usize]
    }
}
