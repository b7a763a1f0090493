use serde::{Serialize, Serializer};

/// Largest alphabet a frontier may draw its node labels from.
pub const MAX_ALPHABET_SIZE: u32 = 26;

/// Alphabet size used by generated scenarios unless configured otherwise.
pub const DEFAULT_ALPHABET_SIZE: u32 = 20;

/// Heuristic value of the first label of the alphabet. Every later label adds one.
pub const HEURISTIC_BASE: u32 = 5;

/// A node of the (imaginary) search graph.
///
/// Labels are ordinals into a fixed, totally ordered alphabet and are rendered as
/// uppercase letters starting at `A`. The heuristic of a node is a pure function of
/// its ordinal, so two paths ending in the same label always agree on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeLabel {
    ordinal: u8,
}

impl NodeLabel {
    /// Builds a label from its position in the alphabet.
    ///
    /// # Returns
    /// `None` if `ordinal` does not fit in the largest supported alphabet.
    pub fn new(ordinal: u32) -> Option<Self> {
        if ordinal < MAX_ALPHABET_SIZE {
            Some(NodeLabel {
                ordinal: ordinal as u8,
            })
        } else {
            None
        }
    }

    /// Parses the rendered form of a label (`'A'..='Z'`).
    pub fn from_symbol(symbol: char) -> Option<Self> {
        if symbol.is_ascii_uppercase() {
            Self::new(u32::from(symbol) - u32::from('A'))
        } else {
            None
        }
    }

    pub fn ordinal(self) -> u32 {
        u32::from(self.ordinal)
    }

    pub fn symbol(self) -> char {
        char::from(b'A' + self.ordinal)
    }

    /// Estimated remaining cost from this node to a goal.
    pub fn heuristic(self) -> u32 {
        HEURISTIC_BASE + self.ordinal()
    }
}

impl std::fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Serialize for NodeLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.symbol())
    }
}

/// Heuristic of a path, taken from its terminal node.
///
/// # Returns
/// `None` for an empty path, which has no terminal node.
pub fn heuristic_for(path: &[NodeLabel]) -> Option<u32> {
    path.last().map(|label| label.heuristic())
}

/// Parses a run of label symbols such as `"ABQ"`.
///
/// # Returns
/// `None` if any character is not a valid label symbol.
pub fn parse_path(symbols: &str) -> Option<Vec<NodeLabel>> {
    symbols.chars().map(NodeLabel::from_symbol).collect()
}
