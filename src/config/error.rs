use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario parameters: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed scenario parameters: {0}")]
    Json(#[from] serde_json::Error),

    #[error("`{name}` range is empty ({min} > {max})")]
    EmptyRange {
        name: &'static str,
        min: u32,
        max: u32,
    },

    #[error("`min_entries` must be at least 1")]
    NoEntries,

    #[error("`min_path_len` must be at least 1, every path needs a terminal node")]
    EmptyPaths,

    #[error("alphabet size ({alphabet_size}) must be between 1 and {max}")]
    AlphabetSize { alphabet_size: u32, max: u32 },

    #[error("question index {index} does not name a search strategy (0..={max})")]
    QuestionOutOfRange { index: u32, max: u32 },
}
