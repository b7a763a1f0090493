use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrontierError {
    /// A query or removal was attempted on a frontier with no entries.
    #[error("the frontier is empty")]
    EmptyStore,

    /// A strategy name or question index outside the supported strategies.
    #[error("unknown search strategy `{0}`")]
    UnknownStrategy(String),
}
