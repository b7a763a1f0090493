use thiserror::Error;

use crate::{config::ConfigError, frontier::FrontierError};

#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Frontier(#[from] FrontierError),

    #[error("no question has been asked yet")]
    NoActiveQuestion,
}
