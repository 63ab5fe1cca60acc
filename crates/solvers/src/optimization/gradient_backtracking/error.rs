use std::error::Error as StdError;

use thiserror::Error;

use crate::optimization::line_search::{BacktrackError, LineSearchFailure};

/// Errors that can occur during backtracking gradient descent.
#[derive(Debug, Error)]
pub enum Error {
    #[error("problem error: {0}")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),

    #[error("line search failed: {0}")]
    LineSearch(#[from] LineSearchFailure),
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}

impl<E> From<BacktrackError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: BacktrackError<E>) -> Self {
        match err {
            BacktrackError::Problem(e) => Self::problem(e),
            BacktrackError::Failed(failure) => Self::LineSearch(failure),
        }
    }
}
