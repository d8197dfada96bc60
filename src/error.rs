//!
//! Errors raised by `DoubleArraySeq` operations
//!
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeqError {
    /// capacity argument was negative or not representable as `usize`
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// operation needs a current element but the cursor is unset.
    /// holds the name of the operation.
    #[error("{0}: there is no current element")]
    InvalidState(&'static str),
    /// a required sequence argument was `None`
    #[error("{0}: sequence argument is missing")]
    NullReference(&'static str),
    /// backing storage could not be grown to `requested` slots
    #[error("cannot allocate storage for {requested} elements")]
    ResourceExhausted { requested: usize },
}

pub type Result<T> = std::result::Result<T, SeqError>;
