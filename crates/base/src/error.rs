use serde::{Deserialize, Serialize};
use thiserror::Error;

// queue

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum HeapError {
    #[error("Invalid argument: {reason}.")]
    InvalidArgument { reason: String },
    #[error("Warning: Full Admissions Queue!")]
    QueueFull,
    #[error("Record is absent.")]
    NullRecord,
    #[error("Warning: Empty Admissions Queue!")]
    EmptyQueue,
    #[error("Index {index} is out of range 0..{len}.")]
    IndexOutOfRange { index: usize, len: usize },
}

// options

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum OptionsError {
    #[error("Invalid queue options: {reason}.")]
    InvalidOptions { reason: String },
}
