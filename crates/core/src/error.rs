//! Error types for filepow-core

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("no suffix reached {difficulty} leading zero bits within {limit} iterations")]
    IterationLimit { difficulty: u32, limit: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
