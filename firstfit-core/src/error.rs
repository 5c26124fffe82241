use thiserror::Error;

/// Everything a simulation call can fail with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed argument at a public boundary. Nothing was mutated.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Operation called outside its allowed lifecycle phase. Nothing was mutated.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Internal commit precondition failed. Unreachable unless the allocator
    /// itself is broken.
    #[error("precondition violated: {0}")]
    PreconditionViolated(String),
}

pub type Result<T> = std::result::Result<T, Error>;
