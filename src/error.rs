use thiserror::Error;

/// Precondition violations reported by the public entry points.
///
/// The algorithms themselves never fail once their inputs are validated, a broken `leq`
/// degrades the result and the running time but is not reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SelectError {
    #[error("cannot select from an empty input")]
    EmptyInput,

    #[error("rank {rank} is out of bounds for {len} elements")]
    RankOutOfBounds { rank: usize, len: usize },

    #[error("element size must be at least one byte")]
    ZeroElementSize,

    #[error("buffer holds {actual} bytes, {needed} are required")]
    BufferTooSmall { needed: usize, actual: usize },

    #[error("{len} elements of {elem_size} bytes overflow the address space")]
    SizeOverflow { len: usize, elem_size: usize },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = SelectError> = std::result::Result<T, E>;
