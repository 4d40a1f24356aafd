use thiserror::Error;

pub type Result<T, E = HeapError> = std::result::Result<T, E>;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),

    #[error("heap is empty")]
    Underflow,

    #[error("index {index} is outside the live slots 1..={len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// The specific misuse behind [`HeapError::InvalidArgument`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("branching factor must be at least 2, got {0}")]
    BranchingFactor(usize),

    #[error("index {0} has no parent")]
    NoParent(usize),

    #[error("index {0} has no children")]
    NoChildren(usize),

    #[error("first child of index {0} does not fit in usize")]
    ChildIndexOverflow(usize),
}
