#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("range bound is not a number")]
    InvalidBound,

    #[error("malformed range literal: {0:?}")]
    MalformedLiteral(String),

    #[error("cannot iterate over an unbounded range")]
    UnboundedIteration,

    #[error("{0}")]
    ParseIntError(#[from] std::num::ParseIntError),
}
