pub mod errors;
pub mod iter;
pub mod literal;
pub mod ranges;
