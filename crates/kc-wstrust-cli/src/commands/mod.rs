//! Command implementations.

pub mod parse;
pub mod supports;

pub use parse::run_parse;
pub use supports::run_supports;
