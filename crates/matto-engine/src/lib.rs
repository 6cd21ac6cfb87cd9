//! Search and evaluation for matto.

pub mod eval;
pub mod search;
pub mod time;

pub use eval::evaluate;
pub use search::{SearchResult, iterative_deepening};
pub use time::limits_from_go;
