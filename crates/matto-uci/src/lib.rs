//! UCI protocol handling for matto.

pub mod command;
pub mod engine;
pub mod error;

pub use command::GoParams;
pub use engine::UciEngine;
pub use error::UciError;
