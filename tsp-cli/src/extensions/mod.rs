//! Module provides various helper functionality.

pub mod generate;
pub mod solve;
