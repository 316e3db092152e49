//! CLI command implementations.

pub mod common;
pub mod extract;
pub mod grid;
pub mod simulate;
pub mod version;
