//! CLI command implementations.

pub mod find;
pub mod verify;
pub mod weights;
