//! CLI command implementations

pub(crate) mod common;
pub(crate) mod tokens;
pub(crate) mod transpile;
