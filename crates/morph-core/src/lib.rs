//! morph-core - Core library for sqlmorph
//!
//! Project configuration (`morph.yml`) and the error type shared by the
//! command line front end.

pub mod config;
pub mod error;

pub use config::{Config, DialectName, CONFIG_FILE_NAMES};
pub use error::{CoreError, CoreResult};
