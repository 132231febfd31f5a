//! Error types for the kernel.
//!
//! Misses and absorbed rays are ordinary outcomes and are reported with `Option`. Only malformed input ends up here.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),
}

pub type Result<T> = std::result::Result<T, Error>;
