//! Error types for evogrid_core.
//!
//! Simulation outcomes (starvation, failed placement, unclaimed food) are
//! never errors. These variants cover configuration and usage mistakes.

use evogrid_data::{GeneError, IdParseError, OrganismId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration rejected by validation
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Gene value outside its declared domain
    #[error("Invalid genes: {0}")]
    InvalidGenes(#[from] GeneError),

    /// Malformed organism id
    #[error("Invalid organism id: {0}")]
    InvalidId(String),

    /// No living or dead organism carries this id
    #[error("No organism found with ID {0}")]
    NotFound(OrganismId),
}

pub type Result<T> = std::result::Result<T, EngineError>;

impl EngineError {
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }

    #[must_use]
    pub fn invalid_id<S: Into<String>>(msg: S) -> Self {
        Self::InvalidId(msg.into())
    }
}

impl From<IdParseError> for EngineError {
    fn from(err: IdParseError) -> Self {
        Self::InvalidId(err.0)
    }
}
