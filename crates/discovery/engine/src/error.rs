//! Error types for the hybrid discovery engine.
//!
//! Every variant signals an internally inconsistent catalog. They abort the
//! whole computation; no partial result is ever returned.

use discovery_types::Channel;
use thiserror::Error;

/// Errors that can occur while scoring, matching or selecting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// An answered option is not wired to any gene.
    #[error("missing option weights for answer ({scenario_code}, {option_code})")]
    MissingWeight {
        scenario_code: String,
        option_code: String,
    },

    /// A weight row references a gene outside the gene catalog.
    #[error(
        "unknown gene_code `{gene_code}` in option weights for ({scenario_code}, {option_code})"
    )]
    UnknownGene {
        gene_code: String,
        scenario_code: String,
        option_code: String,
    },

    /// A channel has no advice item to fall back on.
    #[error("no advice items found for activation channel `{channel}`")]
    NoContent { channel: Channel },
}

impl EngineError {
    /// Whether the error points at a catalog defect rather than user input.
    pub fn is_catalog_integrity(&self) -> bool {
        match self {
            EngineError::MissingWeight { .. }
            | EngineError::UnknownGene { .. }
            | EngineError::NoContent { .. } => true,
        }
    }
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
