//! Core library entry point for the `contlog` exact real number engine.
//!
//! A [`Number`] is not a stored value but a generator of continued logarithm
//! messages. Each call to [`Number::egest`] narrows the known range of the
//! number and irreversibly consumes that piece of information. Arithmetic is
//! performed lazily by strategies that pull messages from their inputs only
//! when the output range demands it, so irrational and rational values are
//! handled with the same exact integer machinery.

pub mod config;
pub mod math;
pub mod number;
pub mod protocol;
pub mod strategy;
pub mod utils;

use thiserror::Error;

pub use config::{CompareMode, Config, NumberConfig};
pub use number::{Messages, Number};
pub use protocol::{Message, Violation, Watcher};
pub use strategy::{Egestion, Strategy};
pub use utils::compare;

/// Result type used throughout the library to surface deterministic errors.
pub type ContlogResult<T> = core::result::Result<T, ContlogError>;

/// Stage of a homography step that failed to stay within machine integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverflowStage {
    /// Folding an input message into the coefficients.
    Ingest(Message),
    /// Applying the inverse transform of an output message.
    Egest(Message),
}

impl core::fmt::Display for OverflowStage {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OverflowStage::Ingest(message) => write!(f, "ingesting '{message}'"),
            OverflowStage::Egest(message) => write!(f, "egesting '{message}'"),
        }
    }
}

/// Error enumeration for the engine.
///
/// Exhaustion of a strategy is deliberately absent: it is an expected control
/// signal carried by [`Egestion::Exhausted`] and fully absorbed by [`Number`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContlogError {
    /// A successor strategy was requested from a strategy that is still active.
    #[error("no successor strategy is available before exhaustion")]
    Unavailable,
    /// The represented value is mathematically undefined (e.g. `0/0`).
    #[error("undefined ratio")]
    UndefinedRatio,
    /// An observed message sequence broke a protocol invariant.
    #[error("protocol violation: {0}")]
    ProtocolViolation(#[from] Violation),
    /// Homography coefficients no longer fit the machine integer width.
    #[error("homography coefficient overflow while {stage}")]
    CoefficientOverflow {
        /// Step that produced the overflow.
        stage: OverflowStage,
    },
}
