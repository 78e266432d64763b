//! Errors surfaced by the turn engine.

use crate::attack::CatalogError;
use crate::error::{ErrorSeverity, FightError};

use super::MatchResult;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TurnError {
    #[error("match is already over ({0})")]
    MatchOver(MatchResult),

    #[error("turn limit of {limit} reached without a result")]
    TurnLimit { limit: u32 },

    #[error("attack selection failed: {0}")]
    Catalog(#[from] CatalogError),
}

impl FightError for TurnError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::MatchOver(_) | Self::TurnLimit { .. } => ErrorSeverity::Fatal,
            Self::Catalog(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MatchOver(_) => "TURN_MATCH_OVER",
            Self::TurnLimit { .. } => "TURN_LIMIT",
            Self::Catalog(err) => err.error_code(),
        }
    }
}
