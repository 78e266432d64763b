//! Common error infrastructure for fight-core.
//!
//! Domain-specific errors (`CatalogError`, `ConditionError`, `TurnError`, ...)
//! live next to the operations that produce them. This module provides the
//! shared classification every one of them implements.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with a different input.
    ///
    /// Examples: unknown attack name, empty loadout slot
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: fighter profile outside physical bounds, inverted config range
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: removing a condition the fighter does not carry
    Internal,

    /// Fatal error - the match cannot continue.
    ///
    /// Examples: turn requested after the match ended, turn cap exceeded
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all fight-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait FightError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
