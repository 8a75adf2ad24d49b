//! # Supply Errors
//!
//! This module defines the common error type used throughout the recipe.
//! By centralizing the definition, every factory reports bad input the same
//! way and callers have a single type to match on.
//!
//! The taxonomy is deliberately tiny: the only fallible operation in the whole
//! system is the string-keyed lookup in
//! [`EaselFactory`](crate::factory::EaselFactory). Everything else is a total
//! function over its inputs, so nothing else can fail.

/// Errors that can occur when requesting art supplies.
///
/// The `Display` output of each value is the exact user-facing message; no
/// component catches this error, so it propagates unchanged to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArtSupplyError {
    /// A creation request carried a missing or unrecognized argument.
    #[error("{0}")]
    InvalidArgument(String),
}

impl ArtSupplyError {
    /// The message for a creation request with no key at all.
    pub(crate) fn missing_type() -> Self {
        Self::InvalidArgument("Type cannot be null".to_string())
    }

    /// The message for a key outside the recognized set. Carries the key as
    /// the caller supplied it, not case-folded.
    pub(crate) fn unknown_type(key: &str) -> Self {
        Self::InvalidArgument(format!("Unknown easel type: {key}"))
    }
}
