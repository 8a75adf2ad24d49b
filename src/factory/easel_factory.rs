//! # Single-Product Factory
//!
//! The classic Factory pattern: one product hierarchy ([`Easel`]), one
//! dispatcher mapping a string key to a concrete variant.
//!
//! The key set is closed, so it is modeled as an enum ([`EaselKind`]) with a
//! `FromStr` implementation. Unrecognized keys are rejected at this boundary;
//! construction itself cannot fail.

use std::str::FromStr;

use tracing::{debug, instrument};

use crate::error::ArtSupplyError;
use crate::products::{Easel, ForBeginnersEasel, ProfessionalEasel};

/// The recognized easel variants, one per string key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaselKind {
    Professional,
    Beginner,
}

impl FromStr for EaselKind {
    type Err = ArtSupplyError;

    /// Keys are matched case-insensitively; the error message carries the key
    /// exactly as the caller wrote it.
    fn from_str(key: &str) -> Result<Self, Self::Err> {
        match key.to_lowercase().as_str() {
            "professional" => Ok(Self::Professional),
            "beginner" => Ok(Self::Beginner),
            _ => Err(ArtSupplyError::unknown_type(key)),
        }
    }
}

impl EaselKind {
    /// Constructs a fresh easel of this kind.
    fn build(self) -> Box<dyn Easel> {
        match self {
            Self::Professional => Box::new(ProfessionalEasel),
            Self::Beginner => Box::new(ForBeginnersEasel),
        }
    }
}

/// Static dispatcher from a string key to a new [`Easel`].
///
/// # Example
///
/// ```
/// use art_supply_recipe::factory::EaselFactory;
/// use art_supply_recipe::products::Easel;
///
/// let easel = EaselFactory::create_easel(Some("Professional")).unwrap();
/// assert_eq!(easel.description(), "Using prof easels for larger canvas");
/// ```
pub struct EaselFactory;

impl EaselFactory {
    /// Creates the easel variant registered under `key`.
    ///
    /// An absent key fails with "Type cannot be null"; a key outside the
    /// recognized set fails with "Unknown easel type: \<key\>". No product is
    /// constructed on either error path.
    #[instrument]
    pub fn create_easel(key: Option<&str>) -> Result<Box<dyn Easel>, ArtSupplyError> {
        let key = key.ok_or_else(ArtSupplyError::missing_type)?;
        let kind: EaselKind = key.parse()?;
        debug!(?kind, "building easel");
        Ok(kind.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_keys_map_to_their_variant() {
        let easel = EaselFactory::create_easel(Some("professional")).expect("recognized key");
        assert_eq!(easel.description(), "Using prof easels for larger canvas");

        let easel = EaselFactory::create_easel(Some("beginner")).expect("recognized key");
        assert_eq!(
            easel.description(),
            "Using beginners easels for smaller canvas"
        );
    }

    #[test]
    fn keys_are_case_insensitive() {
        for key in ["PROFESSIONAL", "Professional", "pRoFeSsIoNaL"] {
            let easel = EaselFactory::create_easel(Some(key)).expect("case-folded key");
            assert_eq!(easel.description(), "Using prof easels for larger canvas");
        }
    }

    #[test]
    fn absent_key_is_rejected() {
        let err = EaselFactory::create_easel(None).expect_err("absent key must fail");
        assert_eq!(err.to_string(), "Type cannot be null");
    }

    #[test]
    fn unknown_key_is_rejected_with_the_original_spelling() {
        let err = EaselFactory::create_easel(Some("Digital")).expect_err("unknown key must fail");
        assert_eq!(err.to_string(), "Unknown easel type: Digital");
    }

    #[test]
    fn kind_parses_independently_of_the_factory() {
        assert_eq!("beginner".parse::<EaselKind>(), Ok(EaselKind::Beginner));
        assert!("watercolor".parse::<EaselKind>().is_err());
    }
}
