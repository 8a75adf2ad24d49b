//! # Abstract Factory
//!
//! The Abstract Factory pattern: a capability that produces one complete
//! *family* of related products per call pair. A family is a matched set —
//! professional easels go with oil paint, beginner easels with water paint —
//! and the pairing invariant is the one non-trivial contract in this system:
//! a concrete factory must never mix variants across families.
//!
//! Clients hold the capability, never a concrete factory type, which is what
//! makes the [`mock`](crate::factory::mock) substitutable without client
//! changes.

use tracing::debug;

use crate::products::{Easel, ForBeginnersEasel, OilPaint, Paint, ProfessionalEasel, WaterPaint};

/// Capability for producing one matched family of art supplies.
///
/// Both creation methods are total: there are no parameters, so no invalid
/// input is possible, and every call returns a fresh, independently owned
/// product. Nothing is cached or shared between calls.
pub trait ArtSupplyFactory: Send + Sync {
    /// Produces a new easel from this factory's family.
    fn create_easel(&self) -> Box<dyn Easel>;

    /// Produces a new paint from this factory's family.
    fn create_paint(&self) -> Box<dyn Paint>;

    /// Stable label for this factory's family, used in structured logging.
    fn family(&self) -> &'static str;
}

/// Produces the professional family: [`ProfessionalEasel`] + [`OilPaint`].
#[derive(Debug, Default)]
pub struct ProfessionalArtSupplyFactory;

impl ArtSupplyFactory for ProfessionalArtSupplyFactory {
    fn create_easel(&self) -> Box<dyn Easel> {
        debug!(family = self.family(), "creating easel");
        Box::new(ProfessionalEasel)
    }

    fn create_paint(&self) -> Box<dyn Paint> {
        debug!(family = self.family(), "creating paint");
        Box::new(OilPaint)
    }

    fn family(&self) -> &'static str {
        "professional"
    }
}

/// Produces the beginner family: [`ForBeginnersEasel`] + [`WaterPaint`].
#[derive(Debug, Default)]
pub struct BeginnerArtSupplyFactory;

impl ArtSupplyFactory for BeginnerArtSupplyFactory {
    fn create_easel(&self) -> Box<dyn Easel> {
        debug!(family = self.family(), "creating easel");
        Box::new(ForBeginnersEasel)
    }

    fn create_paint(&self) -> Box<dyn Paint> {
        debug!(family = self.family(), "creating paint");
        Box::new(WaterPaint)
    }

    fn family(&self) -> &'static str {
        "beginner"
    }
}
