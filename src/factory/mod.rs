//! Both creational patterns of the recipe.
//!
//! # Main Components
//!
//! - [`EaselFactory`] - Factory pattern: a string-keyed dispatcher over one
//!   product hierarchy
//! - [`ArtSupplyFactory`] - Abstract Factory pattern: a capability producing a
//!   matched *family* of products
//! - [`ProfessionalArtSupplyFactory`] / [`BeginnerArtSupplyFactory`] - the two
//!   shipping families
//!
//! # Testing
//!
//! See the [`mock`] module for a factory that feeds stub products to
//! [`ArtistClient`](crate::clients::ArtistClient) without touching the real
//! variants.

pub mod easel_factory;
pub mod mock;
pub mod supply_factory;

pub use easel_factory::*;
pub use mock::*;
pub use supply_factory::*;
