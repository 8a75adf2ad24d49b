//! Consumers of the [`ArtSupplyFactory`](crate::factory::ArtSupplyFactory) capability.

pub mod artist;

pub use artist::*;
