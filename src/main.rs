//! # Art Supply Factory Recipe — demo entry point
//!
//! Demonstrates both patterns end to end:
//! 1.  The **Abstract Factory**: build one concrete factory, inject it into
//!     [`ArtistClient`], and let the client work with the whole family.
//! 2.  The **Factory**: ask [`EaselFactory`] for a single product by key.
//!
//! The concrete factory selection is hardcoded to the professional family in
//! this build; swapping to [`BeginnerArtSupplyFactory`] is a one-line change
//! at the injection site and touches no client code.
//!
//! [`BeginnerArtSupplyFactory`]: art_supply_recipe::factory::BeginnerArtSupplyFactory

use art_supply_recipe::clients::ArtistClient;
use art_supply_recipe::error::ArtSupplyError;
use art_supply_recipe::factory::{EaselFactory, ProfessionalArtSupplyFactory};
use art_supply_recipe::lifecycle::setup_tracing;
use tracing::info;

fn main() -> Result<(), ArtSupplyError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting abstract factory demo");

    let factory = ProfessionalArtSupplyFactory;
    let client = ArtistClient::new(factory);
    client.create_art();

    info!("Starting single-product factory demo");

    let easel = EaselFactory::create_easel(Some("beginner"))?;
    easel.use_easel();

    info!("Demo completed");
    Ok(())
}
