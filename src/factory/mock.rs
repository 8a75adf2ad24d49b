//! # Mock Factory & Testing Guide
//!
//! [`MockArtSupplyFactory`] implements the same [`ArtSupplyFactory`] capability
//! as the production factories but hands out inline stub products. It lets you
//! exercise [`ArtistClient`](crate::clients::ArtistClient) logic without
//! touching the real product variants, which is the whole point of the
//! Abstract Factory pattern: the client cannot tell the difference.
//!
//! ## When to use the Mock vs a Real Factory
//!
//! | Feature | MockArtSupplyFactory | Real Factory |
//! |---------|----------------------|--------------|
//! | **Products** | Inline stubs | Concrete variants |
//! | **Output** | `[Mock Easel]` / `[Mock Paint]` | Family descriptions |
//! | **Use Case** | Testing client wiring | Demonstrating the families |
//!
//! The stub products live as local structs inside the creation methods, the
//! Rust rendition of an anonymous implementation: they exist only to satisfy
//! the capability and are unnameable outside this module.

use crate::factory::ArtSupplyFactory;
use crate::products::{Easel, Paint};

/// Test-only factory yielding stub products.
///
/// Substitutable for any real factory wherever an [`ArtSupplyFactory`] is
/// expected, without changing client code.
#[derive(Debug, Default)]
pub struct MockArtSupplyFactory;

impl ArtSupplyFactory for MockArtSupplyFactory {
    fn create_easel(&self) -> Box<dyn Easel> {
        #[derive(Debug)]
        struct MockEasel;
        impl Easel for MockEasel {
            fn description(&self) -> &'static str {
                "[Mock Easel]"
            }
        }
        Box::new(MockEasel)
    }

    fn create_paint(&self) -> Box<dyn Paint> {
        struct MockPaint;
        impl Paint for MockPaint {
            fn description(&self) -> &'static str {
                "[Mock Paint]"
            }
        }
        Box::new(MockPaint)
    }

    fn family(&self) -> &'static str {
        "mock"
    }
}
