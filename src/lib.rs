#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Art Supply Factory Recipe
//!
//! > **A Recipe for the Factory and Abstract Factory patterns in Rust.**
//!
//! This crate demonstrates the two classic creational patterns on a deliberately
//! small domain: art supplies. Two product capabilities ([`Easel`](products::Easel)
//! and [`Paint`](products::Paint)), two variants of each, and two ways to create
//! them:
//!
//! - **Factory**: [`EaselFactory`](factory::EaselFactory) maps a string key to
//!   one product from a single hierarchy.
//! - **Abstract Factory**: [`ArtSupplyFactory`](factory::ArtSupplyFactory)
//!   produces a matched *family* of products (professional easel + oil paint,
//!   or beginner easel + water paint).
//!
//! ## 🏗️ Design Philosophy
//!
//! ### Why a capability trait instead of concrete types?
//!
//! [`ArtistClient`](clients::ArtistClient) holds a `Box<dyn ArtSupplyFactory>`
//! and nothing else. It can paint with professional supplies, beginner
//! supplies, or test stubs, and its code never changes.
//! -   **Benefit**: swapping a family is one line at the injection site.
//! -   **Trade-off**: dynamic dispatch. For a small, fixed variant set this is
//!     the simplest correct choice; a sum type would also work.
//!
//! ### The pairing invariant
//!
//! The one non-trivial contract in the system: a concrete factory always
//! returns products from the **same family**. The professional factory never
//! hands out water paint. Nothing enforces this at the type level — it is the
//! promise each `ArtSupplyFactory` implementation makes, and the tests pin it.
//!
//! ### Mocking: testing without pain
//!
//! [`MockArtSupplyFactory`](factory::MockArtSupplyFactory) feeds the client
//! inline stub products. See the [`factory::mock`] module for a guide.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Errors at the boundary
//! The only fallible operation is the string-keyed lookup in
//! [`EaselFactory`](factory::EaselFactory). It rejects bad keys immediately
//! with [`ArtSupplyError`](error::ArtSupplyError) and nothing downstream ever
//! sees them. Everything else is a total function.
//!
//! ### 2. Dependency injection via constructor
//! The client receives its factory as a constructor parameter. No global
//! registry, no singleton: ownership moves in, the binding is immutable.
//!
//! ### 3. Observability
//! Factory and client operations carry `tracing` instrumentation with a
//! `family` field, so a debug run shows which concrete factory served each
//! request. See [`lifecycle::tracing`].
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Products ([`products`])
//! The capabilities and their concrete variants. Stateless roles whose only
//! observable effect is a fixed description line on stdout.
//!
//! ### 2. The Factories ([`factory`])
//! Both patterns plus the mock. This is where concrete types are chosen;
//! nothing outside this module names a product variant.
//!
//! ### 3. The Client ([`clients`])
//! [`ArtistClient`](clients::ArtistClient) consumes the capability and proves
//! the substitutability claim.
//!
//! ### 4. The Plumbing ([`error`], [`lifecycle`])
//! One error kind, one tracing setup function.

pub mod clients;
pub mod error;
pub mod factory;
pub mod lifecycle;
pub mod products;
