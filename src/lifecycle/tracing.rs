//! # Observability & Tracing
//!
//! This module provides the tracing infrastructure for the recipe.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the
//! `tracing` crate. The demo's observable output (the product description
//! lines) stays on plain stdout; logging is a separate, optional layer on top.
//!
//! ## Configuration
//!
//! The compact format hides the crate/module prefix (`with_target(false)`) to
//! keep log lines short while still carrying structured fields.
//!
//! - **Structured logging** with the `tracing` crate
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** optimized for development
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only the product output (default: logging is off)
//! cargo run
//!
//! # Show the factory and client events around the output
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` a run looks like:
//!
//! ```text
//! DEBUG create_art{family="professional"}: requesting supplies
//! DEBUG create_art{family="professional"}: creating easel family="professional"
//! DEBUG create_art{family="professional"}: creating paint family="professional"
//! Using prof easels for larger canvas
//! Applying vibrant oil paints
//! ```
//!
//! The span (`create_art{family=...}`) comes from `#[instrument]` on the
//! client; the `family` field makes it obvious which concrete factory served
//! the request even though the client never names it.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - the family field carries the context
        .compact()
        .init();
}
