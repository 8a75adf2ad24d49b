//! Runtime concerns that sit outside the patterns themselves.

pub mod tracing;

pub use self::tracing::setup_tracing;
