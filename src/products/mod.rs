//! Product capabilities ([`Easel`], [`Paint`]) and their concrete variants.
//!
//! Every product is a stateless behavioral role: one capability method, no
//! inputs, no return value, and a fixed descriptive string as its only
//! observable effect. The factories in [`crate::factory`] are the only place
//! that decides which variant a caller receives.

pub mod easel;
pub mod paint;

pub use easel::*;
pub use paint::*;
