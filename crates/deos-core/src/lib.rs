//! deos-core: stable foundation for deteos.
//!
//! Contains:
//! - units (uom SI types + constructors, plus the model's fixed conversion
//!   constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{DeosError, DeosResult};
pub use numeric::*;
pub use units::*;
