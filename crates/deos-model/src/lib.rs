//! deos-model: detonation-parameter prediction for deteos.
//!
//! Provides:
//! - Product species data (molecular weights, formation enthalpies,
//!   covolumes)
//! - Composition input record with domain validation
//! - Oxygen-balance classification (diagnostic reaction type)
//! - Closed-form product speciation
//! - Thermochemistry (mixture weight, detonation heat, covolume, D₀)
//! - Chapman–Jouguet solver and the pipeline orchestrator
//!
//! # Architecture
//!
//! The pipeline is strictly linear: a [`Composition`] flows through
//! classification, speciation and thermochemistry into the CJ solver, and
//! [`detonate`] packages the result. Every stage is a pure function over the
//! immutable constant tables in [`products`]; the model is first-order and
//! fully closed-form, so there is no iteration anywhere.
//!
//! # Example
//!
//! ```
//! use deos_model::{Composition, detonate};
//!
//! let comp = Composition::new("PBX9502", 1.90, 2.30, 2.23, 2.21, 2.21, 3.81, -205.5).unwrap();
//! let result = detonate(&comp).unwrap();
//! println!("D = {:.0} m/s, P = {:.1} GPa", result.velocity, result.pressure);
//! ```

pub mod classifier;
pub mod cj;
pub mod composition;
pub mod error;
pub mod pipeline;
pub mod products;
pub mod speciation;
pub mod thermo;

// Re-exports for ergonomics
pub use classifier::ReactionType;
pub use cj::CjState;
pub use composition::Composition;
pub use error::{ModelError, ModelResult};
pub use pipeline::{Detonation, detonate};
pub use products::{Element, Product};
pub use speciation::ProductSet;
pub use thermo::{FURNACE_SCALE, GAMMA_0, ThermoState};
