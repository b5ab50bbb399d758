//! Thermochemistry of the product mixture.

use crate::error::{ModelError, ModelResult};
use crate::speciation::ProductSet;
use deos_core::units::constants::CAL_PER_G_TO_J_PER_KG;

/// Ideal-gas polytropic exponent assumed for all explosives.
pub const GAMMA_0: f64 = 1.23;

/// Covolume scale applied to hydrogen-free C/N/O fuels.
pub const FURNACE_SCALE: f64 = 1.07;

/// Thermochemical summary of the product mixture.
///
/// Computed once per run from the product split; feeds the CJ solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoState {
    mw: f64,
    q: f64,
    w: f64,
    d0: f64,
}

impl ThermoState {
    /// Evaluate mixture molecular weight, detonation heat, covolume and the
    /// zero-density-limit detonation velocity.
    ///
    /// Fails with [`ModelError::Infeasible`] when the net detonation heat is
    /// negative, the one model-level validation point of the pipeline.
    pub fn evaluate(
        products: &ProductSet,
        other_pct: f64,
        heat_of_formation: f64,
    ) -> ModelResult<Self> {
        let product_mw = products.molecular_weight();
        if product_mw <= 0.0 {
            return Err(ModelError::InvalidInput {
                what: "composition yields an empty product set",
            });
        }

        // Rescale for the mass fraction held by elements outside C/H/N/O
        let mw = product_mw / (1.0 - other_pct / 100.0);

        // kcal/mol → cal, per gram of explosive
        let q = -((products.formation_enthalpy() * 1000.0) / mw - heat_of_formation);
        if q < 0.0 {
            return Err(ModelError::Infeasible { q });
        }

        let mut w = products.covolume_sum() / product_mw;
        if products.furnace_correction() {
            w *= FURNACE_SCALE;
        }

        let d0 = (2.0 * q * CAL_PER_G_TO_J_PER_KG * (GAMMA_0 * GAMMA_0 - 1.0)).sqrt();

        Ok(Self { mw, q, w, d0 })
    }

    /// Mixture molecular weight [g/mol].
    pub fn molecular_weight(&self) -> f64 {
        self.mw
    }

    /// Detonation heat [cal/g].
    pub fn heat(&self) -> f64 {
        self.q
    }

    /// Mixture covolume [km/s].
    pub fn covolume(&self) -> f64 {
        self.w
    }

    /// Zero-density-limit detonation velocity [m/s].
    pub fn ideal_velocity(&self) -> f64 {
        self.d0
    }
}
