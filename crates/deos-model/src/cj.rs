//! Closed-form Chapman–Jouguet point solver.

use crate::error::{ModelError, ModelResult};
use crate::thermo::ThermoState;
use deos_core::numeric::ensure_finite;
use deos_core::units::constants::CAL_PER_G_TO_J_PER_KG;
use deos_core::units::{Density, Pressure, Velocity, gpa, kg_m3, mps};

/// Ensure a CJ quantity is finite, returning a degeneracy error if not.
fn check_finite(value: f64, what: &'static str) -> ModelResult<()> {
    ensure_finite(value, what).map_err(|_| ModelError::Degenerate { what })?;
    Ok(())
}

/// Chapman–Jouguet state of the detonation products.
///
/// Fully algebraic: the first-order EOS turns the CJ condition into closed
/// expressions in (D₀, q, w, ρ) with no root finding. Raw fields carry the
/// formula units; unit-typed accessors wrap the SI-expressible ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CjState {
    d: f64,
    p: f64,
    q_specific: f64,
    gamma: f64,
    alpha: f64,
    beta: f64,
    rho_cj: f64,
}

impl CjState {
    /// Solve the CJ point for a thermochemical state at loading density
    /// `rho` [g/cc].
    ///
    /// Denominators that collapse to zero fail with
    /// [`ModelError::Degenerate`] instead of propagating NaN/Inf.
    pub fn solve(thermo: &ThermoState, rho: f64) -> ModelResult<Self> {
        // J/kg
        let q_specific = CAL_PER_G_TO_J_PER_KG * thermo.heat();
        if q_specific <= 0.0 {
            return Err(ModelError::Degenerate {
                what: "detonation heat is zero",
            });
        }

        // g/cc × km/s folds to m/s through the 1000 factor
        let d = thermo.ideal_velocity() + thermo.covolume() * rho * 1000.0;
        if d <= 0.0 {
            return Err(ModelError::Degenerate {
                what: "detonation velocity is zero",
            });
        }

        let a = thermo.covolume() * rho * 1000.0 / d;
        let b = 0.5 * d * thermo.ideal_velocity() / q_specific;

        let one_plus_a = 1.0 + a;
        let gamma = a + (one_plus_a * one_plus_a + b).sqrt();
        let alpha = (1.0 + b / (one_plus_a * one_plus_a)).sqrt() - 1.0;

        if alpha * gamma == 0.0 {
            return Err(ModelError::Degenerate {
                what: "Jones parameter is zero",
            });
        }
        let beta = (1.0 + alpha) / (alpha * gamma);

        let p = rho * d * d / ((1.0 + gamma) * 1e6);
        let rho_cj = 1000.0 * rho * (gamma + 1.0) / gamma;

        check_finite(gamma, "CJ polytropic exponent")?;
        check_finite(alpha, "Jones parameter")?;
        check_finite(beta, "auxiliary CJ ratio")?;
        check_finite(p, "detonation pressure")?;
        check_finite(rho_cj, "CJ product density")?;

        Ok(Self {
            d,
            p,
            q_specific,
            gamma,
            alpha,
            beta,
            rho_cj,
        })
    }

    /// Detonation velocity [m/s].
    pub fn velocity_m_s(&self) -> f64 {
        self.d
    }

    pub fn velocity(&self) -> Velocity {
        mps(self.d)
    }

    /// Detonation pressure [GPa].
    pub fn pressure_gpa(&self) -> f64 {
        self.p
    }

    pub fn pressure(&self) -> Pressure {
        gpa(self.p)
    }

    /// Detonation heat re-expressed as specific energy [J/kg].
    pub fn specific_heat(&self) -> f64 {
        self.q_specific
    }

    /// CJ polytropic exponent.
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Jones parameter.
    pub fn jones_parameter(&self) -> f64 {
        self.alpha
    }

    /// Auxiliary CJ ratio (1 + α)/(α·γ).
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Product density at the CJ state [kg/m³].
    pub fn cj_density_kg_m3(&self) -> f64 {
        self.rho_cj
    }

    pub fn cj_density(&self) -> Density {
        kg_m3(self.rho_cj)
    }
}
