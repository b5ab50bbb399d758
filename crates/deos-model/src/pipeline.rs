//! Pipeline orchestration: composition in, detonation record out.

use crate::classifier::ReactionType;
use crate::cj::CjState;
use crate::composition::Composition;
use crate::error::ModelResult;
use crate::speciation::ProductSet;
use crate::thermo::ThermoState;
use deos_core::units::constants::CAL_PER_G_TO_J_PER_KG;
use tracing::debug;

/// Packaged result of one pipeline run.
///
/// Carries the fields of the tabular output record in formula units; the
/// richer intermediate states stay internal to the stages that produce them.
#[derive(Debug, Clone, PartialEq)]
pub struct Detonation {
    pub reaction_type: ReactionType,
    /// Loading density [g/cc].
    pub density: f64,
    /// Mixture molecular weight [g/mol].
    pub molecular_weight: f64,
    /// Detonation velocity [m/s].
    pub velocity: f64,
    /// Detonation pressure [GPa].
    pub pressure: f64,
    /// Detonation heat [cal/g].
    pub heat: f64,
    /// CJ polytropic exponent.
    pub gamma_cj: f64,
    /// Jones parameter.
    pub jones_parameter: f64,
    /// Zero-density-limit detonation velocity [m/s].
    pub ideal_velocity: f64,
    /// Mixture covolume [km/s].
    pub covolume: f64,
}

/// Run the four pipeline stages on a composition.
///
/// Stateless and re-entrant; identical inputs give bit-identical results.
pub fn detonate(comp: &Composition) -> ModelResult<Detonation> {
    let reaction_type = ReactionType::classify(
        comp.carbon(),
        comp.hydrogen(),
        comp.oxygen(),
        comp.other_pct(),
    );
    debug!(name = comp.name(), code = reaction_type.code(), "classified oxygen balance");

    let products = ProductSet::from_composition(comp);
    let thermo = ThermoState::evaluate(&products, comp.other_pct(), comp.heat_of_formation())?;
    debug!(
        q_cal_g = thermo.heat(),
        d0_m_s = thermo.ideal_velocity(),
        "thermochemistry evaluated"
    );

    let cj = CjState::solve(&thermo, comp.density())?;
    debug!(d_m_s = cj.velocity_m_s(), p_gpa = cj.pressure_gpa(), "CJ point solved");

    Ok(Detonation {
        reaction_type,
        density: comp.density(),
        molecular_weight: thermo.molecular_weight(),
        velocity: cj.velocity_m_s(),
        pressure: cj.pressure_gpa(),
        heat: cj.specific_heat() / CAL_PER_G_TO_J_PER_KG,
        gamma_cj: cj.gamma(),
        jones_parameter: cj.jones_parameter(),
        ideal_velocity: thermo.ideal_velocity(),
        covolume: thermo.covolume(),
    })
}
