//! Oxygen-balance reaction-type classification.

use std::fmt;

/// Diagnostic oxygen-balance regime of a composition.
///
/// The regime is reported alongside the detonation results but is not
/// consulted by the product hierarchy: the hierarchy's closed-form split is
/// taken as valid across all regimes. Keep that decoupling: the classifier
/// is a label, not a branch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReactionType {
    /// Elements beyond C/H/N/O present; outside the pure CHNO balance model.
    NonChno,
    /// O − H/2 − 2C ≥ 0: full combustion to CO₂/H₂O with O₂ left over.
    OxygenExcess,
    /// Oxygen sufficient for CO₂ but short of full excess.
    FullOxidation,
    /// Oxygen covers H₂O with partial CO₂ only.
    PartialOxidation,
    /// Carbon-rich, water-limited (C ≥ O).
    CarbonRich,
    /// Remaining fuel-rich compositions.
    FuelRich,
}

impl ReactionType {
    /// Classify from the stoichiometric coefficients.
    ///
    /// The oxygen-balance tests run in order of decreasing oxygen surplus;
    /// the first that holds decides the regime.
    pub fn classify(carbon: f64, hydrogen: f64, oxygen: f64, other_pct: f64) -> Self {
        if other_pct != 0.0 {
            return ReactionType::NonChno;
        }

        let water_demand = hydrogen / 2.0;
        if oxygen - water_demand - 2.0 * carbon >= 0.0 {
            ReactionType::OxygenExcess
        } else if oxygen - water_demand - carbon > 0.0 {
            ReactionType::FullOxidation
        } else if oxygen - water_demand > 0.0 {
            ReactionType::PartialOxidation
        } else if carbon >= oxygen {
            ReactionType::CarbonRich
        } else {
            ReactionType::FuelRich
        }
    }

    /// Numeric code used in the tabular output.
    pub fn code(&self) -> u8 {
        match self {
            ReactionType::NonChno => 0,
            ReactionType::OxygenExcess => 1,
            ReactionType::FullOxidation => 2,
            ReactionType::PartialOxidation => 3,
            ReactionType::CarbonRich => 4,
            ReactionType::FuelRich => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReactionType::NonChno => "non-CHNO",
            ReactionType::OxygenExcess => "oxygen excess",
            ReactionType::FullOxidation => "full oxidation",
            ReactionType::PartialOxidation => "partial oxidation",
            ReactionType::CarbonRich => "carbon rich",
            ReactionType::FuelRich => "fuel rich",
        }
    }
}

impl fmt::Display for ReactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
