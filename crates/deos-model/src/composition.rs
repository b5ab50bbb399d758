//! Explosive composition input record.

use crate::error::{ModelError, ModelResult};

/// Elemental composition of a condensed explosive.
///
/// Holds the C/H/N/O mole counts (conventionally per 100 g of explosive),
/// the weight percent of any other elements (Cl, F, P, Si), the loading
/// density and the standard enthalpy of formation at 1 atm / 298 K.
///
/// Constructed once per run through [`Composition::new`], which rejects
/// inputs outside the model's domain; immutable thereafter.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    name: String,
    density: f64,
    carbon: f64,
    hydrogen: f64,
    nitrogen: f64,
    oxygen: f64,
    other_pct: f64,
    heat_of_formation: f64,
}

impl Composition {
    /// Create a composition record.
    ///
    /// Validates the model's preconditions: density above 1 g/cc, mole
    /// counts non-negative, other-element weight percent in [0, 10), all
    /// values finite.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        density: f64,
        carbon: f64,
        hydrogen: f64,
        nitrogen: f64,
        oxygen: f64,
        other_pct: f64,
        heat_of_formation: f64,
    ) -> ModelResult<Self> {
        let values = [
            density,
            carbon,
            hydrogen,
            nitrogen,
            oxygen,
            other_pct,
            heat_of_formation,
        ];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(ModelError::InvalidInput {
                what: "non-finite value in composition",
            });
        }

        if density <= 1.0 {
            return Err(ModelError::InvalidInput {
                what: "density must exceed 1 g/cc",
            });
        }

        if carbon < 0.0 || hydrogen < 0.0 || nitrogen < 0.0 || oxygen < 0.0 {
            return Err(ModelError::InvalidInput {
                what: "negative mole count",
            });
        }

        if carbon + hydrogen + nitrogen + oxygen <= 0.0 {
            return Err(ModelError::InvalidInput {
                what: "composition has no C/H/N/O content",
            });
        }

        if !(0.0..10.0).contains(&other_pct) {
            return Err(ModelError::InvalidInput {
                what: "other-element weight percent must be in [0, 10)",
            });
        }

        Ok(Self {
            name: name.into(),
            density,
            carbon,
            hydrogen,
            nitrogen,
            oxygen,
            other_pct,
            heat_of_formation,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Loading density [g/cc].
    pub fn density(&self) -> f64 {
        self.density
    }

    /// Carbon [mol].
    pub fn carbon(&self) -> f64 {
        self.carbon
    }

    /// Hydrogen [mol].
    pub fn hydrogen(&self) -> f64 {
        self.hydrogen
    }

    /// Nitrogen [mol].
    pub fn nitrogen(&self) -> f64 {
        self.nitrogen
    }

    /// Oxygen [mol].
    pub fn oxygen(&self) -> f64 {
        self.oxygen
    }

    /// Weight percent of elements outside C/H/N/O.
    pub fn other_pct(&self) -> f64 {
        self.other_pct
    }

    /// Standard enthalpy of formation [cal/g].
    pub fn heat_of_formation(&self) -> f64 {
        self.heat_of_formation
    }
}
