//! Stoichiometric product speciation.

use crate::composition::Composition;
use crate::products::Product;
use deos_core::weighted_sum;

/// Mole distribution of the six detonation products.
///
/// Produced by the closed-form oxygen-balance hierarchy: oxygen goes to water
/// first, then to carbon dioxide; leftovers appear as solid carbon, molecular
/// hydrogen or molecular oxygen, and all nitrogen leaves as N₂. The hierarchy
/// does not clamp negatives; input validation in [`Composition::new`] keeps
/// the pipeline inside the regime where every split is non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductSet {
    h2o: f64,
    co2: f64,
    solid_carbon: f64,
    o2: f64,
    h2: f64,
    n2: f64,
    furnace: bool,
}

impl ProductSet {
    /// Apply the product hierarchy to a composition.
    pub fn from_composition(comp: &Composition) -> Self {
        let (c, h, n, o) = (
            comp.carbon(),
            comp.hydrogen(),
            comp.nitrogen(),
            comp.oxygen(),
        );

        let h2o = o.min(h / 2.0);
        let co2 = (0.5 * o - 0.5 * h2o).min(c);
        let h2 = 0.5 * (h - 2.0 * h2o);
        let solid_carbon = c - co2;
        let o2 = 0.5 * (o - 2.0 * co2 - h2o);
        let n2 = n / 2.0;

        // Hydrogen-free C/N/O fuels take a covolume correction downstream.
        let furnace = h == 0.0 && c != 0.0 && n != 0.0 && o != 0.0;

        Self {
            h2o,
            co2,
            solid_carbon,
            o2,
            h2,
            n2,
            furnace,
        }
    }

    /// Moles of a product species.
    pub fn moles(&self, product: Product) -> f64 {
        match product {
            Product::H2O => self.h2o,
            Product::CO2 => self.co2,
            Product::SolidCarbon => self.solid_carbon,
            Product::O2 => self.o2,
            Product::H2 => self.h2,
            Product::N2 => self.n2,
        }
    }

    /// Iterate over all (product, moles) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Product, f64)> + '_ {
        Product::ALL.iter().map(move |&p| (p, self.moles(p)))
    }

    /// Product mixture molecular weight Σ nᵢ·Mᵢ [g/mol].
    pub fn molecular_weight(&self) -> f64 {
        weighted_sum(self.iter().map(|(p, n)| (n, p.molecular_weight())))
    }

    /// Net formation enthalpy Σ nᵢ·ΔHfᵢ [kcal].
    pub fn formation_enthalpy(&self) -> f64 {
        weighted_sum(self.iter().map(|(p, n)| (n, p.formation_enthalpy())))
    }

    /// Unscaled covolume sum Σ nᵢ·covᵢ.
    pub fn covolume_sum(&self) -> f64 {
        weighted_sum(self.iter().map(|(p, n)| (n, p.covolume())))
    }

    /// Whether the hydrogen-free covolume correction applies.
    pub fn furnace_correction(&self) -> bool {
        self.furnace
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deos_core::{Tolerances, nearly_equal};

    fn tol() -> Tolerances {
        Tolerances {
            abs: 1e-10,
            rel: 1e-10,
        }
    }

    #[test]
    fn pbx9502_split() {
        let comp =
            Composition::new("PBX9502", 1.90, 2.30, 2.23, 2.21, 2.21, 3.81, -205.5).unwrap();
        let products = ProductSet::from_composition(&comp);

        // Water takes H/2 = 1.115 (oxygen is plentiful at 2.21)
        assert!(nearly_equal(products.moles(Product::H2O), 1.115, tol()));
        assert!(nearly_equal(products.moles(Product::CO2), 0.5475, tol()));
        assert!(nearly_equal(products.moles(Product::H2), 0.0, tol()));
        assert!(nearly_equal(products.moles(Product::SolidCarbon), 1.7525, tol()));
        assert!(nearly_equal(products.moles(Product::O2), 0.0, tol()));
        assert!(nearly_equal(products.moles(Product::N2), 1.105, tol()));
        assert!(!products.furnace_correction());
    }

    #[test]
    fn oxygen_rich_fuel_leaves_molecular_oxygen() {
        // C=1, H=2, O=4: water 1, CO2 1, O2 left over
        let comp = Composition::new("rich", 1.5, 1.0, 2.0, 0.0, 4.0, 0.0, 0.0).unwrap();
        let products = ProductSet::from_composition(&comp);

        assert!(nearly_equal(products.moles(Product::H2O), 1.0, tol()));
        assert!(nearly_equal(products.moles(Product::CO2), 1.0, tol()));
        assert!(nearly_equal(products.moles(Product::SolidCarbon), 0.0, tol()));
        assert!(nearly_equal(products.moles(Product::O2), 0.5, tol()));
    }

    #[test]
    fn furnace_flag_requires_all_of_c_n_o_and_no_h() {
        let flagged = Composition::new("hfree", 1.6, 1.0, 0.0, 2.0, 3.0, 0.0, 0.0).unwrap();
        assert!(ProductSet::from_composition(&flagged).furnace_correction());

        // Any hydrogen at all clears the flag
        let with_h = Composition::new("h", 1.6, 1.0, 0.1, 2.0, 3.0, 0.0, 0.0).unwrap();
        assert!(!ProductSet::from_composition(&with_h).furnace_correction());

        // Missing nitrogen clears the flag
        let no_n = Composition::new("non", 1.6, 1.0, 0.0, 0.0, 3.0, 0.0, 0.0).unwrap();
        assert!(!ProductSet::from_composition(&no_n).furnace_correction());
    }

    #[test]
    fn weighted_sums_match_manual_dot_products() {
        let comp = Composition::new("rdx", 1.80, 3.0, 6.0, 6.0, 6.0, 0.0, 72.0).unwrap();
        let products = ProductSet::from_composition(&comp);

        let mw: f64 = Product::ALL
            .iter()
            .map(|&p| products.moles(p) * p.molecular_weight())
            .sum();
        assert!(nearly_equal(products.molecular_weight(), mw, tol()));

        let cov: f64 = Product::ALL
            .iter()
            .map(|&p| products.moles(p) * p.covolume())
            .sum();
        assert!(nearly_equal(products.covolume_sum(), cov, tol()));
    }
}
