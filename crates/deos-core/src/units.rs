// deos-core/src/units.rs

use uom::si::f64::{
    MassDensity as UomMassDensity, Pressure as UomPressure, Velocity as UomVelocity,
};

// Public canonical unit types (SI, f64)
pub type Density = UomMassDensity;
pub type Pressure = UomPressure;
pub type Velocity = UomVelocity;

#[inline]
pub fn mps(v: f64) -> Velocity {
    use uom::si::velocity::meter_per_second;
    Velocity::new::<meter_per_second>(v)
}

#[inline]
pub fn gpa(v: f64) -> Pressure {
    use uom::si::pressure::gigapascal;
    Pressure::new::<gigapascal>(v)
}

#[inline]
pub fn kg_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

pub mod constants {
    /// Thermochemical calorie: 1 cal/g = 4184 J/kg.
    pub const CAL_PER_G_TO_J_PER_KG: f64 = 4184.0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use uom::si::pressure::pascal;
    use uom::si::velocity::meter_per_second;

    #[test]
    fn constructors_smoke() {
        let _d = mps(7878.0);
        let _p = gpa(28.9);
        let _rho = kg_m3(1900.0);
    }

    #[test]
    fn gigapascal_scales_to_pascal() {
        let p = gpa(1.0);
        assert_eq!(p.get::<pascal>(), 1.0e9);
    }

    #[test]
    fn velocity_round_trip() {
        let d = mps(1828.0);
        assert_eq!(d.get::<meter_per_second>(), 1828.0);
    }
}
