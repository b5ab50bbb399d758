//! Result record types.

use deos_model::Detonation;
use serde::{Deserialize, Serialize};

/// Flat record appended to the report file.
///
/// Field order matches the tabular header; numeric fields are rounded to two
/// decimals at capture time so every downstream rendering (CSV, JSON, console)
/// agrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetonationRecord {
    pub name: String,
    pub rho_g_cc: f64,
    pub mw_g: f64,
    pub reaction_type: u8,
    pub d_m_s: f64,
    pub p_gpa: f64,
    pub q_cal_g: f64,
    pub gamma_cj: f64,
    pub jones_parameter: f64,
    pub d0_m_s: f64,
    pub w_km_s: f64,
}

impl DetonationRecord {
    /// Capture a pipeline result under the given explosive name.
    pub fn new(name: impl Into<String>, result: &Detonation) -> Self {
        Self {
            name: name.into(),
            rho_g_cc: round2(result.density),
            mw_g: round2(result.molecular_weight),
            reaction_type: result.reaction_type.code(),
            d_m_s: round2(result.velocity),
            p_gpa: round2(result.pressure),
            q_cal_g: round2(result.heat),
            gamma_cj: round2(result.gamma_cj),
            jones_parameter: round2(result.jones_parameter),
            d0_m_s: round2(result.ideal_velocity),
            w_km_s: round2(result.covolume),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use deos_model::{Composition, detonate};

    #[test]
    fn record_rounds_to_two_decimals() {
        let comp =
            Composition::new("PBX9502", 1.90, 2.30, 2.23, 2.21, 2.21, 3.81, -205.5).unwrap();
        let result = detonate(&comp).unwrap();
        let record = DetonationRecord::new(comp.name(), &result);

        for v in [
            record.rho_g_cc,
            record.mw_g,
            record.d_m_s,
            record.p_gpa,
            record.q_cal_g,
            record.gamma_cj,
            record.jones_parameter,
            record.d0_m_s,
            record.w_km_s,
        ] {
            assert_eq!(v, round2(v), "field not rounded: {v}");
        }

        assert_eq!(record.name, "PBX9502");
        assert_eq!(record.reaction_type, 0);
    }

    #[test]
    fn round2_truncates_and_carries() {
        assert_eq!(round2(3.1842), 3.18);
        assert_eq!(round2(3.1862), 3.19);
        assert_eq!(round2(-205.5), -205.5);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn record_serializes_with_named_fields() {
        let comp = Composition::new("RDX", 1.80, 3.0, 6.0, 6.0, 6.0, 0.0, 72.0).unwrap();
        let record = DetonationRecord::new("RDX", &detonate(&comp).unwrap());
        let json = serde_json::to_string(&record).unwrap();

        assert!(json.contains("\"d_m_s\""));
        assert!(json.contains("\"jones_parameter\""));

        let back: DetonationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
