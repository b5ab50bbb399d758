//! Append-mode tabular report output.

use crate::ResultsResult;
use crate::types::DetonationRecord;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Column header matching the record field order.
pub const HEADER: [&str; 11] = [
    "name",
    "rho (g/cc)",
    "mw (g)",
    "typ",
    "D (m/s)",
    "P (GPa)",
    "Q (cal/g)",
    "Gamma_cj",
    "Jones parameter",
    "Do (m/s)",
    "w (km/s)",
];

/// Writes detonation records to a comma-separated report file.
///
/// Every append writes a header row followed by one data row; repeated runs
/// accumulate header+data blocks in the same file.
#[derive(Debug, Clone)]
pub struct ReportStore {
    path: PathBuf,
}

impl ReportStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one header+data block to the report file, creating it on first
    /// use.
    pub fn append(&self, record: &DetonationRecord) -> ResultsResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;

        writeln!(file, "{}", HEADER.join(","))?;
        writeln!(
            file,
            "{},{},{},{},{},{},{},{},{},{},{}",
            record.name,
            record.rho_g_cc,
            record.mw_g,
            record.reaction_type,
            record.d_m_s,
            record.p_gpa,
            record.q_cal_g,
            record.gamma_cj,
            record.jones_parameter,
            record.d0_m_s,
            record.w_km_s,
        )?;

        Ok(())
    }
}
