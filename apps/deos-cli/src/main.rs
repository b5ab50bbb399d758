use clap::Parser;
use deos_model::{Composition, ModelError, detonate};
use deos_results::{DetonationRecord, ReportStore, ResultsError};
use tracing::info;

/// CLI error type that wraps errors from the backend crates.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Results error: {0}")]
    Results(#[from] ResultsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

/// Defaults reproduce the PBX9502 reference dataset at 1.90 g/cc.
#[derive(Parser)]
#[command(name = "deos-cli")]
#[command(about = "DEoS - detonation velocity and pressure from elemental composition", long_about = None)]
struct Cli {
    /// Explosive name (no blanks)
    #[arg(long, default_value = "PBX9502")]
    name: String,

    /// Density [g/cc], must exceed 1
    #[arg(long, default_value_t = 1.90)]
    rho: f64,

    /// Carbon [mol]
    #[arg(long, default_value_t = 2.30)]
    carbon: f64,

    /// Hydrogen [mol]
    #[arg(long, default_value_t = 2.23)]
    hydrogen: f64,

    /// Nitrogen [mol]
    #[arg(long, default_value_t = 2.21)]
    nitrogen: f64,

    /// Oxygen [mol]
    #[arg(long, default_value_t = 2.21)]
    oxygen: f64,

    /// Weight percent of other elements (Cl/F/P/Si), must be below 10
    #[arg(long, default_value_t = 3.81)]
    other_pct: f64,

    /// Standard enthalpy of formation [cal/g] at 1 atm, 298 K
    #[arg(long, default_value_t = -205.5, allow_hyphen_values = true)]
    heat_of_formation: f64,

    /// Output file stem; defaults to <name>__<rho>
    #[arg(short, long)]
    output: Option<String>,

    /// Print the record as JSON to stdout instead of the summary
    #[arg(long)]
    json: bool,
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let comp = Composition::new(
        &cli.name,
        cli.rho,
        cli.carbon,
        cli.hydrogen,
        cli.nitrogen,
        cli.oxygen,
        cli.other_pct,
        cli.heat_of_formation,
    )?;

    println!("name = {}", comp.name());
    println!("rho (g/cc) = {}", comp.density());
    println!("C = {}", comp.carbon());
    println!("H = {}", comp.hydrogen());
    println!("N = {}", comp.nitrogen());
    println!("O = {}", comp.oxygen());
    println!("weight percent other elements = {}", comp.other_pct());
    println!("enthalpy standard (cal/g) = {}", comp.heat_of_formation());

    let result = detonate(&comp)?;
    let record = DetonationRecord::new(comp.name(), &result);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("results:");
        println!("D (m/s) = {:.1}", record.d_m_s);
        println!("P (GPa) = {:.1}", record.p_gpa);
    }

    let stem = cli
        .output
        .unwrap_or_else(|| format!("{}__{}", record.name, record.rho_g_cc));
    let store = ReportStore::new(format!("{stem}.csv"));
    store.append(&record)?;
    info!(path = %store.path().display(), "record appended");
    println!("output file saved as {}", store.path().display());

    Ok(())
}
