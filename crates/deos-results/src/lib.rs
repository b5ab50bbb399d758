//! deos-results: detonation report records and append-mode persistence.

pub mod report;
pub mod types;

pub use report::{HEADER, ReportStore};
pub use types::DetonationRecord;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
