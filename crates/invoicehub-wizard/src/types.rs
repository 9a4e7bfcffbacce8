use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WizardError {
    #[error("Please upload a PDF file ({name} is {mime})")]
    UnsupportedFileType { name: String, mime: String },
    #[error("No template selected")]
    NoTemplateSelected,
    #[error("No file selected")]
    NoFileSelected,
    #[error("A run is already in progress")]
    AlreadyRunning,
    #[error("Not signed in")]
    Unauthenticated,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, WizardError>;

static NEXT_RUN_ID: AtomicU64 = AtomicU64::new(1);

/// Identifies one simulated processing run.
///
/// Reports tagged with a run id that is no longer current are dropped, so a
/// file removed mid-run can't be marked done by a late completion. Ids are
/// unique per process; `RunId(0)` is never issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RunId(pub u64);

impl RunId {
    pub fn fresh() -> Self {
        RunId(NEXT_RUN_ID.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
