use crate::domain::probe::ProbeError;

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Probe failed: {0}")]
    Probe(#[from] ProbeError),
}

impl AppError {
    /// Short category label used when logging the failure that ended a run
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Probe(err) => err.category(),
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;
