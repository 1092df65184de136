use crate::infrastructure::http::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("failed to serialize request: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

impl ProbeError {
    pub fn category(&self) -> &'static str {
        match self {
            Self::Transport(err) => err.category(),
            Self::Serialization(_) => "serialization",
            Self::Output(_) => "output",
        }
    }

    /// True when the request never produced an HTTP response
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Transport(err) if err.is_network())
    }
}
