pub mod error;
pub mod model;
pub mod report;
pub mod service;

pub use error::ProbeError;
pub use model::{
    ApiReply, Credentials, ProbeOutcome, ProbeRequest, ProbeTarget, DEFAULT_VOICE_TYPE,
};
pub use service::ProbeService;
