use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_UID: &str = "388808087185088";
pub const DEFAULT_VOICE_TYPE: &str = "BV027_streaming";
pub const SAMPLE_TEXT: &str = "Welcome to BytePlus Speech Synthesis!";

/// Reply code the speech API returns for a successful query
pub const SUCCESS_CODE: i64 = 3000;

/// Which credential field a probe corrupts, carrying the value to send instead
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeTarget {
    Baseline,
    AppId(String),
    Token(String),
    Cluster(String),
}

impl ProbeTarget {
    /// Field name as printed in the report
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Baseline => "none",
            Self::AppId(_) => "appid",
            Self::Token(_) => "token",
            Self::Cluster(_) => "cluster",
        }
    }

    pub fn override_value(&self) -> Option<&str> {
        match self {
            Self::Baseline => None,
            Self::AppId(value) | Self::Token(value) | Self::Cluster(value) => Some(value),
        }
    }

    /// The valid baseline followed by one invalid value per credential field
    pub fn default_sequence() -> Vec<ProbeTarget> {
        vec![
            Self::Baseline,
            Self::AppId("INVALID_APPID".to_string()),
            Self::Token("INVALID_TOKEN".to_string()),
            Self::Cluster("INVALID_CLUSTER".to_string()),
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub app_id: Option<String>,
    pub access_token: Option<String>,
    pub cluster: Option<String>,
}

impl Credentials {
    /// Copy of these credentials with only the targeted field replaced
    pub fn with_override(&self, target: &ProbeTarget) -> Credentials {
        let mut credentials = self.clone();
        match target {
            ProbeTarget::Baseline => {}
            ProbeTarget::AppId(value) => credentials.app_id = Some(value.clone()),
            ProbeTarget::Token(value) => credentials.access_token = Some(value.clone()),
            ProbeTarget::Cluster(value) => credentials.cluster = Some(value.clone()),
        }
        credentials
    }
}

/// JSON body for POST /api/v1/tts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeRequest {
    pub app: AppSection,
    pub user: UserSection,
    pub audio: AudioSection,
    pub request: RequestSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSection {
    pub appid: Option<String>,
    pub token: Option<String>,
    pub cluster: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSection {
    pub uid: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSection {
    pub voice: String,
    pub voice_type: String,
    pub encoding: String,
    pub speed: u32,
    pub volume: u32,
    pub pitch: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSection {
    pub reqid: String,
    pub text: String,
    pub text_type: String,
    pub operation: String,
}

impl ProbeRequest {
    /// Build a request with a freshly generated reqid
    pub fn new(credentials: &Credentials, voice_type: &str) -> Self {
        Self {
            app: AppSection {
                appid: credentials.app_id.clone(),
                token: credentials.access_token.clone(),
                cluster: credentials.cluster.clone(),
            },
            user: UserSection {
                uid: DEFAULT_UID.to_string(),
            },
            audio: AudioSection {
                voice: "other".to_string(),
                voice_type: voice_type.to_string(),
                encoding: "mp3".to_string(),
                speed: 10,
                volume: 10,
                pitch: 10,
            },
            request: RequestSection {
                reqid: Uuid::new_v4().to_string(),
                text: SAMPLE_TEXT.to_string(),
                text_type: "plain".to_string(),
                operation: "query".to_string(),
            },
        }
    }
}

/// Envelope the speech API answers with. Every field is optional because
/// error replies only carry a subset of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiReply {
    pub reqid: Option<String>,
    pub code: Option<i64>,
    pub message: Option<String>,
    pub operation: Option<String>,
    pub sequence: Option<i64>,
    /// Base64 audio, present on success
    pub data: Option<String>,
}

impl ApiReply {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(SUCCESS_CODE)
    }
}

/// What a single probe sent and got back
#[derive(Debug, Clone)]
pub struct ProbeOutcome {
    pub target: ProbeTarget,
    pub request: ProbeRequest,
    pub status: u16,
    pub body: String,
    pub reply: Option<ApiReply>,
}

impl ProbeOutcome {
    pub fn accepted(&self) -> bool {
        self.reply.as_ref().is_some_and(ApiReply::is_success)
    }
}
