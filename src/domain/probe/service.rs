use super::error::ProbeError;
use super::model::{ApiReply, Credentials, ProbeOutcome, ProbeRequest, ProbeTarget};
use super::report;
use crate::infrastructure::config::Config;
use crate::infrastructure::http::SpeechTransport;
use std::io::Write;
use std::sync::Arc;

/// Sends credential probes to the speech API and reports what comes back
pub struct ProbeService {
    transport: Arc<dyn SpeechTransport>,
    endpoint: String,
    credentials: Credentials,
    voice_type: String,
}

impl ProbeService {
    pub fn new(
        transport: Arc<dyn SpeechTransport>,
        endpoint: String,
        credentials: Credentials,
        voice_type: String,
    ) -> Self {
        Self {
            transport,
            endpoint,
            credentials,
            voice_type,
        }
    }

    pub fn from_config(config: &Config, transport: Arc<dyn SpeechTransport>) -> Self {
        Self::new(
            transport,
            config.tts_url.clone(),
            config.credentials(),
            config.voice_type.clone(),
        )
    }

    /// Always built from the configured token, never the probe override
    pub fn authorization_header(&self) -> String {
        format!(
            "Bearer;{}",
            self.credentials.access_token.as_deref().unwrap_or_default()
        )
    }

    pub fn build_request(&self, target: &ProbeTarget) -> ProbeRequest {
        ProbeRequest::new(&self.credentials.with_override(target), &self.voice_type)
    }

    pub fn write_summary<W: Write>(&self, out: &mut W) -> Result<(), ProbeError> {
        report::write_summary(
            out,
            &self.credentials,
            &self.endpoint,
            &self.authorization_header(),
        )?;
        Ok(())
    }

    /// Run one probe.
    ///
    /// Any HTTP status is a successful probe; only a missing response is an error.
    pub async fn probe<W: Write>(
        &self,
        target: &ProbeTarget,
        out: &mut W,
    ) -> Result<ProbeOutcome, ProbeError> {
        report::write_probe_start(out, target)?;

        let request = self.build_request(target);
        report::write_request(out, &serde_json::to_string_pretty(&request)?)?;

        tracing::info!(
            field = target.field_name(),
            reqid = %request.request.reqid,
            endpoint = %self.endpoint,
            "Sending probe"
        );

        let start_time = std::time::Instant::now();
        let response = self
            .transport
            .post_json(&self.endpoint, &self.authorization_header(), &request)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    category = e.category(),
                    field = target.field_name(),
                    "Probe request failed before a response was received"
                );
                ProbeError::Transport(e)
            })?;

        report::write_response(out, response.status, &response.body)?;

        let reply = ApiReply::parse(&response.body);
        tracing::info!(
            field = target.field_name(),
            status = response.status,
            code = ?reply.as_ref().and_then(|r| r.code),
            message = ?reply.as_ref().and_then(|r| r.message.as_deref()),
            latency_ms = start_time.elapsed().as_millis(),
            "Probe completed"
        );

        Ok(ProbeOutcome {
            target: target.clone(),
            request,
            status: response.status,
            body: response.body,
            reply,
        })
    }

    /// Run probes one after another, stopping at the first transport failure
    pub async fn run_sequence<W: Write>(
        &self,
        targets: &[ProbeTarget],
        out: &mut W,
    ) -> Result<Vec<ProbeOutcome>, ProbeError> {
        let mut outcomes = Vec::with_capacity(targets.len());
        for target in targets {
            outcomes.push(self.probe(target, out).await?);
        }
        Ok(outcomes)
    }
}
