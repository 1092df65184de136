//! Human-readable trace of a probe run.

use super::model::{Credentials, ProbeTarget};
use std::io::{self, Write};

const UNSET: &str = "<unset>";

pub fn write_summary<W: Write>(
    out: &mut W,
    credentials: &Credentials,
    endpoint: &str,
    authorization: &str,
) -> io::Result<()> {
    writeln!(out, "AppID: {}", credentials.app_id.as_deref().unwrap_or(UNSET))?;
    writeln!(
        out,
        "Access Token: {}",
        credentials.access_token.as_deref().unwrap_or(UNSET)
    )?;
    writeln!(out, "Cluster: {}", credentials.cluster.as_deref().unwrap_or(UNSET))?;
    writeln!(out, "Endpoint: {}", endpoint)?;
    writeln!(
        out,
        "Headers: Authorization: {}, Content-Type: application/json",
        authorization
    )
}

pub fn write_probe_start<W: Write>(out: &mut W, target: &ProbeTarget) -> io::Result<()> {
    if *target == ProbeTarget::Baseline {
        writeln!(out)?;
        writeln!(out, "Testing with correct values:")?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Testing {} with value: {}",
        target.field_name(),
        target.override_value().unwrap_or("[actual value]")
    )
}

pub fn write_request<W: Write>(out: &mut W, request_json: &str) -> io::Result<()> {
    writeln!(out, "Request JSON: {}", request_json)
}

pub fn write_response<W: Write>(out: &mut W, status: u16, body: &str) -> io::Result<()> {
    writeln!(out, "Status code: {}", status)?;
    writeln!(out, "Response: {}", body)
}
