use byteplus_tts_probe::domain::probe::{ProbeError, ProbeService, ProbeTarget};
use byteplus_tts_probe::error::AppResult;
use byteplus_tts_probe::infrastructure::config::{Config, LogFormat};
use byteplus_tts_probe::infrastructure::http::ReqwestTransport;
use std::process::ExitCode;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize logging
    init_logging(&config);

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, category = e.category(), "Probe run aborted");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &Config) -> AppResult<()> {
    tracing::info!(
        endpoint = %config.tts_url,
        timeout_secs = ?config.http_timeout_secs,
        "Starting credential probes"
    );

    let transport = ReqwestTransport::new(config.http_timeout()).map_err(ProbeError::from)?;
    let service = ProbeService::from_config(config, Arc::new(transport));

    let mut stdout = std::io::stdout();
    service.write_summary(&mut stdout)?;

    let outcomes = service
        .run_sequence(&ProbeTarget::default_sequence(), &mut stdout)
        .await?;

    let accepted = outcomes.iter().filter(|o| o.accepted()).count();
    tracing::info!(
        probes = outcomes.len(),
        accepted = accepted,
        "Credential probes finished"
    );

    Ok(())
}

fn init_logging(config: &Config) {
    // stdout carries the probe report, diagnostics go to stderr
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "byteplus_tts_probe=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "byteplus_tts_probe=info".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
