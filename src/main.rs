mod cli;
mod core;
mod error;

use crate::cli::{Cli, OutputFormat};
use crate::core::{
    ErrorCode, FetchOutcome, TranscriptService, YouTubeSource, extract_video_id,
};
use crate::error::Result;
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::{debug, error};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    let outcome = run(&cli).await;

    match emit(&outcome, cli.output) {
        Ok(()) => ExitCode::from(outcome.exit_status()),
        Err(e) => {
            error!(error = %e, "failed to write result");
            ExitCode::FAILURE
        }
    }
}

// Logs go to stderr; stdout is reserved for the JSON result. Silent unless RUST_LOG says otherwise.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transcript_fetch=error".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn run(cli: &Cli) -> FetchOutcome {
    let Some(video_id) = extract_video_id(&cli.url) else {
        debug!(input = %cli.url, "no video id found");
        return FetchOutcome::invalid_url(&cli.url);
    };
    debug!(%video_id, "processing video");

    let source = match YouTubeSource::new(cli.preserve_formatting) {
        Ok(source) => source,
        Err(e) => {
            return FetchOutcome::failure(
                ErrorCode::NetworkError,
                format!("Network or API error: {e}"),
            );
        }
    };

    let outcome = TranscriptService::new(source, cli.language_list())
        .fetch(&video_id)
        .await;
    if let Some(code) = outcome.error_code() {
        debug!(%video_id, %code, "transcript unavailable");
    }
    outcome
}

fn emit(outcome: &FetchOutcome, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => outcome.to_json()?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unparseable_input_is_invalid_url() {
        let cli = Cli::try_parse_from(["transcript-fetch", "--url", "not a url"]).expect("parses");

        let outcome = run(&cli).await;

        assert_eq!(outcome.error_code(), Some(ErrorCode::InvalidUrl));
        assert_eq!(outcome.exit_status(), 1);

        let value: serde_json::Value =
            serde_json::from_str(&outcome.to_json().expect("serializes")).expect("valid json");
        assert_eq!(value["success"], serde_json::json!(false));
        assert_eq!(value["error_code"], serde_json::json!("INVALID_URL"));
        assert_eq!(
            value["error"],
            serde_json::json!("Could not extract video ID from: not a url")
        );
    }
}
