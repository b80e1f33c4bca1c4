//! Parse a soil or petiole lab report and print the normalized parameters as JSON.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vine_lab_core::TestType;
use vine_lab_llm::{LlmConfig, OpenAiBackend, ReportFile, ReportParser};

#[derive(Parser, Debug)]
#[command(name = "parse-report", about = "Extract lab parameters from a soil/petiole report")]
struct Args {
    /// Report file (PDF or image)
    file: PathBuf,

    /// Test type: soil or petiole
    #[arg(short, long, default_value = "soil")]
    test_type: TestType,

    /// Override the model from the environment
    #[arg(long)]
    model: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vine_lab_llm=info,vine_lab_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = LlmConfig::from_env()?;
    if let Some(model) = args.model {
        config = config.with_model(model);
    }
    tracing::info!(model = %config.model, base_url = %config.base_url, "using AI service");

    let file = ReportFile::from_path(&args.file)
        .with_context(|| format!("Failed to load report {}", args.file.display()))?;

    let parser = ReportParser::new(OpenAiBackend::new(config));
    let report = parser
        .parse_report(&file, args.test_type)
        .await
        .context("Failed to parse report");
    parser.wait_for_cleanup().await;
    let report = report?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");

    Ok(())
}
