mod report;
mod rewrite;

use clap::{Parser, Subcommand};
use listopt_core::{AnalysisResult, AppConfig};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use crate::rewrite::RewriteKind;

#[derive(Debug, Parser)]
#[command(name = "listopt")]
#[command(about = "Analyze a marketplace listing and suggest content improvements")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch a listing and request optimization suggestions
    Analyze {
        /// Product page address or 10-character catalog identifier
        input: String,

        /// Print the raw JSON result instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Print a canned sample analysis without contacting any service
    Demo {
        /// Print the raw JSON result instead of a report
        #[arg(long)]
        json: bool,
    },
    /// Rewrite a single listing field
    Rewrite {
        /// Which field to rewrite
        #[arg(value_enum)]
        kind: RewriteKind,

        /// Current text; repeat once per bullet when rewriting bullets
        #[arg(long = "text", required = true)]
        text: Vec<String>,

        /// Short description of the product for context
        #[arg(long)]
        context: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    match cli.command {
        Commands::Demo { json } => print_result(&listopt_core::demo::sample_analysis(), json),
        Commands::Analyze { input, json } => {
            let config = init_runtime()?;
            run_analyze(&config, &input, json).await
        }
        Commands::Rewrite {
            kind,
            text,
            context,
        } => {
            let config = init_runtime()?;
            rewrite::run_rewrite(&config, kind, &text, &context).await
        }
    }
}

/// Loads config and installs the log subscriber. Logs go to stderr so that
/// `--json` output on stdout stays machine-readable.
fn init_runtime() -> anyhow::Result<AppConfig> {
    let config = listopt_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(config)
}

/// Runs one analysis. Ctrl-C abandons the in-flight request.
async fn run_analyze(config: &AppConfig, input: &str, json: bool) -> anyhow::Result<()> {
    let analyzer = listopt_pipeline::live_analyzer(config)?;

    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });

    let result = analyzer
        .analyze_cancellable(input, &cancel)
        .await
        .map_err(|failure| {
            let kind = failure.kind;
            anyhow::Error::new(failure).context(format!("analysis failed ({kind})"))
        })?;

    print_result(&result, json)
}

fn print_result(result: &AnalysisResult, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        print!("{}", report::Report(result));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
