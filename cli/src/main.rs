mod files;
mod http;
mod report;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};
use intake::{FieldId, Notice, SubmitOutcome, UploadSession};
use serde_json::json;
use tracing::Level;

use crate::report::ReportArgs;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("could not read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Field(#[from] intake::FieldError),
    #[error("{}", .0.message)]
    Notice(Notice),
    #[error("{} (missing: {})", .notice.message, field_list(.missing))]
    MissingFields { notice: Notice, missing: Vec<FieldId> },
    #[error("report endpoint returned HTTP {0}")]
    CollaboratorStatus(u16),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

fn field_list(fields: &[FieldId]) -> String {
    fields
        .iter()
        .map(|field| field.dom_id())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Parser, Debug)]
#[command(name = "intake-cli", about = "Hostel intake client: image prediction and fault reports")]
struct Cli {
    #[arg(long, env = "INTAKE_BASE_URL", default_value = "http://127.0.0.1:8000")]
    base_url: String,

    #[arg(long, env = "INTAKE_TIMEOUT_SECS", help = "Request timeout; none by default")]
    timeout_secs: Option<u64>,

    #[arg(long, global = true, help = "Print machine-readable JSON")]
    json: bool,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone)]
struct CliContext {
    base_url: String,
    json: bool,
    client: reqwest::Client,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Send an image to `POST /predict` and print the returned label.
    Predict { image: PathBuf },
    /// Validate a fault report and optionally deliver it.
    Report(ReportArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let ctx = CliContext {
        base_url: cli.base_url,
        json: cli.json,
        client: http_client(cli.timeout_secs)?,
    };

    match cli.command {
        Command::Predict { image } => run_predict(&ctx, &image).await,
        Command::Report(args) => run_report(&ctx, args).await,
    }
}

fn http_client(timeout_secs: Option<u64>) -> Result<reqwest::Client, CliError> {
    let mut builder = reqwest::Client::builder();
    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    Ok(builder.build()?)
}

async fn run_predict(ctx: &CliContext, image: &std::path::Path) -> Result<(), CliError> {
    let mut session: UploadSession = UploadSession::new();
    session.select_file(files::read_attachment(image)?);

    let ticket = session.begin_submit().map_err(|rejected| {
        CliError::Notice(
            rejected
                .notice()
                .unwrap_or_else(|| Notice::warning("a prediction is already running")),
        )
    })?;
    let result = http::predict(&ctx.client, &ctx.base_url, ticket.file()).await;
    if let Err(err) = &result {
        tracing::warn!(error = %err, "prediction failed");
    }
    if let Some(notice) = session.finish_submit(&ticket, result) {
        return Err(CliError::Notice(notice));
    }

    let label = session.result_label().unwrap_or_default();
    if ctx.json {
        print_json(&json!({ "label": label }))?;
    } else {
        println!("{label}");
    }
    Ok(())
}

async fn run_report(ctx: &CliContext, args: ReportArgs) -> Result<(), CliError> {
    let mut form = report::fill_form(&args)?;
    let outcome = form.submit();
    let notice = outcome.notice();

    let report = match outcome {
        SubmitOutcome::Rejected { missing } => {
            return Err(CliError::MissingFields { notice, missing });
        }
        SubmitOutcome::Submitted(report) => report,
    };

    if let Some(url) = &args.submit_to {
        http::submit_report(&ctx.client, url, &report).await?;
        tracing::info!(%url, "report delivered");
    }

    if ctx.json {
        print_json(&json!({ "notice": notice, "report": report }))?;
    } else {
        println!("{}", notice.message);
    }
    Ok(())
}

fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
