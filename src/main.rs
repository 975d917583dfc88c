use clap::Parser;

use file_update::applier::{self, Applied, Request};
use file_update::cli::Cli;
use file_update::completer::openai::OpenAiCompleter;
use file_update::consts::format_number;
use file_update::error::ApplyError;
use file_update::spinner::Spinner;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Missing required flags exit here, before any I/O
    let cli = Cli::parse();

    match run(cli).await {
        Ok(applied) => {
            if let Some(usage) = applied.usage {
                tracing::info!(
                    "tokens: {} in, {} out, {} total",
                    format_number(usage.input_tokens),
                    format_number(usage.output_tokens),
                    format_number(usage.total())
                );
            }
            tracing::info!(
                path = %applied.output_path.display(),
                bytes = applied.bytes_written,
                "done"
            );
            println!("File updated successfully.");
        }
        Err(e) => {
            tracing::debug!(error = ?e, "run failed");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<Applied, ApplyError> {
    let api_key = cli.credential()?;
    let request = Request::new(cli.file, cli.instruction)?;
    let completer = OpenAiCompleter::new(api_key, Some(cli.model), Some(cli.base_url));

    tracing::debug!(
        file = %request.file_path().display(),
        model = completer.model(),
        "applying instruction"
    );

    let spinner = Spinner::start_if_tty("applying instruction");
    let result = applier::apply(&completer, &request).await;
    if let Some(spinner) = spinner {
        spinner.stop().await;
    }
    result
}
