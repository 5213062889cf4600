mod clipboard;
mod config;
mod date;
mod error;
mod fetch;
mod parser;

use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info};

use crate::clipboard::ClipboardWriter;
use crate::config::Settings;
use crate::date::{Clock, SystemClock};
use crate::error::WodError;
use crate::fetch::Fetcher;

#[derive(Parser)]
#[command(name = "wod_scraper", version, about = "Get the workout of the day at CrossFit Potrero Hill")]
struct Cli {
    /// How many days ago the workout was (today is 0)
    #[arg(value_name = "D", default_value_t = 0, allow_negative_numbers = true)]
    delay: i64,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match Settings::load() {
        Ok(settings) => {
            let writer = clipboard::from_setting(&settings.clipboard);
            let mut stdout = std::io::stdout().lock();
            run(&SystemClock, &settings, cli.delay, &mut stdout, writer.as_ref()).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e, &mut std::io::stderr());
            ExitCode::FAILURE
        }
    }
}

/// Resolve, fetch and format one post, then print it and copy it.
/// Nothing reaches `out` or the clipboard unless every step succeeded.
async fn run(
    clock: &impl Clock,
    settings: &Settings,
    delay: i64,
    out: &mut impl Write,
    clipboard: &dyn ClipboardWriter,
) -> Result<(), WodError> {
    info!(?settings, delay, "Starting");

    let path = date::resolve(clock, delay)?;
    let fetcher = Fetcher::new(&settings.base_url, &settings.user_agent)?;
    let page = fetcher.fetch(&path).await?;
    let workout = parser::format_page(&page.body, settings.template)?;
    let text = workout.to_string();

    writeln!(out, "{}", text)?;
    writeln!(out, "Scraped from: \n{}", page.url)?;
    out.flush()?;

    clipboard::copy_best_effort(clipboard, &text);
    Ok(())
}

/// Print the single diagnostic for a failed run. Details only go to the debug log.
fn report(e: &WodError, err_out: &mut impl Write) {
    debug!(url = e.url(), error = ?e, "Scrape failed");
    let _ = writeln!(err_out, "{}", diagnostic(e));
}

/// The one line (or two) the user sees when a run fails.
fn diagnostic(e: &WodError) -> String {
    match e {
        WodError::NotFound { url, .. } => format!("ERROR: Couldn't find URL:\n{}", url),
        WodError::Unreachable { .. } => "ERROR: No internet connection".to_string(),
        other => format!("ERROR: {}", other),
    }
}
