//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatlens::ChatlensError;
use chatlens::ai::{ContentData, OpenAiAnalyzer, analyze_with_ai};
use chatlens::cli::Args;
use chatlens::config::AiConfig;
use chatlens::core::{LogAnalysis, Report, analyze_local};
use chatlens::format::{OutputFormat, to_format_string, write_to_format};
use chatlens::input::{RawLog, UploadCache};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<(), ChatlensError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    init_tracing(args.verbose);

    if args.clear_cache {
        let cache = upload_cache(&args)?;
        cache.clear()?;
        eprintln!("🧹 Cleared {}", cache.path().display());
        return Ok(());
    }

    let log = load_input(&args)?;
    if args.cache {
        let cache = upload_cache(&args)?;
        cache.store(&log)?;
        eprintln!("🗄️  Cached at {}", cache.path().display());
    }

    let lib_format: OutputFormat = args.format.into();

    // Status goes to stderr so the report can be piped
    eprintln!("📦 chatlens v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("📖 Input:   {} ({} bytes)", log.source().unwrap_or("-"), log.len());
    eprintln!("🔎 Mode:    {}", args.mode);
    eprintln!("📄 Format:  {}", lib_format);
    eprintln!();

    let local = if args.mode.runs_local() {
        run_local(&log)
    } else {
        None
    };

    let ai = if args.mode.runs_ai() {
        run_ai(&args, &log).await
    } else {
        None
    };

    let mut report = Report::new().with_local(local).with_ai(ai);
    if let Some(source) = log.source() {
        report = report.with_source(source);
    }

    match &args.output {
        Some(path) => {
            write_to_format(&report, path, lib_format)?;
            eprintln!("💾 Saved to {}", path);
        }
        None => print!("{}", to_format_string(&report, lib_format)?),
    }

    eprintln!("✅ Done in {:.2}s", total_start.elapsed().as_secs_f64());
    Ok(())
}

/// Installs the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "chatlens=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn upload_cache(args: &Args) -> Result<UploadCache, ChatlensError> {
    match &args.cache_dir {
        Some(dir) => Ok(UploadCache::new(dir)),
        None => UploadCache::default_location()
            .ok_or_else(|| ChatlensError::missing_config("CHATLENS_CACHE_DIR")),
    }
}

fn load_input(args: &Args) -> Result<RawLog, ChatlensError> {
    if args.from_cache {
        return upload_cache(args)?
            .load()?
            .ok_or_else(|| ChatlensError::invalid_input("the upload cache is empty"));
    }

    match &args.input {
        Some(path) => RawLog::from_path(path),
        None => Err(ChatlensError::invalid_input(
            "no file given (pass a chat log path or --from-cache)",
        )),
    }
}

fn run_local(log: &RawLog) -> Option<LogAnalysis> {
    eprintln!("⏳ Categorizing entries...");
    let start = Instant::now();
    let analysis = analyze_local(log.text());

    match &analysis {
        Some(a) => eprintln!(
            "   {} links, {} quotes, {} reading items, {} notes, {} timestamps ({:.2}s)",
            a.categories.links.len(),
            a.categories.quotes.len(),
            a.categories.reading_lists.len(),
            a.categories.personal_notes.len(),
            a.total_timestamps(),
            start.elapsed().as_secs_f64()
        ),
        None => eprintln!("   Log is empty, nothing to categorize"),
    }
    analysis
}

async fn run_ai(args: &Args, log: &RawLog) -> Option<ContentData> {
    let config = match ai_config(args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("⚠️  AI analysis skipped: {}", e);
            return None;
        }
    };

    let analyzer = match OpenAiAnalyzer::new(config) {
        Ok(analyzer) => analyzer,
        Err(e) => {
            eprintln!("⚠️  AI analysis skipped: {}", e);
            return None;
        }
    };

    eprintln!("🤖 Requesting analysis from {}...", analyzer.config().model);
    let start = Instant::now();
    let data = analyze_with_ai(&analyzer, log.text()).await;

    match &data {
        Some(_) => eprintln!("   Received in {:.2}s", start.elapsed().as_secs_f64()),
        None if log.is_empty() => eprintln!("   Log is empty, nothing to send"),
        None => eprintln!("⚠️  AI analysis failed, continuing without it"),
    }
    data
}

fn ai_config(args: &Args) -> Result<AiConfig, ChatlensError> {
    let mut config = AiConfig::from_env()?;
    if let Some(model) = &args.model {
        config = config.with_model(model);
    }
    if let Some(base_url) = &args.base_url {
        config = config.with_base_url(base_url);
    }
    if let Some(secs) = args.timeout {
        config = config.with_timeout_secs(secs);
    }
    Ok(config)
}
