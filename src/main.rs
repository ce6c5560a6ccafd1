//! seoscope: Content Scoring & Competitor Keyword Analysis CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use seoscope::competitor::{is_http_available, CompetitorAggregator, HttpFetcher, HttpSearch, PageFetcher};
use seoscope::config::{load_config, Config, CONFIG_FILENAME};
use seoscope::reporter::{ConsoleReporter, JsonReporter};
use seoscope::{parse_keywords, ContentEngine, ContentReport, Document};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// seoscope: score content against target keywords and compare with competitors
#[derive(Parser, Debug)]
#[command(name = "seoscope")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Text or HTML file to analyze ("-" or omitted reads stdin)
    #[arg(conflicts_with = "url")]
    path: Option<PathBuf>,

    /// Fetch and analyze a web page instead of a file
    #[arg(long)]
    url: Option<String>,

    /// Comma-separated target keywords
    #[arg(long, short)]
    keywords: Option<String>,

    /// Niche to search competitors for
    #[arg(long, short)]
    niche: Option<String>,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (score only)
    #[arg(long, short)]
    quiet: bool,

    /// Verbose output and debug logging
    #[arg(long, short)]
    verbose: bool,

    /// Skip competitor aggregation even when a niche is given
    #[arg(long)]
    no_competitors: bool,

    /// Minimum SEO score (exit 1 if below)
    #[arg(long, allow_negative_numbers = true)]
    min_score: Option<f64>,

    /// Length of the ranked keyword lists
    #[arg(long, value_name = "K")]
    top_k: Option<usize>,

    /// Path to config file (default: search .seoscoperc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .seoscoperc.json with sensible defaults
    Init {
        /// Minimum SEO score (e.g. 4.5)
        #[arg(long, allow_negative_numbers = true)]
        min_score: Option<f64>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(Commands::Init { min_score, dir }) = args.command {
        return run_init(min_score, dir.as_deref());
    }

    let input = args.path.as_deref().filter(|p| *p != Path::new("-"));

    // Resolve work directory for config search
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let work_dir = match input.and_then(Path::parent) {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => cwd,
    };

    // Load config (CLI flags override config file)
    let config = load_config(&work_dir, args.config.as_deref())?
        .merge_with_cli(args.min_score, args.top_k);

    let engine = ContentEngine::from_config(&config);
    let keywords = args
        .keywords
        .as_deref()
        .map(parse_keywords)
        .unwrap_or_default();

    let report = if let Some(ref url) = args.url {
        let document = fetch_document(&config, url)?;
        if args.niche.is_some() && !args.quiet {
            eprintln!(
                "{}: competitor analysis is skipped when analyzing a URL",
                "Info".blue()
            );
        }
        engine.analyze(&document, &keywords)
    } else {
        let document = Document::own(read_input(input)?);
        match args.niche.as_deref().filter(|_| !args.no_competitors) {
            Some(niche) => analyze_with_competitors(&engine, &config, &document, &keywords, niche, args.quiet)?,
            None => engine.analyze(&document, &keywords),
        }
    };

    // Output results
    if args.json {
        println!("{}", JsonReporter::new().pretty().report(&report));
    } else if args.quiet {
        ConsoleReporter::new().report_quiet(&report);
    } else {
        let mut reporter = ConsoleReporter::new();
        if args.verbose {
            reporter = reporter.verbose();
        }
        reporter.report(&report);
    }

    // Check minimum score (config or CLI)
    if let Some(min_score) = config.min_score {
        if report.seo_score < min_score {
            if !args.quiet && !args.json {
                eprintln!(
                    "\n{}: SEO score {:.2} is below minimum {}",
                    "Failed".red().bold(),
                    report.seo_score,
                    min_score
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read input file: {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read content from stdin")?;
            Ok(text)
        }
    }
}

fn fetch_document(config: &Config, url: &str) -> Result<Document> {
    let fetcher = HttpFetcher::new(&config.http()).context("Failed to create HTTP client")?;
    let text = fetcher
        .fetch(url)
        .with_context(|| format!("Failed to scrape {}", url))?;
    Ok(Document::from_url(url, text))
}

fn analyze_with_competitors(
    engine: &ContentEngine,
    config: &Config,
    document: &Document,
    keywords: &[String],
    niche: &str,
    quiet: bool,
) -> Result<ContentReport> {
    if !is_http_available() {
        if !quiet {
            eprintln!(
                "{}: HTTP feature not enabled, skipping competitors. Rebuild with: cargo build --features http",
                "Note".blue()
            );
        }
        return Ok(engine.analyze(document, keywords));
    }

    let http = config.http();
    let search = HttpSearch::new(&http).context("Invalid search settings")?;
    let fetcher = HttpFetcher::new(&http).context("Failed to create HTTP client")?;
    let aggregator = CompetitorAggregator::new(search, fetcher)
        .with_slots(config.slots())
        .with_top_k(config.top_k());

    Ok(engine.analyze_with_competitors(document, keywords, niche, &aggregator))
}

fn run_init(min_score: Option<f64>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let json = serde_json::to_string_pretty(&Config::starter(min_score))
        .context("Failed to serialize default config")?;
    std::fs::write(&config_path, format!("{}\n", json))
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {}",
        "Done".green().bold(),
        config_path.display()
    );
    Ok(ExitCode::SUCCESS)
}
