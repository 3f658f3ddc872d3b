use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use wordscope::analysis::corpus::{Comparison, Corpus};
use wordscope::analysis::stopwords::StopwordSet;
use wordscope::config::Config;
use wordscope::output::{markdown, terminal};
use wordscope::source::file::FileFetcher;
use wordscope::source::wikipedia::WikipediaFetcher;
use wordscope::source::{fetch_document, DocumentFetcher, RawDocument};

/// Wordscope: compare the vocabulary of two documents.
///
/// Fetches both texts, strips them down to content words, and reports word
/// frequencies, summary statistics and how similar the two vocabularies are.
#[derive(Parser)]
#[command(name = "wordscope", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two documents
    Compare {
        /// First document (article title, or file path with --source file)
        #[arg(default_value = "Drake (musician)")]
        left: String,

        /// Second document
        #[arg(default_value = "Taylor Swift")]
        right: String,

        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Also write a Markdown report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show word statistics for a single document
    Stats {
        /// Article title, or file path with --source file
        title: String,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },
}

#[derive(Args)]
struct AnalysisArgs {
    /// Where document text comes from
    #[arg(long, value_enum, default_value_t = SourceKind::Wikipedia)]
    source: SourceKind,

    /// Base directory for relative paths with --source file
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Number of top words to show (default: WORDSCOPE_TOP_N or 15)
    #[arg(long)]
    top_n: Option<usize>,

    /// Width of the longest bar (default: WORDSCOPE_BAR_WIDTH or 40)
    #[arg(long)]
    bar_width: Option<usize>,

    /// Add the full English stopword list to the built-in one
    #[arg(long)]
    extended_stopwords: bool,

    /// Print results as JSON instead of tables
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum SourceKind {
    /// Wikipedia article extracts
    Wikipedia,
    /// Local text files
    File,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordscope=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Compare {
            left,
            right,
            analysis,
            report,
        } => {
            let (top_n, bar_width) = display_limits(&config, &analysis)?;
            let fetcher = create_fetcher(&config, &analysis)?;
            let stopwords = create_stopwords(&analysis);

            if !analysis.json {
                println!("{}", format!("Comparing '{left}' and '{right}'...").bold());
            }

            let spinner = fetch_spinner(&format!("Fetching '{left}' and '{right}'"))?;
            let (left_doc, right_doc) = tokio::join!(
                fetch_document(fetcher.as_ref(), &left),
                fetch_document(fetcher.as_ref(), &right),
            );
            spinner.finish_and_clear();

            let comparison = Comparison::new(
                Corpus::from_document(&left_doc, &stopwords),
                Corpus::from_document(&right_doc, &stopwords),
            );

            info!(
                cosine = comparison.cosine,
                jaccard = comparison.jaccard,
                "Comparison complete"
            );

            if analysis.json {
                println!("{}", serde_json::to_string_pretty(&comparison)?);
            } else {
                terminal::display_comparison(&comparison, top_n, bar_width);
            }

            if let Some(path) = report {
                markdown::generate_report(&comparison, top_n, bar_width, &path)?;
                if !analysis.json {
                    println!("\nReport written to {}", path.display());
                }
            }
        }

        Commands::Stats { title, analysis } => {
            let (top_n, bar_width) = display_limits(&config, &analysis)?;
            let fetcher = create_fetcher(&config, &analysis)?;
            let stopwords = create_stopwords(&analysis);

            let spinner = fetch_spinner(&format!("Fetching '{title}'"))?;
            let doc: RawDocument = fetch_document(fetcher.as_ref(), &title).await;
            spinner.finish_and_clear();

            let corpus = Corpus::from_document(&doc, &stopwords);

            if analysis.json {
                println!("{}", serde_json::to_string_pretty(&corpus)?);
            } else {
                terminal::display_corpus(&corpus, top_n, bar_width);
            }
        }
    }

    Ok(())
}

/// Pick the document source backend from the CLI flag.
fn create_fetcher(config: &Config, args: &AnalysisArgs) -> Result<Box<dyn DocumentFetcher>> {
    match args.source {
        SourceKind::Wikipedia => {
            info!(url = %config.wiki_api_url, "Using Wikipedia source");
            Ok(Box::new(WikipediaFetcher::from_config(config)?))
        }
        SourceKind::File => {
            info!(root = %args.root.display(), "Using local file source");
            Ok(Box::new(FileFetcher::new(args.root.clone())))
        }
    }
}

fn create_stopwords(args: &AnalysisArgs) -> StopwordSet {
    if args.extended_stopwords {
        StopwordSet::extended()
    } else {
        StopwordSet::standard()
    }
}

/// Resolve top-N and bar width: CLI flag first, then config.
fn display_limits(config: &Config, args: &AnalysisArgs) -> Result<(usize, usize)> {
    let top_n = args.top_n.unwrap_or(config.top_n);
    let bar_width = args.bar_width.unwrap_or(config.bar_width);

    if top_n == 0 {
        anyhow::bail!("--top-n must be at least 1");
    }
    if bar_width == 0 {
        anyhow::bail!("--bar-width must be at least 1");
    }
    Ok((top_n, bar_width))
}

fn fetch_spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("  {spinner} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    Ok(spinner)
}
