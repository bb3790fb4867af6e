use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, ValueEnum};
use tracing::info;

use tag_recommender::catalog::loader::{load_records, CorpusFormat, LoaderOptions};
use tag_recommender::{logging, Engine, RecommendError, RecommendationResult, TopN};

/// Recommend games that share genres, categories, tags and developers
/// with a title.
#[derive(Parser, Debug)]
#[command(name = "recommend", version, about)]
struct Cli {
    /// Title (or part of one) to look up. Omit for an interactive prompt
    #[arg(short, long, value_name = "TITLE")]
    query: Option<String>,

    /// Corpus file: .csv, .tsv, .json or .jsonl
    #[arg(short, long, env = "RECOMMENDER_DATA")]
    data: PathBuf,

    /// Number of recommendations, clamped to what is available
    #[arg(short = 'n', long, env = "RECOMMENDER_TOP", default_value_t = 5.0, allow_negative_numbers = true)]
    top: f64,

    /// Force the corpus format instead of guessing from the extension
    #[arg(long, value_enum)]
    input_format: Option<InputFormat>,

    /// CSV field delimiter
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Print corpus statistics after loading
    #[arg(long)]
    stats: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Log filter, e.g. `info` or `tag_recommender=trace`
    #[arg(long, env = "RECOMMENDER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log as JSON lines
    #[arg(long)]
    log_json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    Csv,
    Json,
    Jsonl,
}

impl From<InputFormat> for CorpusFormat {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Csv => CorpusFormat::Csv,
            InputFormat::Json => CorpusFormat::Json,
            InputFormat::Jsonl => CorpusFormat::JsonLines,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(err) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("error: failed to initialize logging: {err}");
        return ExitCode::FAILURE;
    }
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, RecommendError> {
    let opts = LoaderOptions {
        format: cli.input_format.map(CorpusFormat::from),
        ..LoaderOptions::default()
    }
    .with_delimiter(cli.delimiter)?;

    let load_start = Instant::now();
    let records = load_records(&cli.data, &opts)?;
    let engine = Engine::load(&records)?;
    info!(
        path = %cli.data.display(),
        elapsed_ms = load_start.elapsed().as_secs_f64() * 1000.0,
        "corpus ready"
    );

    if cli.stats {
        let stats = engine.stats();
        eprintln!(
            "[stats] items={} vocabulary={} build={:.2}ms",
            stats.items, stats.vocabulary, stats.build_ms
        );
    }

    let top = TopN::new(cli.top);
    match cli.query {
        Some(title) => run_single_query(&engine, &title, top, cli.format),
        None => run_interactive(&engine, top, cli.format),
    }
}

fn run_single_query(
    engine: &Engine,
    title: &str,
    top: TopN,
    format: OutputFormat,
) -> Result<ExitCode, RecommendError> {
    match engine.recommend(title, top) {
        Ok(result) => {
            print_result(&result, format)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(RecommendError::NoMatchFound { query }) => {
            eprintln!("{}", not_found_message(&query));
            Ok(ExitCode::from(2))
        }
        Err(err) => Err(err),
    }
}

fn run_interactive(engine: &Engine, top: TopN, format: OutputFormat) -> Result<ExitCode, RecommendError> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Query> ");
        stdout.flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }
        match engine.recommend(trimmed, top) {
            Ok(result) => print_result(&result, format)?,
            Err(RecommendError::NoMatchFound { query }) => println!("{}", not_found_message(&query)),
            Err(err) => return Err(err),
        }
    }
    eprintln!("[info] bye");
    Ok(ExitCode::SUCCESS)
}

fn print_result(result: &RecommendationResult, format: OutputFormat) -> Result<(), RecommendError> {
    match format {
        OutputFormat::Text => print!("{result}"),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
    }
    Ok(())
}

fn not_found_message(query: &str) -> String {
    format!("No game found for input: '{query}'. Try another title.")
}
