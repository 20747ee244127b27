use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use owo_colors::OwoColorize;
use sentimetric_core::{
    Analyzer, AnalyzerConfig, MetricRecord, Report, UrlRecord, convert_to_json, read_url_records,
    read_url_records_from_path, write_csv,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod echo;

use echo::{
    format_size, print_banner, print_detail, print_info, print_step, print_success, print_timing_summary,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Output table format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputFormat {
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid format: {}. Valid options: csv, json", s)),
        }
    }
}

/// Score the readability and sentiment of web articles listed in a CSV table
#[derive(Parser, Debug)]
#[command(name = "sentimetric")]
#[command(author = "Sentimetric Contributors")]
#[command(version = VERSION)]
#[command(about = "Readability and sentiment metrics for web articles", long_about = None)]
struct Args {
    /// CSV file with URL_ID and URL columns, "-" for stdin, or a single http(s) URL
    #[arg(value_name = "INPUT", required_unless_present = "completions")]
    input: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (csv, json)
    #[arg(short, long, default_value = "csv", value_name = "FORMAT")]
    format: OutputFormat,

    /// Directory of stop-word files
    #[arg(long, value_name = "DIR")]
    stopwords_dir: Option<PathBuf>,

    /// Directory holding positive-words.txt and negative-words.txt
    #[arg(long, value_name = "DIR")]
    master_dict_dir: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "10", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Maximum number of pages fetched at once
    #[arg(long, default_value = "1", value_name = "NUM")]
    concurrency: usize,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completions: Option<Shell>,
}

impl Args {
    fn analyzer_config(&self) -> AnalyzerConfig {
        let mut builder = AnalyzerConfig::builder().timeout(self.timeout).concurrency(self.concurrency);

        if let Some(dir) = &self.stopwords_dir {
            builder = builder.stopwords_dir(dir);
        }
        if let Some(dir) = &self.master_dict_dir {
            builder = builder.master_dict_dir(dir);
        }
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        builder.build()
    }
}

/// Route library logs to stderr; `-v` lowers the default level to debug.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).with_target(false).init();
}

fn read_records(input: &str, verbose: bool) -> anyhow::Result<Vec<UrlRecord>> {
    if input == "-" {
        if verbose {
            print_step(2, 4, "Reading URL table from stdin");
        }
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).context("Failed to read from stdin")?;
        read_url_records(buffer.as_bytes()).context("Failed to parse URL table from stdin")
    } else if input.starts_with("http://") || input.starts_with("https://") {
        if verbose {
            print_step(2, 4, &format!("Using single URL {}", input.bright_white().underline()));
        }
        Ok(vec![UrlRecord::new("1", input)])
    } else {
        if verbose {
            print_step(2, 4, &format!("Reading URL table from {}", input.bright_white()));
        }
        read_url_records_from_path(Path::new(input)).with_context(|| format!("Failed to read URL table: {}", input))
    }
}

fn render(reports: &[Report], format: OutputFormat, pretty: bool) -> anyhow::Result<String> {
    match format {
        OutputFormat::Csv => {
            let mut buffer = Vec::new();
            write_csv(reports, &mut buffer).context("Failed to write CSV")?;
            String::from_utf8(buffer).context("CSV output is not valid UTF-8")
        }
        OutputFormat::Json => {
            let mut json = convert_to_json(reports, pretty).context("Failed to convert to JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Some(shell) = args.completions {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "sentimetric", &mut io::stdout());
        return Ok(());
    }

    init_logging(args.verbose);

    let start = Instant::now();
    let mut timings: Vec<(String, Duration)> = Vec::new();

    if args.verbose {
        print_banner();
        print_info("Debug logging enabled");
        eprintln!();
        print_step(1, 4, "Loading lexicon");
    }

    let stage = Instant::now();
    let analyzer = Analyzer::new(args.analyzer_config());
    timings.push(("Lexicon".to_string(), stage.elapsed()));

    if args.verbose {
        let lexicon = analyzer.lexicon();
        print_detail("Stop words", &lexicon.stop_words().len().to_string());
        print_detail("Positive words", &lexicon.positive_words().len().to_string());
        print_detail("Negative words", &lexicon.negative_words().len().to_string());
        eprintln!();
    }

    let input = args.input.as_deref().context("Missing INPUT argument")?;
    let records = read_records(input, args.verbose)?;

    if args.verbose {
        print_detail("Rows", &records.len().to_string());
        eprintln!();
        print_step(3, 4, &format!("Analyzing {} articles", records.len()));
    }

    let stage = Instant::now();
    let reports = analyzer.analyze_batch(records).await;
    timings.push(("Analysis".to_string(), stage.elapsed()));

    let empty = reports.iter().filter(|r| r.metrics == MetricRecord::zero()).count();
    if empty > 0 {
        warn!("{} of {} articles produced no text", empty, reports.len());
    }

    if args.verbose {
        eprintln!();
        print_step(4, 4, "Writing output");
    }

    let output = render(&reports, args.format, args.pretty)?;

    if args.verbose {
        print_detail("Format", &format!("{:?}", args.format));
        print_detail("Size", &format_size(output.len()));
        eprintln!();
    }

    match &args.output {
        Some(path) => {
            fs::write(path, &output).with_context(|| format!("Failed to write to file: {}", path.display()))?;
            print_success(&format!("Output written to {}", path.display().bright_white()));
        }
        None => {
            print!("{}", output);
        }
    }

    if args.verbose {
        eprintln!();
        print_timing_summary(start.elapsed(), &timings);
    }

    Ok(())
}
