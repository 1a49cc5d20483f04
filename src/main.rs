use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use qprep::output::write_results;
use qprep::{PreprocessOptions, Splitter, preprocess_with, trim_end, trim_end_chars};
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "qprep")]
#[command(about = "Normalize queries before handing them to text recognizers")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Queries to normalize (when no subcommand is given); reads stdin if empty
    #[arg(trailing_var_arg = true)]
    query: Vec<String>,

    #[command(flatten)]
    normalize: NormalizeArgs,
}

#[derive(Args, Clone)]
struct NormalizeArgs {
    /// Keep the casing of unit tokens (MB, kB, G, ...)
    #[arg(short = 'c', long)]
    case_sensitive: bool,

    /// Skip full-width to half-width recoding
    #[arg(long)]
    no_recode: bool,

    /// JSON file with preprocessing options; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Recode and lowercase queries
    Normalize {
        #[command(flatten)]
        args: NormalizeArgs,

        /// Queries to normalize; reads stdin if empty
        query: Vec<String>,
    },
    /// Strip trailing whitespace, or trailing characters from a set
    Trim {
        /// Characters to strip instead of whitespace
        #[arg(long)]
        chars: Option<String>,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,

        /// Text to trim; reads stdin if empty
        text: Vec<String>,
    },
    /// Split text on literal delimiters, dropping empty segments
    Split {
        /// Delimiter string (repeatable)
        #[arg(short, long = "delim")]
        delims: Vec<String>,

        /// Print results as a JSON array
        #[arg(long)]
        json: bool,

        /// Text to split; reads stdin if empty
        text: Vec<String>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Normalize { args, query }) => run_normalize(&args, query)?,
        Some(Commands::Trim { chars, json, text }) => {
            let inputs = inputs_or_stdin(text)?;
            let results: Vec<&str> = inputs
                .iter()
                .map(|s| match &chars {
                    Some(set) => trim_end_chars(s, set),
                    None => trim_end(s),
                })
                .collect();
            emit(&results, json)?;
        }
        Some(Commands::Split { delims, json, text }) => {
            let splitter = Splitter::new(&delims).context("invalid delimiters")?;
            let inputs = inputs_or_stdin(text)?;
            let results: Vec<&str> = inputs.iter().flat_map(|s| splitter.split(s)).collect();
            emit(&results, json)?;
        }
        None => run_normalize(&cli.normalize, cli.query)?,
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

fn run_normalize(args: &NormalizeArgs, query: Vec<String>) -> Result<()> {
    let options = resolve_options(args)?;
    tracing::debug!(?options, "normalizing");

    let inputs = inputs_or_stdin(query)?;
    let results: Vec<String> = inputs
        .iter()
        .map(|q| preprocess_with(q, options))
        .collect();
    emit(&results, args.json)
}

/// Config file first, then command-line flags on top.
fn resolve_options(args: &NormalizeArgs) -> Result<PreprocessOptions> {
    let mut options = match &args.config {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            PreprocessOptions::from_json_str(&raw)
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => PreprocessOptions::default(),
    };

    if args.case_sensitive {
        options.case_sensitive = true;
    }
    if args.no_recode {
        options.recode = false;
    }
    Ok(options)
}

/// Arguments joined into one input, or one input per stdin line.
fn inputs_or_stdin(args: Vec<String>) -> Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(vec![args.join(" ")]);
    }

    io::stdin()
        .lock()
        .lines()
        .collect::<io::Result<Vec<_>>>()
        .context("failed to read stdin")
}

fn emit<S: AsRef<str>>(results: &[S], json: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_results(&mut out, results, json).context("failed to write output")
}
