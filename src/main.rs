use std::io::{self, BufRead};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rangepipe::pipeline::{PipelineConfig, Source, DEFAULT_MAX_ELEMENTS, STAGE_SYNTAX};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "rangepipe", about = "Run lazy range pipelines over integers")]
struct Cli {
    /// Log pipeline assembly (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Push a source through a pipeline and print one value per line.
    Run {
        /// Comma-separated values; read from stdin when no source is given.
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "counter")]
        values: Option<Vec<i64>>,
        /// Count upward from this value instead of reading values.
        #[arg(long, allow_hyphen_values = true)]
        counter: Option<i64>,
        /// Stop the counter after this many values.
        #[arg(long, requires = "counter")]
        count: Option<usize>,
        /// Stages separated by '|', e.g. "filter=even | transform=square".
        #[arg(short, long, default_value = "")]
        pipeline: String,
        /// Stop collecting after this many elements.
        #[arg(long, default_value_t = DEFAULT_MAX_ELEMENTS)]
        max_elements: usize,
    },
    /// List the stages a pipeline can use.
    Stages,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run {
            values,
            counter,
            count,
            pipeline,
            max_elements,
        } => run_pipeline(values, counter, count, &pipeline, max_elements)?,
        Commands::Stages => print_stages(),
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_pipeline(
    values: Option<Vec<i64>>,
    counter: Option<i64>,
    count: Option<usize>,
    pipeline: &str,
    max_elements: usize,
) -> Result<()> {
    let source = match (values, counter, count) {
        (Some(values), None, _) => Source::Values(values),
        (None, Some(start), None) => Source::Counter { start },
        (None, Some(start), Some(count)) => Source::CounterN { start, count },
        (None, None, _) => Source::Values(read_stdin_values()?),
        (Some(_), Some(_), _) => bail!("--values and --counter are mutually exclusive"),
    };

    let config = PipelineConfig::new(source)
        .with_pipeline(pipeline)
        .with_context(|| format!("failed to parse pipeline '{pipeline}'"))?
        .with_max_elements(max_elements);
    let output = config.run().context("pipeline rejected")?;

    for value in output {
        println!("{value}");
    }

    Ok(())
}

fn read_stdin_values() -> Result<Vec<i64>> {
    let stdin = io::stdin();
    let mut values = Vec::new();

    for (line_no, line) in stdin.lock().lines().enumerate() {
        let line = line.context("failed to read stdin")?;
        for field in line.split(|c: char| c == ',' || c.is_whitespace()) {
            if field.is_empty() {
                continue;
            }
            let value: i64 = field.parse().with_context(|| {
                format!("invalid integer '{}' on line {}", field, line_no + 1)
            })?;
            values.push(value);
        }
    }

    Ok(values)
}

fn print_stages() {
    for (syntax, summary) in STAGE_SYNTAX {
        println!("{syntax:<36}{summary}");
    }
}
