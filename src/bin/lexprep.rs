//! Command-line front end for the text normalization pipeline.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};

use lexprep::{CollocationConfig, Pipeline, PipelineConfig, PrepError, PrepResult, TokenMode};

#[derive(Parser)]
#[command(name = "lexprep", version, about = "Normalize raw text into filtered tokens")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// TOML pipeline config.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Tag, chunk named entities and lemmatize before filtering.
    #[arg(long, global = true)]
    lemmatize: bool,

    /// Pretty-print JSON output.
    #[arg(long, global = true)]
    pretty: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Print the sentences of a document.
    Sentences {
        /// Input file (stdin if omitted).
        file: Option<PathBuf>,
    },
    /// Tokenize a document: one token list per sentence.
    Document { file: Option<PathBuf> },
    /// Tokenize scraped website text, one fragment per line.
    Website { file: Option<PathBuf> },
    /// Flat term list for a document, optionally with collocations appended.
    Terms {
        file: Option<PathBuf>,

        /// Treat input lines as website fragments.
        #[arg(long)]
        website: bool,

        /// Append top bigram collocations.
        #[arg(long)]
        collocations: bool,

        /// Minimum bigram frequency.
        #[arg(long, default_value_t = 2)]
        min_freq: usize,

        /// Maximum number of bigrams appended.
        #[arg(long, default_value_t = 10)]
        top_n: usize,
    },
}

fn read_input(file: Option<&Path>) -> PrepResult<String> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| PrepError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| PrepError::Io {
                    path: PathBuf::from("<stdin>"),
                    source: e,
                })?;
            Ok(buf)
        }
    }
}

fn emit<T: serde::Serialize>(value: &T, pretty: bool) -> PrepResult<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{out}");
    Ok(())
}

fn run(cli: Cli) -> PrepResult<()> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load(path)?,
        None => PipelineConfig::default(),
    };
    if cli.lemmatize {
        config.mode = TokenMode::Lemmatized;
    }
    if let Command::Terms {
        collocations: true,
        min_freq,
        top_n,
        ..
    } = &cli.command
    {
        config.collocations = Some(CollocationConfig {
            min_freq: *min_freq,
            top_n: *top_n,
            ..config.collocations.unwrap_or_default()
        });
    }

    let pipeline = Pipeline::new(config)?;

    match &cli.command {
        Command::Sentences { file } => {
            let text = read_input(file.as_deref())?;
            emit(&pipeline.sentences(&text), cli.pretty)
        }
        Command::Document { file } => {
            let text = read_input(file.as_deref())?;
            emit(&pipeline.tokenize_document(&text), cli.pretty)
        }
        Command::Website { file } => {
            let text = read_input(file.as_deref())?;
            let fragments: Vec<&str> = text.lines().collect();
            emit(&pipeline.tokenize_website(&fragments), cli.pretty)
        }
        Command::Terms { file, website, .. } => {
            let text = read_input(file.as_deref())?;
            let terms = if *website {
                let fragments: Vec<&str> = text.lines().collect();
                pipeline.website_terms(&fragments)
            } else {
                pipeline.document_terms(&text)
            };
            emit(&terms, cli.pretty)
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
