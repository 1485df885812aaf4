use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use clap::Parser;
use md2adf::{Config, Error, InlineDialect};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "md2adf")]
#[command(about = "Convert Markdown to Atlassian Document Format JSON")]
struct Cli {
    /// Input Markdown file (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output JSON file (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Also recognize `code` and *italic* spans
    #[arg(long)]
    extended: bool,

    /// Log conversion details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), Error> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::compiled_default(),
    };
    if cli.extended {
        config.inline.dialect = InlineDialect::Extended;
    }
    if cli.pretty {
        config.output.pretty = true;
    }
    debug!(?config, "resolved config");

    let markdown = read_input(cli.input.as_ref())?;
    let document = md2adf::convert_with_config(&markdown, &config);

    let json = if config.output.pretty {
        document.to_json_pretty()?
    } else {
        document.to_json()?
    };

    match cli.output {
        Some(path) => {
            fs::write(&path, json).map_err(|e| Error::io(&path, e))?;
            info!(path = %path.display(), "wrote document");
        }
        None => println!("{}", json),
    }

    Ok(())
}

fn read_input(input: Option<&PathBuf>) -> Result<String, Error> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).map_err(|e| Error::io(path, e))
        }
        _ => {
            let mut markdown = String::new();
            io::stdin()
                .read_to_string(&mut markdown)
                .map_err(|e| Error::io("<stdin>", e))?;
            Ok(markdown)
        }
    }
}
