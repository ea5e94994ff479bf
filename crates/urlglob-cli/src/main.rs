//! urlglob CLI - Command-line interface for curl-style URL glob expansion
//!
//! This binary expands URL templates and start-request lists.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::process::ExitCode;

use urlglob_cli::{commands, logging};

/// urlglob - Curl-style URL glob expansion
#[derive(Parser)]
#[command(name = "urlglob")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand glob templates and print every resulting string
    Expand {
        /// Templates to expand, e.g. 'https://example.com/{a,b}?page=[01-10:3]'
        #[arg(required = true)]
        templates: Vec<String>,

        /// Stop each expansion after this many results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print the number of results instead of the results
        #[arg(short, long)]
        count: bool,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Expand the URLs of start requests (JSON lines or plain URLs)
    Requests {
        /// Input file (default: stdin)
        #[arg(short, long)]
        input: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Read and write plain URLs, one per line, instead of JSON requests
        #[arg(long)]
        urls: bool,

        /// Expand URL templates; when false, requests pass through unchanged
        #[arg(
            long,
            env = "URLGLOB_ENABLED",
            default_value = "true",
            value_parser = BoolishValueParser::new(),
            action = ArgAction::Set
        )]
        enabled: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Expand {
            templates,
            limit,
            count,
            json,
        } => commands::expand::run(&templates, limit, count, json),
        Commands::Requests {
            input,
            output,
            urls,
            enabled,
        } => commands::requests::run(input.as_deref(), output.as_deref(), urls, enabled),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
