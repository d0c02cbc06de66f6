//! Scour CLI binary entrypoint.
//!
//! This is the main entry point for the `scour` command-line tool.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use scour_cli::cli::{Cli, Commands};
use scour_cli::client::SearchClient;
use scour_cli::commands::{ConvertCommand, ReplCommand, SearchCommand, TranslateCommand};
use scour_cli::output::OutputFormat;
use scour_query::{Translator, TranslatorOptions};
use scour_registry::CollectionRegistry;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Run async runtime
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("Failed to create async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match runtime.block_on(run(cli)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let format = OutputFormat::new(cli.format);
    let mut stdout = io::stdout().lock();

    // A bad registry file is fatal: translation cannot proceed without it.
    let registry = match &cli.collections {
        Some(path) => CollectionRegistry::from_json_path(path)?,
        None => CollectionRegistry::builtin(),
    };
    let translator = Translator::with_options(
        registry,
        TranslatorOptions {
            keep_stopwords: cli.keep_stopwords,
        },
    )?;

    match &cli.command {
        Commands::Convert(args) => {
            ConvertCommand.execute(&mut stdout, &format, args)?;
        }
        Commands::Translate(args) => {
            let cmd = TranslateCommand::new(&translator);
            cmd.execute(&mut stdout, &format, &args.query)?;
        }
        Commands::Search(args) => {
            let client = SearchClient::new(&cli.engine);
            let cmd = SearchCommand::new(&translator, &client);
            cmd.execute(&mut stdout, &format, &args.query).await?;
        }
        Commands::Repl => {
            let client = SearchClient::new(&cli.engine);
            let cmd = ReplCommand::new(&translator, &client);
            cmd.execute(io::stdin().lock(), &mut stdout, &format).await?;
        }
    }

    Ok(())
}
