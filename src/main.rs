use anyhow::{Context, Result};
use clap::Parser;

use folio::cli::handlers::{self, CommandContext};
use folio::cli::{Cli, Commands};
use folio::config::FolioConfig;
use folio::logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.log_file.clone());

    let config =
        FolioConfig::load(cli.config.as_deref()).context("Failed to load folio configuration")?;
    let ctx = CommandContext::new(config);

    match cli.command {
        Commands::Serve { port } => handlers::handle_serve(ctx, port),
        Commands::Query {
            document,
            variables,
        } => handlers::handle_query(ctx, document, variables),
        Commands::Mutate {
            document,
            variables,
        } => handlers::handle_mutate(ctx, document, variables),
        Commands::Schema => handlers::handle_schema(ctx),
    }
}
