use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "folio")]
#[command(author, version, about = "An in-memory GraphQL book catalog server")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (defaults to .folio.yml in the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write structured JSON logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the GraphQL server
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Execute a query document against the seeded catalog
    #[command(visible_alias = "q")]
    Query {
        /// Full query document, e.g. '{ authors { name } }'
        document: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute mutation fields against the seeded catalog
    #[command(visible_alias = "m")]
    Mutate {
        /// Mutation fields, e.g. 'addAuthor(name: "X") { id }'
        document: String,

        /// Variables as a JSON object
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the schema in SDL form
    Schema,
}
