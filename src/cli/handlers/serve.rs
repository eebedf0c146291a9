use anyhow::Result;
use colored::Colorize;

use crate::graphql::{build_schema, run_server};

use super::CommandContext;

pub fn handle_serve(ctx: CommandContext, port: Option<u16>) -> Result<()> {
    let host = ctx.config.server.host.clone();
    let port = port.unwrap_or(ctx.config.server.port);
    let schema = build_schema(ctx.catalog);

    println!(
        "{} GraphQL server on http://{}:{}/graphql",
        "Starting".green(),
        host,
        port
    );
    println!("Open the same URL in a browser for the playground console.");

    tokio::runtime::Runtime::new()?.block_on(async { run_server(schema, &host, port).await })
}
