use anyhow::Result;

use crate::graphql::build_schema;

use super::{CommandContext, parse_variables};

pub fn handle_query(
    ctx: CommandContext,
    document: String,
    variables: Option<String>,
) -> Result<()> {
    let schema = build_schema(ctx.catalog);
    let vars = parse_variables(variables)?;

    let request = async_graphql::Request::new(&document).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
