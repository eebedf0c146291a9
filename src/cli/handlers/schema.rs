use anyhow::Result;

use crate::graphql::build_schema;

use super::CommandContext;

pub fn handle_schema(ctx: CommandContext) -> Result<()> {
    let schema = build_schema(ctx.catalog);
    println!("{}", schema.sdl());
    Ok(())
}
