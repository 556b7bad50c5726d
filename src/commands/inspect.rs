use anyhow::Result;
use serde_json::json;

use super::RunContext;

pub fn inspect_command(ctx: &RunContext) -> Result<()> {
    let report = json!({
        "platform": ctx.platform,
        "local": ctx.profiles.local.select(&ctx.platform),
        "virtual": ctx.profiles.virtual_env.select(&ctx.platform),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
