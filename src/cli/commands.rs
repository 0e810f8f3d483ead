//! Command implementations for the demo CLI

use crate::core::Context;
use crate::error::{CliError, Result};
use anyhow::anyhow;
use tracing::{debug, instrument, warn};

/// Print a greeting for the single `name` argument
#[instrument(skip(ctx))]
pub fn greet(ctx: &Context) -> Result<()> {
    let greeting = ctx.string("greeting")?;
    let name = ctx.argument(0).ok_or(CliError::InvalidParameters)?;

    let mut message = format!("{greeting}, {name}!");
    if ctx.bool("s")? {
        message = message.to_uppercase();
    }

    println!("{message}");
    Ok(())
}

/// Print the sum of all arguments, starting from `--start`
#[instrument(skip(ctx))]
pub fn sum(ctx: &Context) -> Result<()> {
    let mut total = ctx.int("start")?;

    for raw in ctx.arguments() {
        let Ok(value) = raw.parse::<i64>() else {
            warn!("Not an integer: {}", raw);
            return Err(CliError::InvalidParameters);
        };
        total = total
            .checked_add(value)
            .ok_or_else(|| anyhow!("sum overflows a 64-bit integer"))?;
    }

    debug!("Added {} number(s)", ctx.arguments().len());
    println!("{total}");
    Ok(())
}

/// Report a remote registration
#[instrument(skip(ctx))]
pub fn remote_add(ctx: &Context) -> Result<()> {
    let (Some(name), Some(url)) = (ctx.argument(0), ctx.argument(1)) else {
        return Err(CliError::InvalidParameters);
    };

    println!("Added remote '{name}' -> {url}");
    Ok(())
}

/// Describe a remote and the branch it tracks
#[instrument(skip(ctx))]
pub fn remote_show(ctx: &Context) -> Result<()> {
    let name = ctx.argument(0).ok_or(CliError::InvalidParameters)?;
    let branch = ctx.argument(1).unwrap_or("main");

    println!("Remote '{name}' tracks branch '{branch}'");
    Ok(())
}
