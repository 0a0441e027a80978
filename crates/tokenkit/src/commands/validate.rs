//! `validate` command - token introspection.

use anyhow::Result;
use clap::Args;

use super::Context;

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Access token to introspect
    pub access_token: String,
}

/// Introspect an access token at the provider.
pub async fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let profile = super::load_profile(ctx)?;

    let response = tokenkit_oauth::introspect_token(&profile, &args.access_token).await?;

    println!("Introspection response:");
    println!("{}", response);

    Ok(())
}
