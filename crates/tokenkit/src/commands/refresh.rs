//! `refresh` command - exchange a refresh token for fresh tokens.

use anyhow::Result;
use clap::Args;
use tokenkit_oauth::TokenRequest;

use super::Context;

/// Arguments for the refresh command.
#[derive(Args, Debug)]
pub struct RefreshArgs {
    /// Refresh token to exchange
    pub token: String,
}

/// Run the refresh-token grant.
pub async fn run(args: RefreshArgs, ctx: &Context) -> Result<()> {
    let profile = super::load_profile(ctx)?;

    let request = TokenRequest::RefreshToken {
        refresh_token: args.token,
    };
    let response = tokenkit_oauth::exchange_token(&profile, &request).await?;

    println!("Refresh token response:");
    println!("{}", response);

    Ok(())
}
