//! `credentials` command - client-credentials grant.

use anyhow::Result;
use clap::Args;
use tokenkit_oauth::TokenRequest;

use super::Context;

/// Arguments for the credentials command.
#[derive(Args, Debug)]
pub struct CredentialsArgs {}

/// Run the client-credentials grant with the profile's scopes.
pub async fn run(_args: CredentialsArgs, ctx: &Context) -> Result<()> {
    let profile = super::load_profile(ctx)?;

    let request = TokenRequest::ClientCredentials {
        scopes: profile.scopes.clone(),
    };
    let response = tokenkit_oauth::exchange_token(&profile, &request).await?;

    println!("Token response:");
    println!("{}", response);

    Ok(())
}
