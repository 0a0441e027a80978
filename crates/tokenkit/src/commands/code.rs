//! `code` command - authorization-code grant with a confidential client.

use anyhow::Result;
use clap::Args;
use tokenkit_oauth::{PkceChallenge, TokenRequest};

use super::Context;

/// Arguments for the code command.
#[derive(Args, Debug)]
pub struct CodeArgs {}

/// Run the confidential authorization-code flow.
pub async fn run(_args: CodeArgs, ctx: &Context) -> Result<()> {
    let profile = super::load_profile(ctx)?;

    let pkce = PkceChallenge::generate();
    let state = tokenkit_oauth::generate_state();
    let auth_url =
        tokenkit_oauth::build_authorization_url(&profile, &pkce.challenge, &profile.scopes, &state);

    let code = super::prompt_for_authorization_code(&auth_url)?;

    let request = TokenRequest::AuthorizationCode {
        code,
        code_verifier: pkce.verifier,
    };
    let response = tokenkit_oauth::exchange_token(&profile, &request).await?;

    println!();
    println!("[3] Token response:");
    println!("{}", response);

    Ok(())
}
