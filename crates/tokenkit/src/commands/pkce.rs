//! `pkce` command - authorization-code grant for a public client.
//!
//! Same flow as `code`, but the exchange carries no client secret; the
//! PKCE verifier alone binds the code to this invocation.

use anyhow::Result;
use clap::Args;
use tokenkit_oauth::{PkceChallenge, TokenRequest};

use super::Context;

/// Arguments for the pkce command.
#[derive(Args, Debug)]
pub struct PkceArgs {}

/// Run the public-client authorization-code flow.
pub async fn run(_args: PkceArgs, ctx: &Context) -> Result<()> {
    let profile = super::load_profile(ctx)?;

    let pkce = PkceChallenge::generate();
    let state = tokenkit_oauth::generate_state();
    let auth_url =
        tokenkit_oauth::build_authorization_url(&profile, &pkce.challenge, &profile.scopes, &state);

    let code = super::prompt_for_authorization_code(&auth_url)?;

    let request = TokenRequest::AuthorizationCodePkce {
        code,
        code_verifier: pkce.verifier,
    };
    let response = tokenkit_oauth::exchange_token(&profile, &request).await?;

    println!();
    println!("[3] Token response:");
    println!("{}", response);

    Ok(())
}
