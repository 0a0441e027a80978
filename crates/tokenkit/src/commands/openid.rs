//! `openid` command - code flow plus ID-token inspection.
//!
//! Runs the confidential authorization-code flow, then decodes the claims
//! of the returned `id_token`. The decode skips signature verification —
//! output is for inspection, never for trust decisions.

use anyhow::Result;
use clap::Args;
use tokenkit_oauth::{PkceChallenge, TokenRequest};

use super::Context;

/// Arguments for the openid command.
#[derive(Args, Debug)]
pub struct OpenidArgs {}

/// Run the code flow and decode the ID token claims.
pub async fn run(_args: OpenidArgs, ctx: &Context) -> Result<()> {
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

    let id_token = response.id_token().ok_or_else(|| {
        anyhow::anyhow!(
            "response contains no id_token — are OpenID scopes configured for profile '{}'?",
            ctx.profile
        )
    })?;
    let claims = tokenkit_oauth::decode_claims_unverified(id_token)?;

    println!();
    println!("[4] ID token claims (signature NOT verified):");
    println!("{}", serde_json::to_string_pretty(&claims)?);

    Ok(())
}
