//! tokenkit - OAuth 2.0 flow exerciser
//!
//! Main entry point for the tokenkit CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{Context, code, credentials, openid, pkce, refresh, validate};

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// tokenkit - Exercise OAuth 2.0 grant flows against an identity provider
#[derive(Parser)]
#[command(name = "tokenkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration profile to use
    #[arg(short, long, global = true, env = "TOKENKIT_PROFILE", default_value = "default")]
    pub profile: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the authorization-code flow (confidential client)
    Code(code::CodeArgs),

    /// Run the authorization-code flow with PKCE only (public client)
    Pkce(pkce::PkceArgs),

    /// Exchange a refresh token for fresh tokens
    Refresh(refresh::RefreshArgs),

    /// Run the client-credentials flow
    Credentials(credentials::CredentialsArgs),

    /// Run the code flow and decode the returned ID token
    Openid(openid::OpenidArgs),

    /// Introspect an access token
    Validate(validate::ValidateArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "tokenkit=debug,tokenkit_oauth=debug,tokenkit_config=debug,info"
    } else {
        "tokenkit=info,tokenkit_oauth=info,tokenkit_config=info,warn"
    };
    tracing_subscriber::fmt()
        .with_target(true)
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let ctx = Context {
        profile: cli.profile,
        verbose: cli.verbose,
    };
    tracing::debug!(profile = %ctx.profile, "profile selected");

    match cli.command {
        Commands::Code(args) => code::run(args, &ctx).await,
        Commands::Pkce(args) => pkce::run(args, &ctx).await,
        Commands::Refresh(args) => refresh::run(args, &ctx).await,
        Commands::Credentials(args) => credentials::run(args, &ctx).await,
        Commands::Openid(args) => openid::run(args, &ctx).await,
        Commands::Validate(args) => validate::run(args, &ctx).await,
    }
}
