//! CLI command handlers.

use anyhow::{Context as _, Result};
use tokenkit_config::Profile;

pub mod code;
pub mod credentials;
pub mod openid;
pub mod pkce;
pub mod refresh;
pub mod validate;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Name of the configuration profile in use.
    pub profile: String,
    /// Verbose output enabled.
    pub verbose: bool,
}

/// Load the profile named in the context.
pub(crate) fn load_profile(ctx: &Context) -> Result<Profile> {
    tokenkit_config::load_profile(&ctx.profile)
        .with_context(|| format!("could not load profile '{}'", ctx.profile))
}

/// Print the authorization URL and prompt for the code the provider
/// redirects back with. Blocks on stdin with no timeout.
pub(crate) fn prompt_for_authorization_code(auth_url: &str) -> Result<String> {
    println!("[1] Open this URL in your browser and authorize:");
    println!();
    println!("  {}", auth_url);
    println!();
    print!("[2] Paste the authorization code: ");

    use std::io::Write;
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;
    let code = input.trim();

    if code.is_empty() {
        anyhow::bail!("no authorization code provided");
    }
    Ok(code.to_string())
}
