//! Grant flows: authorization URL construction, token exchange, and
//! introspection.
//!
//! Every flow has the same shape: build an
//! `application/x-www-form-urlencoded` body, POST it once, parse the JSON
//! response. Provider response fields are not statically known (presence
//! depends on provider and requested scopes), so responses are surfaced as
//! a dynamic string-keyed map rather than a fixed struct.

use serde_json::{Map, Value};
use tokenkit_config::Profile;
use tracing::debug;

use crate::error::{OAuthError, Result};

/// Build the authorization URL for the code-flow redirect.
///
/// Pure string construction, no I/O. The query carries exactly:
/// `response_type=code`, `client_id`, `redirect_uri`, `scope`
/// (space-joined), `state`, `code_challenge`, `code_challenge_method=S256`.
pub fn build_authorization_url(
    profile: &Profile,
    challenge: &str,
    scopes: &[String],
    state: &str,
) -> String {
    let scope = scopes.join(" ");
    let params = [
        ("response_type", "code"),
        ("client_id", &profile.client_id),
        ("redirect_uri", &profile.callback_url),
        ("scope", &scope),
        ("state", state),
        ("code_challenge", challenge),
        ("code_challenge_method", "S256"),
    ];

    let query = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", profile.authorize_url(), query)
}

/// Token endpoint request, one variant per grant.
#[derive(Debug, Clone)]
pub enum TokenRequest {
    /// `authorization_code` with a confidential client (secret required).
    AuthorizationCode { code: String, code_verifier: String },

    /// `authorization_code` for a public client: PKCE only, no secret.
    AuthorizationCodePkce { code: String, code_verifier: String },

    /// `refresh_token` grant (secret required).
    RefreshToken { refresh_token: String },

    /// `client_credentials` grant (secret required).
    ClientCredentials { scopes: Vec<String> },
}

impl TokenRequest {
    /// The `grant_type` value this request sends.
    pub fn grant_type(&self) -> &'static str {
        match self {
            TokenRequest::AuthorizationCode { .. } | TokenRequest::AuthorizationCodePkce { .. } => {
                "authorization_code"
            }
            TokenRequest::RefreshToken { .. } => "refresh_token",
            TokenRequest::ClientCredentials { .. } => "client_credentials",
        }
    }

    /// Form body for this grant; exactly the fields the grant requires.
    ///
    /// Fails before any network I/O when the profile lacks a client secret
    /// a confidential grant needs.
    pub fn form_params(&self, profile: &Profile) -> Result<Vec<(&'static str, String)>> {
        let params = match self {
            TokenRequest::AuthorizationCode {
                code,
                code_verifier,
            } => vec![
                ("grant_type", self.grant_type().to_string()),
                ("code", code.clone()),
                ("redirect_uri", profile.callback_url.clone()),
                ("code_verifier", code_verifier.clone()),
                ("client_id", profile.client_id.clone()),
                ("client_secret", require_secret(profile)?),
            ],
            TokenRequest::AuthorizationCodePkce {
                code,
                code_verifier,
            } => vec![
                ("grant_type", self.grant_type().to_string()),
                ("code", code.clone()),
                ("redirect_uri", profile.callback_url.clone()),
                ("code_verifier", code_verifier.clone()),
                ("client_id", profile.client_id.clone()),
            ],
            TokenRequest::RefreshToken { refresh_token } => vec![
                ("grant_type", self.grant_type().to_string()),
                ("client_id", profile.client_id.clone()),
                ("client_secret", require_secret(profile)?),
                ("refresh_token", refresh_token.clone()),
            ],
            TokenRequest::ClientCredentials { scopes } => vec![
                ("grant_type", self.grant_type().to_string()),
                ("client_id", profile.client_id.clone()),
                ("client_secret", require_secret(profile)?),
                ("scope", scopes.join(" ")),
            ],
        };
        Ok(params)
    }
}

/// Parsed provider response: a dynamic string-keyed JSON object.
#[derive(Debug, Clone, serde::Serialize)]
#[serde(transparent)]
pub struct TokenResponse {
    fields: Map<String, Value>,
}

impl TokenResponse {
    /// All response fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// A string-valued field, if present.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn access_token(&self) -> Option<&str> {
        self.get_str("access_token")
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.get_str("refresh_token")
    }

    pub fn id_token(&self) -> Option<&str> {
        self.get_str("id_token")
    }
}

impl std::fmt::Display for TokenResponse {
    /// Pretty-printed JSON rendering.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered =
            serde_json::to_string_pretty(&self.fields).map_err(|_| std::fmt::Error)?;
        f.write_str(&rendered)
    }
}

/// Exchange a grant request for tokens at the profile's token endpoint.
pub async fn exchange_token(profile: &Profile, request: &TokenRequest) -> Result<TokenResponse> {
    let params = request.form_params(profile)?;
    debug!(grant = request.grant_type(), url = %profile.token_url(), "posting token request");
    post_form(&profile.token_url(), &params).await
}

/// Introspect an access token at the profile's introspection endpoint.
///
/// Introspection is a confidential-client operation; the profile must
/// carry a secret.
pub async fn introspect_token(profile: &Profile, token: &str) -> Result<TokenResponse> {
    let params = vec![
        ("client_id", profile.client_id.clone()),
        ("client_secret", require_secret(profile)?),
        ("token", token.to_string()),
    ];
    debug!(url = %profile.introspection_url(), "posting introspection request");
    post_form(&profile.introspection_url(), &params).await
}

/// POST a form body and parse the JSON response.
///
/// Any non-2xx status is surfaced with the raw body verbatim; a 2xx body
/// that is not a JSON object is a malformed-response error. No retries.
async fn post_form(url: &str, params: &[(&'static str, String)]) -> Result<TokenResponse> {
    let client = reqwest::Client::new();
    let response = client.post(url).form(params).send().await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(OAuthError::Provider {
            status: status.as_u16(),
            body,
        });
    }

    let value: Value = serde_json::from_str(&body)
        .map_err(|e| OAuthError::MalformedResponse(format!("{e}; body: {body}")))?;

    match value {
        Value::Object(fields) => Ok(TokenResponse { fields }),
        other => Err(OAuthError::MalformedResponse(format!(
            "expected a JSON object, got: {other}"
        ))),
    }
}

fn require_secret(profile: &Profile) -> Result<String> {
    profile.client_secret.clone().ok_or_else(|| {
        OAuthError::Config(format!(
            "client '{}' has no client_secret configured but this grant requires one",
            profile.client_id
        ))
    })
}
