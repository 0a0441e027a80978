//! OAuth 2.0 grant flows against a configured identity provider.
//!
//! Each flow is a single linear sequence: build the request parameters,
//! fire one HTTP request, surface the parsed JSON response. The provider
//! is an opaque collaborator; all token issuance and validation happens
//! on its side.
//!
//! # Components
//!
//! - [`pkce`] — code verifier generation, S256 challenge derivation, state nonces
//! - [`flow`] — authorization URL construction, the four token grants, introspection
//! - [`idtoken`] — unverified ID-token claim decoding (debug use only)
//!
//! Flow functions take the authorization code as a plain parameter; how it
//! was obtained (interactive prompt, test fixture) is the caller's concern.

pub mod error;
pub mod flow;
pub mod idtoken;
pub mod pkce;

pub use error::{OAuthError, Result};
pub use flow::{
    TokenRequest, TokenResponse, build_authorization_url, exchange_token, introspect_token,
};
pub use idtoken::decode_claims_unverified;
pub use pkce::{
    DEFAULT_VERIFIER_LENGTH, PkceChallenge, derive_code_challenge, generate_code_verifier,
    generate_state,
};
