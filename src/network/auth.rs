// Threat Telemetry - Credentials
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Bearer token sources for backend requests.

use std::env;

/// Supplies the current bearer token, if any.
///
/// A missing token is not an error: requests are sent without the header.
pub trait TokenSource: Send + Sync {
    fn current_token(&self) -> Option<String>;
}

/// Never supplies a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenSource for NoToken {
    fn current_token(&self) -> Option<String> {
        None
    }
}

/// Always supplies the same token.
#[derive(Debug, Clone)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl TokenSource for StaticToken {
    fn current_token(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Reads the token from an environment variable on every request.
#[derive(Debug, Clone)]
pub struct EnvToken {
    var: String,
}

/// Default variable consulted by [`EnvToken`].
pub const TOKEN_ENV_VAR: &str = "THREAT_TELEMETRY_TOKEN";

impl Default for EnvToken {
    fn default() -> Self {
        Self::new(TOKEN_ENV_VAR)
    }
}

impl EnvToken {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl TokenSource for EnvToken {
    fn current_token(&self) -> Option<String> {
        env::var(&self.var)
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
    }
}

/// Attach `Authorization: Bearer` when the source has a token.
pub(crate) fn authorize(
    request: reqwest::RequestBuilder,
    tokens: &dyn TokenSource,
) -> reqwest::RequestBuilder {
    match tokens.current_token() {
        Some(token) => request.bearer_auth(token),
        None => request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_token_ignores_blank_values() {
        let var = "THREAT_TELEMETRY_TEST_TOKEN_BLANK";
        env::set_var(var, "   ");
        assert_eq!(EnvToken::new(var).current_token(), None);
        env::set_var(var, " abc ");
        assert_eq!(EnvToken::new(var).current_token(), Some("abc".to_string()));
        env::remove_var(var);
        assert_eq!(EnvToken::new(var).current_token(), None);
    }

    #[test]
    fn test_static_and_empty_sources() {
        assert_eq!(StaticToken::new("t0k").current_token(), Some("t0k".to_string()));
        assert_eq!(NoToken.current_token(), None);
    }
}
