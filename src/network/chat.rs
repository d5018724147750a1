// Threat Telemetry - Assistant Client
// Copyright (C) 2026 Christos Daggas
// SPDX-License-Identifier: MIT

//! Client for the security assistant endpoint.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::auth::{authorize, TokenSource};

/// Reply substituted whenever the assistant cannot be reached.
pub const CHAT_FALLBACK_REPLY: &str =
    "I'm having trouble connecting to my neural core. Please ensure the CyberSpy Backend is active.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    response: String,
}

/// Sends questions to the assistant and never fails.
#[derive(Clone)]
pub struct ChatClient {
    http: reqwest::Client,
    endpoint: String,
    tokens: Arc<dyn TokenSource>,
}

impl ChatClient {
    pub fn new(endpoint: impl Into<String>, tokens: Arc<dyn TokenSource>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
            tokens,
        })
    }

    /// Ask the assistant a question.
    ///
    /// Blank messages are not sent and return `None`. Any failure yields
    /// [`CHAT_FALLBACK_REPLY`].
    pub async fn ask(&self, message: &str) -> Option<String> {
        if message.trim().is_empty() {
            return None;
        }

        match self.send(message).await {
            Ok(reply) => Some(reply),
            Err(e) => {
                warn!("Assistant request failed: {:#}", e);
                Some(CHAT_FALLBACK_REPLY.to_string())
            }
        }
    }

    async fn send(&self, message: &str) -> Result<String> {
        debug!("Sending assistant message to {}", self.endpoint);

        let request = self.http.post(&self.endpoint).json(&ChatRequest { message });
        let response = authorize(request, self.tokens.as_ref())
            .send()
            .await
            .context("Assistant request failed")?;

        let status = response.status();
        if !status.is_success() {
            bail!("Assistant returned HTTP {}", status);
        }

        let body: ChatResponse = response
            .json()
            .await
            .context("Assistant response has no reply")?;
        Ok(body.response)
    }
}
