/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Configuration management for the agent tool clients

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Environment variable holding the CryptoPanic auth token
pub const CRYPTOPANIC_TOKEN_VAR: &str = "CRYPTOPANIC_AUTH_TOKEN";

/// Environment variable holding the Tavily API key
pub const TAVILY_KEY_VAR: &str = "TAVILY_API_KEY";

/// Main configuration struct, built once at process start and handed to the client
#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
  /// CryptoPanic auth token, sent as the `auth_token` query parameter
  #[serde(skip_serializing)]
  pub cryptopanic_auth_token: Option<String>,

  /// Tavily API key, sent as a bearer token
  #[serde(skip_serializing)]
  pub tavily_api_key: Option<String>,

  /// CryptoPanic posts endpoint
  pub cryptopanic_base_url: String,

  /// Tavily API root; operation paths are appended to it
  pub tavily_base_url: String,

  /// Storage API root; file ids are appended to it
  pub storage_base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Config {
  /// Load configuration from environment variables (and `.env` when present)
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Build configuration from an arbitrary variable lookup
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let credential = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    let timeout_secs = match lookup("AT_TIMEOUT_SECS") {
      Some(raw) => raw
        .trim()
        .parse::<u64>()
        .ok()
        .filter(|secs| *secs > 0)
        .ok_or_else(|| Error::Config(format!("Invalid AT_TIMEOUT_SECS: {}", raw)))?,
      None => crate::DEFAULT_TIMEOUT_SECS,
    };

    let config = Config {
      cryptopanic_auth_token: credential(CRYPTOPANIC_TOKEN_VAR),
      tavily_api_key: credential(TAVILY_KEY_VAR),
      cryptopanic_base_url: lookup("CRYPTOPANIC_BASE_URL")
        .unwrap_or_else(|| crate::CRYPTOPANIC_API_URL.to_string()),
      tavily_base_url: lookup("TAVILY_BASE_URL")
        .unwrap_or_else(|| crate::TAVILY_API_URL.to_string()),
      storage_base_url: lookup("STORAGE_BASE_URL")
        .unwrap_or_else(|| crate::STORAGE_API_URL.to_string()),
      timeout_secs,
    };

    config.validate()?;
    Ok(config)
  }

  /// Create a config with default endpoints and the given credentials
  pub fn default_with_keys(
    cryptopanic_auth_token: Option<String>,
    tavily_api_key: Option<String>,
  ) -> Self {
    Config {
      cryptopanic_auth_token,
      tavily_api_key,
      cryptopanic_base_url: crate::CRYPTOPANIC_API_URL.to_string(),
      tavily_base_url: crate::TAVILY_API_URL.to_string(),
      storage_base_url: crate::STORAGE_API_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }

  /// Point the news client at another endpoint
  pub fn with_cryptopanic_base_url(mut self, url: impl Into<String>) -> Self {
    self.cryptopanic_base_url = url.into();
    self
  }

  /// Point the search client at another API root
  pub fn with_tavily_base_url(mut self, url: impl Into<String>) -> Self {
    self.tavily_base_url = url.into();
    self
  }

  /// Point the file client at another storage root
  pub fn with_storage_base_url(mut self, url: impl Into<String>) -> Self {
    self.storage_base_url = url.into();
    self
  }

  /// Override the request timeout
  pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
    self.timeout_secs = timeout_secs;
    self
  }

  /// Check that every endpoint parses as an absolute URL and the timeout is usable
  pub fn validate(&self) -> Result<()> {
    for (name, value) in [
      ("CRYPTOPANIC_BASE_URL", &self.cryptopanic_base_url),
      ("TAVILY_BASE_URL", &self.tavily_base_url),
      ("STORAGE_BASE_URL", &self.storage_base_url),
    ] {
      Url::parse(value).map_err(|e| Error::Config(format!("Invalid {}: {}", name, e)))?;
    }

    if self.timeout_secs == 0 {
      return Err(Error::Config("timeout_secs must be greater than zero".to_string()));
    }

    Ok(())
  }

  /// CryptoPanic token, or a configuration error naming the missing variable
  pub fn require_cryptopanic_token(&self) -> Result<&str> {
    self.cryptopanic_auth_token.as_deref().ok_or(Error::MissingCredential(CRYPTOPANIC_TOKEN_VAR))
  }

  /// Tavily key, or a configuration error naming the missing variable
  pub fn require_tavily_key(&self) -> Result<&str> {
    self.tavily_api_key.as_deref().ok_or(Error::MissingCredential(TAVILY_KEY_VAR))
  }
}

// Credentials stay out of logs and panic messages.
impl std::fmt::Debug for Config {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let redact = |v: &Option<String>| v.as_ref().map(|_| "<redacted>");
    f.debug_struct("Config")
      .field("cryptopanic_auth_token", &redact(&self.cryptopanic_auth_token))
      .field("tavily_api_key", &redact(&self.tavily_api_key))
      .field("cryptopanic_base_url", &self.cryptopanic_base_url)
      .field("tavily_base_url", &self.tavily_base_url)
      .field("storage_base_url", &self.storage_base_url)
      .field("timeout_secs", &self.timeout_secs)
      .finish()
  }
}
