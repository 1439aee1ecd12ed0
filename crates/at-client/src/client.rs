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

//! Client facade tying configuration, transport and endpoint groups together

use crate::endpoints::{files::FileEndpoints, news::NewsEndpoints, search::SearchEndpoints};
use crate::transport::Transport;
use at_core::{Config, Result};
use std::sync::Arc;

/// Facade over the news, file storage and search clients
///
/// Holds the immutable configuration and a single HTTP transport. Cloning is
/// cheap and clones share the connection pool. Every call is one request and
/// one response: no retries, no rate limiting, no caching.
///
/// # Examples
///
/// ```rust,no_run
/// use at_client::AgentToolsClient;
/// use at_core::Config;
/// use at_models::{CrawlRequest, NewsQuery};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = Config::from_env()?;
///     let client = AgentToolsClient::new(config)?;
///
///     let news = client.news().fetch_news(&NewsQuery::new().filter("hot")).await?;
///     println!("{}", news);
///
///     let pages = client.search().crawl(&CrawlRequest::new("https://docs.tavily.com").limit(10)).await?;
///     println!("{}", pages);
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct AgentToolsClient {
  config: Arc<Config>,
  transport: Arc<Transport>,
}

impl AgentToolsClient {
  /// Create a new client
  ///
  /// Missing credentials are not an error here; they fail the first call to
  /// the provider that needs them.
  ///
  /// # Errors
  ///
  /// Returns an error if the configuration is invalid or the HTTP client
  /// cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    config.validate()?;
    let transport = Arc::new(Transport::new(&config)?);

    Ok(Self { config: Arc::new(config), transport })
  }

  /// Get access to the CryptoPanic news endpoint
  pub fn news(&self) -> NewsEndpoints {
    NewsEndpoints::new(self.transport.clone(), self.config.clone())
  }

  /// Get access to the agent file storage endpoint
  pub fn files(&self) -> FileEndpoints {
    FileEndpoints::new(self.transport.clone(), self.config.clone())
  }

  /// Get access to the Tavily search, extract, crawl and map endpoints
  pub fn search(&self) -> SearchEndpoints {
    SearchEndpoints::new(self.transport.clone(), self.config.clone())
  }

  /// Configuration the client was built with
  pub fn config(&self) -> &Config {
    &self.config
  }
}

impl std::fmt::Debug for AgentToolsClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("AgentToolsClient")
      .field("config", &self.config)
      .field("transport", &self.transport)
      .finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::default_with_keys(Some("cp".to_string()), Some("tvly".to_string()));

    let client = AgentToolsClient::new(config).expect("Failed to create client");
    assert_eq!(client.config().timeout_secs, at_core::DEFAULT_TIMEOUT_SECS);
  }

  #[test]
  fn test_client_creation_without_credentials() {
    let client = AgentToolsClient::new(Config::default_with_keys(None, None));
    assert!(client.is_ok());
  }

  #[test]
  fn test_invalid_config_is_rejected() {
    let config = Config::default_with_keys(None, None).with_storage_base_url("storage");
    assert!(AgentToolsClient::new(config).unwrap_err().is_config());
  }

  #[test]
  fn test_debug_hides_credentials() {
    let config = Config::default_with_keys(Some("cp-secret".to_string()), None);
    let client = AgentToolsClient::new(config).unwrap();
    assert!(!format!("{:?}", client).contains("cp-secret"));
  }

  #[test]
  fn test_client_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AgentToolsClient>();
  }
}
