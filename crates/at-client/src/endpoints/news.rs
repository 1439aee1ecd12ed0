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

//! CryptoPanic news endpoint
//!
//! One GET against the developer v2 posts feed, authenticated with the
//! `auth_token` query parameter.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use at_core::{Config, FuncType, Result};
use at_models::news::NewsQuery;
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// CryptoPanic news endpoints
pub struct NewsEndpoints {
  transport: Arc<Transport>,
  config: Arc<Config>,
}

impl_endpoint_base!(NewsEndpoints);

impl NewsEndpoints {
  /// Create a new news endpoints instance
  pub fn new(transport: Arc<Transport>, config: Arc<Config>) -> Self {
    Self { transport, config }
  }

  /// Fetch the latest posts matching `query`
  ///
  /// The auth token always leads the query string; selectors that are unset
  /// or empty are left out and `public` is only sent when true.
  ///
  /// # Errors
  ///
  /// Returns `Error::MissingCredential` without touching the network when
  /// `CRYPTOPANIC_AUTH_TOKEN` is not configured.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use at_client::AgentToolsClient;
  /// # use at_core::Config;
  /// # use at_models::NewsQuery;
  /// # async fn run() -> at_core::Result<()> {
  /// let client = AgentToolsClient::new(Config::from_env()?)?;
  /// let posts = client
  ///     .news()
  ///     .fetch_news(&NewsQuery::new().currencies("BTC,ETH").public(true))
  ///     .await?;
  /// println!("{}", posts["results"]);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, query), fields(public = query.public, kind = query.kind.as_deref()))]
  pub async fn fetch_news(&self, query: &NewsQuery) -> Result<Value> {
    let token = self.config().require_cryptopanic_token()?;
    let url = self.transport().build_url(&self.config().cryptopanic_base_url, FuncType::NewsPosts)?;

    let mut params = vec![("auth_token", token.to_string())];
    params.extend(query.to_params());
    debug!("Requesting posts with {} selector(s)", params.len() - 1);

    self.transport().get(FuncType::NewsPosts, url, &params, HeaderMap::new()).await
  }

  /// Latest posts for a comma separated list of currency codes
  pub async fn for_currencies(&self, currencies: &str) -> Result<Value> {
    self.fetch_news(&NewsQuery::new().currencies(currencies)).await
  }
}
