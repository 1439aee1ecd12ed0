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

//! Tavily search, extract, crawl and map endpoints
//!
//! All four operations POST a JSON body to `{tavily_base_url}/{operation}`
//! with `Authorization: Bearer <TAVILY_API_KEY>`. How `None` fields are
//! written is decided by the request models in `at_models::search`.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use at_core::{Config, FuncType, Result};
use at_models::search::{CrawlRequest, ExtractRequest, MapRequest, SearchRequest};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Tavily endpoints
pub struct SearchEndpoints {
  transport: Arc<Transport>,
  config: Arc<Config>,
}

impl_endpoint_base!(SearchEndpoints);

impl SearchEndpoints {
  /// Create a new search endpoints instance
  pub fn new(transport: Arc<Transport>, config: Arc<Config>) -> Self {
    Self { transport, config }
  }

  /// Run a web search
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use at_client::AgentToolsClient;
  /// # use at_core::Config;
  /// # use at_models::SearchRequest;
  /// # async fn run() -> at_core::Result<()> {
  /// let client = AgentToolsClient::new(Config::from_env()?)?;
  /// let found = client
  ///     .search()
  ///     .search(&SearchRequest::new("ETH price").topic("finance").max_results(5))
  ///     .await?;
  /// println!("{}", found["answer"]);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, request), fields(max_results = request.max_results))]
  pub async fn search(&self, request: &SearchRequest) -> Result<Value> {
    self.post(FuncType::Search, request).await
  }

  /// Extract page content from one or more URLs
  ///
  /// Unlike the other operations, cleared options are sent as `null`.
  #[instrument(skip(self, request), fields(urls = request.urls.len()))]
  pub async fn extract(&self, request: &ExtractRequest) -> Result<Value> {
    self.post(FuncType::Extract, request).await
  }

  /// Crawl a site starting from `request.url`
  #[instrument(skip(self, request), fields(url = %request.url))]
  pub async fn crawl(&self, request: &CrawlRequest) -> Result<Value> {
    self.post(FuncType::Crawl, request).await
  }

  /// Map the link structure of a site starting from `request.url`
  #[instrument(skip(self, request), fields(url = %request.url))]
  pub async fn map(&self, request: &MapRequest) -> Result<Value> {
    self.post(FuncType::Map, request).await
  }

  async fn post<B>(&self, function: FuncType, body: &B) -> Result<Value>
  where
    B: Serialize,
  {
    // No request is built without a key.
    let key = self.config().require_tavily_key()?;
    let url = self.transport().build_url(&self.config().tavily_base_url, function)?;

    self.transport().post_json(function, url, key, body).await
  }
}
