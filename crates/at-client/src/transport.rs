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

//! HTTP transport layer shared by every endpoint group

use at_core::{Config, Error, FuncType, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

const USER_AGENT: &str = concat!("at-client/", env!("CARGO_PKG_VERSION"));

/// HTTP transport: one pooled `reqwest::Client`, one request per call, no retries
#[derive(Debug)]
pub struct Transport {
  client: Client,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);
    let client = Client::builder()
      .timeout(timeout)
      .user_agent(USER_AGENT)
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, timeout })
  }

  /// Issue a GET with query pairs and extra headers, decoding the JSON body
  #[instrument(skip(self, url, params, headers), fields(function = %function, path = url.path()))]
  pub async fn get<T>(
    &self,
    function: FuncType,
    url: Url,
    params: &[(&str, String)],
    headers: HeaderMap,
  ) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let request = self.client.get(url).query(params).headers(headers);
    self.execute(function, request).await
  }

  /// Issue a bearer-authenticated JSON POST, decoding the JSON body
  #[instrument(skip(self, url, bearer, body), fields(function = %function, path = url.path()))]
  pub async fn post_json<B, T>(
    &self,
    function: FuncType,
    url: Url,
    bearer: &str,
    body: &B,
  ) -> Result<T>
  where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
  {
    let request = self
      .client
      .post(url)
      .bearer_auth(bearer)
      .header(ACCEPT, HeaderValue::from_static("application/json"))
      .json(body);
    self.execute(function, request).await
  }

  async fn execute<T>(&self, function: FuncType, request: RequestBuilder) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let response = request.send().await.map_err(transport_error)?;

    let status = response.status();
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e.without_url())))?;

    if !status.is_success() {
      error!("{} failed with status: {}", function, status);
      return Err(Error::Api { status: status.as_u16(), body: text });
    }

    debug!("Response body length: {} bytes", text.len());

    serde_json::from_str::<T>(&text).map_err(|e| {
      error!("Failed to parse JSON response: {}", e);
      error!("Response text (first 500 chars): {}", preview(&text, 500));
      Error::Serde(e)
    })
  }

  /// Join an operation path onto a provider root
  pub fn build_url(&self, base_url: &str, function: FuncType) -> Result<Url> {
    let raw = match function.path() {
      "" => base_url.to_string(),
      path => format!("{}/{}", base_url.trim_end_matches('/'), path),
    };

    Url::parse(&raw).map_err(|e| Error::Config(format!("Invalid base URL {}: {}", base_url, e)))
  }

  /// Append `segment` to `base_url` as one percent-encoded path segment
  pub fn segment_url(&self, base_url: &str, segment: &str) -> Result<Url> {
    let mut url = Url::parse(base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL {}: {}", base_url, e)))?;

    url
      .path_segments_mut()
      .map_err(|_| Error::Config(format!("Base URL cannot take a path: {}", base_url)))?
      .pop_if_empty()
      .push(segment);

    Ok(url)
  }

  /// Headers for endpoints that exchange JSON over GET
  pub fn json_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

// The URL is dropped so query credentials never reach logs or messages.
fn transport_error(e: reqwest::Error) -> Error {
  let timed_out = e.is_timeout();
  let e = e.without_url();
  if timed_out {
    error!("Request timed out: {}", e);
    Error::Http(format!("Request timed out: {}", e))
  } else {
    error!("Request failed: {}", e);
    Error::Http(format!("Request failed: {}", e))
  }
}

fn preview(text: &str, max_chars: usize) -> String {
  text.chars().take(max_chars).collect()
}
