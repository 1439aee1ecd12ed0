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

#![allow(dead_code)]

use at_client::AgentToolsClient;
use at_core::Config;
use std::collections::HashMap;
use wiremock::{MockServer, Request};

pub const NEWS_PATH: &str = "/api/developer/v2/posts/";
pub const STORAGE_PATH: &str = "/api/storage/";
pub const CP_TOKEN: &str = "cp-test-token";
pub const TAVILY_KEY: &str = "tvly-test-key";

/// Config with both credentials, every provider pointed at `server`
pub fn mock_config(server: &MockServer) -> Config {
  Config::default_with_keys(Some(CP_TOKEN.to_string()), Some(TAVILY_KEY.to_string()))
    .with_cryptopanic_base_url(format!("{}{}", server.uri(), NEWS_PATH))
    .with_tavily_base_url(server.uri())
    .with_storage_base_url(format!("{}{}", server.uri(), STORAGE_PATH))
    .with_timeout_secs(5)
}

pub fn mock_client(server: &MockServer) -> AgentToolsClient {
  AgentToolsClient::new(mock_config(server)).expect("Failed to create client")
}

pub async fn received(server: &MockServer) -> Vec<Request> {
  server.received_requests().await.expect("request recording is enabled")
}

pub fn query_map(request: &Request) -> HashMap<String, String> {
  request.url.query_pairs().map(|(k, v)| (k.into_owned(), v.into_owned())).collect()
}

pub fn sorted_keys(map: &HashMap<String, String>) -> Vec<String> {
  let mut keys: Vec<String> = map.keys().cloned().collect();
  keys.sort();
  keys
}
