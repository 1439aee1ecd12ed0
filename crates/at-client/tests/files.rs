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

mod common;

use at_client::{AgentToolsClient, Error, FileRequest};
use common::*;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_open_file_returns_json_unchanged() {
  let server = MockServer::start().await;
  let stored = json!({
    "fileId": "bafkreih3",
    "name": "q2-report.pdf",
    "encrypted": true,
    "data": "U2FsdGVkX1+abc"
  });
  Mock::given(method("GET"))
    .and(path("/api/storage/bafkreih3"))
    .and(query_param("agentId", "agent-42"))
    .and(header("accept", "application/json"))
    .and(header("content-type", "application/json"))
    .respond_with(ResponseTemplate::new(200).set_body_json(stored.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let file = mock_client(&server).files().open_file("bafkreih3", "agent-42").await.unwrap();

  assert_eq!(file, stored);
  let requests = received(&server).await;
  assert_eq!(sorted_keys(&query_map(&requests[0])), vec!["agentId"]);
}

#[tokio::test]
async fn test_open_file_needs_no_credentials() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/storage/f1"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ok": true })))
    .expect(1)
    .mount(&server)
    .await;

  let config = at_core::Config::default_with_keys(None, None)
    .with_storage_base_url(format!("{}{}", server.uri(), STORAGE_PATH));
  let client = AgentToolsClient::new(config).unwrap();

  let file = client.files().open(&FileRequest::new("f1", "agent-1")).await.unwrap();
  assert_eq!(file, json!({ "ok": true }));
}

#[tokio::test]
async fn test_blank_ids_are_rejected_before_sending() {
  let server = MockServer::start().await;
  let client = mock_client(&server);

  let err = client.files().open_file("", "agent-1").await.unwrap_err();
  assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("file_id")));

  let err = client.files().open_file("f1", "").await.unwrap_err();
  assert!(matches!(err, Error::InvalidInput(ref msg) if msg.contains("agent_id")));

  assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn test_forbidden_file_is_api_error() {
  let server = MockServer::start().await;
  Mock::given(method("GET"))
    .and(path("/api/storage/secret"))
    .respond_with(ResponseTemplate::new(403).set_body_json(json!({ "error": "Forbidden" })))
    .mount(&server)
    .await;

  let err = mock_client(&server).files().open_file("secret", "intruder").await.unwrap_err();

  assert_eq!(err.status(), Some(403));
  assert!(err.to_string().contains("Forbidden"));
}
