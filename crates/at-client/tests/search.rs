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

use at_client::{AgentToolsClient, CrawlRequest, Error, ExtractRequest, MapRequest, SearchRequest};
use common::*;
use serde_json::{json, Value};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn bearer() -> String {
  format!("Bearer {}", TAVILY_KEY)
}

async fn sent_body(server: &MockServer) -> Value {
  let requests = received(server).await;
  assert_eq!(requests.len(), 1);
  serde_json::from_slice(&requests[0].body).expect("request body is JSON")
}

#[tokio::test]
async fn test_search_posts_defaults_with_empty_domain_lists() {
  let server = MockServer::start().await;
  let answer = json!({
    "query": "ETH price",
    "answer": "ETH trades near $3,400.",
    "results": [{ "title": "Ethereum price", "url": "https://example.com/eth", "score": 0.91 }],
    "response_time": 1.2
  });
  Mock::given(method("POST"))
    .and(path("/search"))
    .and(header("authorization", bearer().as_str()))
    .and(header("content-type", "application/json"))
    .respond_with(ResponseTemplate::new(200).set_body_json(answer.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let result = mock_client(&server).search().search(&SearchRequest::new("ETH price")).await.unwrap();

  assert_eq!(result, answer);
  assert_eq!(
    sent_body(&server).await,
    json!({
      "query": "ETH price",
      "search_depth": "basic",
      "chunks_per_source": 3,
      "max_results": 1,
      "days": 7,
      "include_answer": true,
      "include_raw_content": true,
      "include_images": false,
      "include_image_descriptions": false,
      "include_domains": [],
      "exclude_domains": []
    })
  );
}

#[tokio::test]
async fn test_search_strips_cleared_options() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/search"))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
    .mount(&server)
    .await;

  let mut request = SearchRequest::new("solana outage")
    .topic("news")
    .time_range("week")
    .include_domains(["coindesk.com"]);
  request.days = None;
  request.include_answer = None;

  mock_client(&server).search().search(&request).await.unwrap();

  let body = sent_body(&server).await;
  assert_eq!(body["topic"], "news");
  assert_eq!(body["time_range"], "week");
  assert_eq!(body["include_domains"], json!(["coindesk.com"]));
  assert!(body.get("days").is_none());
  assert!(body.get("include_answer").is_none());
  assert!(body.get("country").is_none());
}

#[tokio::test]
async fn test_extract_sends_null_fields() {
  let server = MockServer::start().await;
  let expected = json!({
    "urls": ["https://example.com/a", "https://example.com/b"],
    "include_images": false,
    "extract_depth": null,
    "format": "text"
  });
  Mock::given(method("POST"))
    .and(path("/extract"))
    .and(header("authorization", bearer().as_str()))
    .and(body_json(&expected))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [], "failed_results": [] })))
    .expect(1)
    .mount(&server)
    .await;

  let mut request = ExtractRequest::new(["https://example.com/a", "https://example.com/b"]).format("text");
  request.extract_depth = None;

  mock_client(&server).search().extract(&request).await.unwrap();
}

#[tokio::test]
async fn test_crawl_strips_unset_options() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/crawl"))
    .and(body_json(json!({
      "url": "https://docs.tavily.com",
      "max_depth": 2,
      "max_breadth": 20,
      "limit": 50,
      "select_paths": ["/documentation/.*"],
      "allow_external": false,
      "include_images": false,
      "extract_depth": "basic",
      "format": "markdown"
    })))
    .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "base_url": "https://docs.tavily.com", "results": [] })))
    .expect(1)
    .mount(&server)
    .await;

  let request = CrawlRequest::new("https://docs.tavily.com").max_depth(2).select_paths(["/documentation/.*"]);
  let result = mock_client(&server).search().crawl(&request).await.unwrap();

  assert_eq!(result["base_url"], "https://docs.tavily.com");
}

#[tokio::test]
async fn test_map_uses_crawl_parameters() {
  let server = MockServer::start().await;
  let site_map = json!({
    "base_url": "https://docs.tavily.com",
    "results": ["https://docs.tavily.com/welcome", "https://docs.tavily.com/sdk"]
  });
  Mock::given(method("POST"))
    .and(path("/map"))
    .and(header("authorization", bearer().as_str()))
    .respond_with(ResponseTemplate::new(200).set_body_json(site_map.clone()))
    .expect(1)
    .mount(&server)
    .await;

  let mut request: MapRequest =
    CrawlRequest::new("https://docs.tavily.com").instructions("sdk pages").allow_external(true);
  request.limit = None;

  let result = mock_client(&server).search().map(&request).await.unwrap();
  assert_eq!(result, site_map);

  let body = sent_body(&server).await;
  assert_eq!(body["instructions"], "sdk pages");
  assert_eq!(body["allow_external"], true);
  assert!(body.get("limit").is_none());
  assert!(body.get("categories").is_none());
}

#[tokio::test]
async fn test_missing_key_sends_nothing() {
  let server = MockServer::start().await;
  let config = at_core::Config { tavily_api_key: None, ..mock_config(&server) };
  let client = AgentToolsClient::new(config).unwrap();
  let endpoints = client.search();

  let errors = vec![
    endpoints.search(&SearchRequest::new("q")).await.unwrap_err(),
    endpoints.extract(&ExtractRequest::new(["https://example.com"])).await.unwrap_err(),
    endpoints.crawl(&CrawlRequest::new("https://example.com")).await.unwrap_err(),
    endpoints.map(&CrawlRequest::new("https://example.com")).await.unwrap_err(),
  ];

  for err in errors {
    assert!(matches!(err, Error::MissingCredential("TAVILY_API_KEY")));
  }
  assert!(received(&server).await.is_empty());
}

#[tokio::test]
async fn test_rate_limited_response_is_api_error() {
  let server = MockServer::start().await;
  Mock::given(method("POST"))
    .and(path("/search"))
    .respond_with(ResponseTemplate::new(429).set_body_json(json!({ "detail": { "error": "Rate limit exceeded" } })))
    .expect(1)
    .mount(&server)
    .await;

  let err = mock_client(&server).search().search(&SearchRequest::new("q")).await.unwrap_err();

  assert_eq!(err.status(), Some(429));
  match err {
    Error::Api { body, .. } => {
      let body: Value = serde_json::from_str(&body).unwrap();
      assert_eq!(body["detail"]["error"], "Rate limit exceeded");
    }
    other => panic!("Expected Api error, got {:?}", other),
  }
}
