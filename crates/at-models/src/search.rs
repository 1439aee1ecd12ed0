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

//! Tavily request payloads
//!
//! Search, crawl and map drop every field that is `None` before the body is
//! written. Extract keeps all four of its keys and writes a cleared option as
//! `null`. The two domain lists on search are always sent, empty or not.

use serde::{Deserialize, Deserializer, Serialize};

fn basic() -> Option<String> {
  Some("basic".to_string())
}

fn markdown() -> Option<String> {
  Some("markdown".to_string())
}

fn some_true() -> Option<bool> {
  Some(true)
}

fn some_false() -> Option<bool> {
  Some(false)
}

fn one() -> Option<u32> {
  Some(1)
}

fn three() -> Option<u32> {
  Some(3)
}

fn seven() -> Option<u32> {
  Some(7)
}

fn twenty() -> Option<u32> {
  Some(20)
}

fn fifty() -> Option<u32> {
  Some(50)
}

// `null` and a missing key both become an empty list.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
  D: Deserializer<'de>,
{
  Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of `POST /search`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
  /// Search query
  pub query: String,

  /// Topic to focus the search on
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub topic: Option<String>,

  /// `basic` or `advanced`
  #[serde(default = "basic", skip_serializing_if = "Option::is_none")]
  pub search_depth: Option<String>,

  #[serde(default = "three", skip_serializing_if = "Option::is_none")]
  pub chunks_per_source: Option<u32>,

  #[serde(default = "one", skip_serializing_if = "Option::is_none")]
  pub max_results: Option<u32>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub time_range: Option<String>,

  /// Look-back window in days
  #[serde(default = "seven", skip_serializing_if = "Option::is_none")]
  pub days: Option<u32>,

  #[serde(default = "some_true", skip_serializing_if = "Option::is_none")]
  pub include_answer: Option<bool>,

  #[serde(default = "some_true", skip_serializing_if = "Option::is_none")]
  pub include_raw_content: Option<bool>,

  #[serde(default = "some_false", skip_serializing_if = "Option::is_none")]
  pub include_images: Option<bool>,

  #[serde(default = "some_false", skip_serializing_if = "Option::is_none")]
  pub include_image_descriptions: Option<bool>,

  /// Always sent, `[]` when empty
  #[serde(default, deserialize_with = "null_as_empty")]
  pub include_domains: Vec<String>,

  /// Always sent, `[]` when empty
  #[serde(default, deserialize_with = "null_as_empty")]
  pub exclude_domains: Vec<String>,

  /// Country code to boost results from
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub country: Option<String>,
}

impl SearchRequest {
  /// Search with every option at its default
  pub fn new(query: impl Into<String>) -> Self {
    Self {
      query: query.into(),
      topic: None,
      search_depth: basic(),
      chunks_per_source: Some(3),
      max_results: Some(1),
      time_range: None,
      days: Some(7),
      include_answer: Some(true),
      include_raw_content: Some(true),
      include_images: Some(false),
      include_image_descriptions: Some(false),
      include_domains: Vec::new(),
      exclude_domains: Vec::new(),
      country: None,
    }
  }

  pub fn topic(mut self, topic: impl Into<String>) -> Self {
    self.topic = Some(topic.into());
    self
  }

  pub fn search_depth(mut self, depth: impl Into<String>) -> Self {
    self.search_depth = Some(depth.into());
    self
  }

  pub fn chunks_per_source(mut self, chunks: u32) -> Self {
    self.chunks_per_source = Some(chunks);
    self
  }

  pub fn max_results(mut self, max_results: u32) -> Self {
    self.max_results = Some(max_results);
    self
  }

  pub fn time_range(mut self, time_range: impl Into<String>) -> Self {
    self.time_range = Some(time_range.into());
    self
  }

  pub fn days(mut self, days: u32) -> Self {
    self.days = Some(days);
    self
  }

  pub fn include_answer(mut self, include: bool) -> Self {
    self.include_answer = Some(include);
    self
  }

  pub fn include_raw_content(mut self, include: bool) -> Self {
    self.include_raw_content = Some(include);
    self
  }

  pub fn include_images(mut self, include: bool) -> Self {
    self.include_images = Some(include);
    self
  }

  pub fn include_image_descriptions(mut self, include: bool) -> Self {
    self.include_image_descriptions = Some(include);
    self
  }

  pub fn include_domains<I, S>(mut self, domains: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.include_domains = domains.into_iter().map(Into::into).collect();
    self
  }

  pub fn exclude_domains<I, S>(mut self, domains: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.exclude_domains = domains.into_iter().map(Into::into).collect();
    self
  }

  pub fn country(mut self, country: impl Into<String>) -> Self {
    self.country = Some(country.into());
    self
  }
}

/// Body of `POST /extract`.
///
/// No field is skipped: a cleared option goes out as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractRequest {
  /// Pages to extract
  pub urls: Vec<String>,

  #[serde(default = "some_false")]
  pub include_images: Option<bool>,

  /// `basic` or `advanced`
  #[serde(default = "basic")]
  pub extract_depth: Option<String>,

  /// Output format, e.g. `markdown` or `text`
  #[serde(default = "markdown")]
  pub format: Option<String>,
}

impl ExtractRequest {
  pub fn new<I, S>(urls: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    Self {
      urls: urls.into_iter().map(Into::into).collect(),
      include_images: Some(false),
      extract_depth: basic(),
      format: markdown(),
    }
  }

  pub fn include_images(mut self, include: bool) -> Self {
    self.include_images = Some(include);
    self
  }

  pub fn extract_depth(mut self, depth: impl Into<String>) -> Self {
    self.extract_depth = Some(depth.into());
    self
  }

  pub fn format(mut self, format: impl Into<String>) -> Self {
    self.format = Some(format.into());
    self
  }
}

/// Body of `POST /crawl`, and of `POST /map` through [`MapRequest`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrawlRequest {
  /// Root URL the traversal starts from
  pub url: String,

  #[serde(default = "one", skip_serializing_if = "Option::is_none")]
  pub max_depth: Option<u32>,

  /// Links followed per level
  #[serde(default = "twenty", skip_serializing_if = "Option::is_none")]
  pub max_breadth: Option<u32>,

  /// Total pages processed before stopping
  #[serde(default = "fifty", skip_serializing_if = "Option::is_none")]
  pub limit: Option<u32>,

  /// Natural language guidance for the crawler
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub instructions: Option<String>,

  /// Path regexes to keep
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub select_paths: Option<Vec<String>>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub select_domains: Option<Vec<String>>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exclude_paths: Option<Vec<String>>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exclude_domains: Option<Vec<String>>,

  #[serde(default = "some_false", skip_serializing_if = "Option::is_none")]
  pub allow_external: Option<bool>,

  #[serde(default = "some_false", skip_serializing_if = "Option::is_none")]
  pub include_images: Option<bool>,

  /// Content categories such as `Documentation` or `Blog`
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub categories: Option<Vec<String>>,

  #[serde(default = "basic", skip_serializing_if = "Option::is_none")]
  pub extract_depth: Option<String>,

  #[serde(default = "markdown", skip_serializing_if = "Option::is_none")]
  pub format: Option<String>,
}

/// Map takes exactly the crawl parameter set
pub type MapRequest = CrawlRequest;

fn strings<I, S>(items: I) -> Option<Vec<String>>
where
  I: IntoIterator<Item = S>,
  S: Into<String>,
{
  Some(items.into_iter().map(Into::into).collect())
}

impl CrawlRequest {
  /// Traversal from `url` with every option at its default
  pub fn new(url: impl Into<String>) -> Self {
    Self {
      url: url.into(),
      max_depth: Some(1),
      max_breadth: Some(20),
      limit: Some(50),
      instructions: None,
      select_paths: None,
      select_domains: None,
      exclude_paths: None,
      exclude_domains: None,
      allow_external: Some(false),
      include_images: Some(false),
      categories: None,
      extract_depth: basic(),
      format: markdown(),
    }
  }

  pub fn max_depth(mut self, depth: u32) -> Self {
    self.max_depth = Some(depth);
    self
  }

  pub fn max_breadth(mut self, breadth: u32) -> Self {
    self.max_breadth = Some(breadth);
    self
  }

  pub fn limit(mut self, limit: u32) -> Self {
    self.limit = Some(limit);
    self
  }

  pub fn instructions(mut self, instructions: impl Into<String>) -> Self {
    self.instructions = Some(instructions.into());
    self
  }

  pub fn select_paths<I, S>(mut self, paths: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.select_paths = strings(paths);
    self
  }

  pub fn select_domains<I, S>(mut self, domains: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.select_domains = strings(domains);
    self
  }

  pub fn exclude_paths<I, S>(mut self, paths: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.exclude_paths = strings(paths);
    self
  }

  pub fn exclude_domains<I, S>(mut self, domains: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.exclude_domains = strings(domains);
    self
  }

  pub fn allow_external(mut self, allow: bool) -> Self {
    self.allow_external = Some(allow);
    self
  }

  pub fn include_images(mut self, include: bool) -> Self {
    self.include_images = Some(include);
    self
  }

  pub fn categories<I, S>(mut self, categories: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.categories = strings(categories);
    self
  }

  pub fn extract_depth(mut self, depth: impl Into<String>) -> Self {
    self.extract_depth = Some(depth.into());
    self
  }

  pub fn format(mut self, format: impl Into<String>) -> Self {
    self.format = Some(format.into());
    self
  }
}
