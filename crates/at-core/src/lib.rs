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

pub mod config;
pub mod error;

pub use config::{Config, CRYPTOPANIC_TOKEN_VAR, TAVILY_KEY_VAR};
pub use error::{Error, Result};

/// The remote operations the clients can issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuncType {
  // CryptoPanic
  NewsPosts,

  // Agent file storage
  OpenFile,

  // Tavily
  Search,
  Extract,
  Crawl,
  Map,
}

impl FuncType {
  /// Path appended to the provider root, if any
  pub fn path(&self) -> &'static str {
    match self {
      FuncType::NewsPosts | FuncType::OpenFile => "",
      FuncType::Search => "search",
      FuncType::Extract => "extract",
      FuncType::Crawl => "crawl",
      FuncType::Map => "map",
    }
  }
}

impl std::fmt::Display for FuncType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      FuncType::NewsPosts => write!(f, "CRYPTOPANIC_POSTS"),
      FuncType::OpenFile => write!(f, "OPEN_FILE"),
      FuncType::Search => write!(f, "TAVILY_SEARCH"),
      FuncType::Extract => write!(f, "TAVILY_EXTRACT"),
      FuncType::Crawl => write!(f, "TAVILY_CRAWL"),
      FuncType::Map => write!(f, "TAVILY_MAP"),
    }
  }
}

/// CryptoPanic developer API posts endpoint
pub const CRYPTOPANIC_API_URL: &str = "https://cryptopanic.com/api/developer/v2/posts/";

/// Tavily API root
pub const TAVILY_API_URL: &str = "https://api.tavily.com";

/// Agent file storage root
pub const STORAGE_API_URL: &str = "https://thep33l-staging.up.railway.app/api/storage/";

/// Request timeout applied when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
