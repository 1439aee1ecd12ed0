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

//! # at-client
//!
//! Thin HTTP clients for the tools an agent can call out to.
//!
//! ## Features
//!
//! - **CryptoPanic news**: latest crypto posts filtered by currency, region, filter and kind
//! - **File storage**: agent-scoped retrieval of stored files
//! - **Tavily**: web search, page extraction, site crawl and site map
//! - **Configurable**: environment-based configuration via at-core
//!
//! Each operation assembles its parameters, issues exactly one request and
//! returns the decoded JSON body unchanged.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use at_client::AgentToolsClient;
//! use at_core::Config;
//! use at_models::{NewsQuery, SearchRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AgentToolsClient::new(Config::from_env()?)?;
//!
//!     let posts = client.news().fetch_news(&NewsQuery::new().currencies("BTC")).await?;
//!     println!("{}", posts);
//!
//!     let results = client.search().search(&SearchRequest::new("bitcoin halving")).await?;
//!     println!("{}", results);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, at_core::Error>`:
//! - `MissingCredential` / `Config`: nothing was sent
//! - `Http`: the request could not complete (DNS, connect, timeout)
//! - `Api`: non-success status, with status code and body preserved
//! - `Serde`: the body was not the expected JSON

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod transport;

// Re-export the main client and common types
pub use at_core::{Config, Error, Result};
pub use at_models::*;
pub use client::AgentToolsClient;

// Re-export endpoint modules for direct access if needed
pub use endpoints::{files::FileEndpoints, news::NewsEndpoints, search::SearchEndpoints};
