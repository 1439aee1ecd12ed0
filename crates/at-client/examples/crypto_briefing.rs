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

//! Crypto Briefing Example
//!
//! Pulls the hottest posts for a set of currencies from CryptoPanic, then asks
//! Tavily for a short answer about the first headline.
//!
//! ```text
//! CRYPTOPANIC_AUTH_TOKEN=... TAVILY_API_KEY=... \
//!   cargo run -p at-client --example crypto_briefing -- BTC,ETH
//! ```

use anyhow::{Context, Result};
use at_client::{AgentToolsClient, Error, NewsQuery, SearchRequest};
use at_core::Config;
use dotenvy::dotenv;
use serde_json::Value;
use tracing::{info, warn};

fn headlines(posts: &Value) -> Vec<String> {
  posts["results"]
    .as_array()
    .map(|results| {
      results.iter().filter_map(|post| post["title"].as_str()).map(str::to_string).collect()
    })
    .unwrap_or_default()
}

#[tokio::main]
async fn main() -> Result<()> {
  dotenv().ok();
  tracing_subscriber::fmt()
    .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()))
    .init();

  let currencies = std::env::args().nth(1).unwrap_or_else(|| "BTC".to_string());

  let config = Config::from_env().context("Failed to load configuration")?;
  let client = AgentToolsClient::new(config)?;

  let query = NewsQuery::new().currencies(currencies.as_str()).filter("hot").public(true);
  let posts = match client.news().fetch_news(&query).await {
    Ok(posts) => posts,
    Err(Error::Api { status, body }) => {
      anyhow::bail!("CryptoPanic rejected the request ({}): {}", status, body)
    }
    Err(e) => return Err(e.into()),
  };

  let titles = headlines(&posts);
  info!("{} hot post(s) for {}", titles.len(), currencies);
  for (i, title) in titles.iter().take(10).enumerate() {
    println!("{:>2}. {}", i + 1, title);
  }

  let Some(first) = titles.first() else {
    return Ok(());
  };

  let request = SearchRequest::new(first.as_str()).topic("news").max_results(3);
  match client.search().search(&request).await {
    Ok(found) => {
      println!();
      println!("Context: {}", found["answer"].as_str().unwrap_or("(no answer)"));
      for result in found["results"].as_array().into_iter().flatten() {
        println!("  - {}", result["url"].as_str().unwrap_or_default());
      }
    }
    Err(e) if e.is_config() => warn!("Skipping search: {}", e),
    Err(e) => return Err(e.into()),
  }

  Ok(())
}
