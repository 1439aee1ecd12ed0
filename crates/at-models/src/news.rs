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

//! CryptoPanic news query parameters
//!
//! The posts endpoint is filtered through a handful of optional selectors:
//! - `currencies`: comma separated codes such as `BTC,ETH`
//! - `regions`: language regions such as `en`, `fr`, `es`
//! - `filter`: rising, hot, bullish, bearish, important, saved, lol
//! - `kind`: `news` or `media`
//! - `public`: non user-specific feed

use serde::{Deserialize, Serialize};

/// Parameters for a CryptoPanic posts request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsQuery {
  /// Comma separated currency codes
  pub currencies: Option<String>,

  /// Region codes
  pub regions: Option<String>,

  /// Feed filter
  pub filter: Option<String>,

  /// `news` or `media`
  pub kind: Option<String>,

  /// Public usage mode
  pub public: bool,
}

impl NewsQuery {
  /// Empty query: every selector unset, private mode
  pub fn new() -> Self {
    Self::default()
  }

  pub fn currencies(mut self, currencies: impl Into<String>) -> Self {
    self.currencies = Some(currencies.into());
    self
  }

  pub fn regions(mut self, regions: impl Into<String>) -> Self {
    self.regions = Some(regions.into());
    self
  }

  pub fn filter(mut self, filter: impl Into<String>) -> Self {
    self.filter = Some(filter.into());
    self
  }

  pub fn kind(mut self, kind: impl Into<String>) -> Self {
    self.kind = Some(kind.into());
    self
  }

  pub fn public(mut self, public: bool) -> Self {
    self.public = public;
    self
  }

  /// Query pairs for the selectors that are set.
  ///
  /// Unset and empty selectors are left out, and `public` only appears as
  /// `public=true`. The auth token is not part of this list.
  pub fn to_params(&self) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    for (key, value) in [
      ("currencies", &self.currencies),
      ("regions", &self.regions),
      ("filter", &self.filter),
      ("kind", &self.kind),
    ] {
      if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
        params.push((key, value.to_string()));
      }
    }

    if self.public {
      params.push(("public", "true".to_string()));
    }

    params
  }
}
