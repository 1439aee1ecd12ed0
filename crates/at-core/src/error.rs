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

use thiserror::Error;

/// The main error type for at-* crates
#[derive(Error, Debug)]
pub enum Error {
  /// A provider credential was not configured when a call needed it
  #[error("Missing credential: {0} not set")]
  MissingCredential(&'static str),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Caller supplied an unusable argument
  #[error("Invalid input: {0}")]
  InvalidInput(String),

  /// HTTP transport error (DNS, connect, timeout, body read)
  #[error("HTTP error: {0}")]
  Http(String),

  /// Non-success status returned by the remote API
  #[error("API error: HTTP {status}: {body}")]
  Api { status: u16, body: String },

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),
}

impl Error {
  /// HTTP status code for API errors
  pub fn status(&self) -> Option<u16> {
    match self {
      Error::Api { status, .. } => Some(*status),
      _ => None,
    }
  }

  /// True for errors raised before any request was attempted because of configuration
  pub fn is_config(&self) -> bool {
    matches!(self, Error::MissingCredential(_) | Error::Config(_))
  }

  /// True when the request could not complete at the transport level
  pub fn is_transport(&self) -> bool {
    matches!(self, Error::Http(_))
  }
}

/// Result type alias for at-* crates
pub type Result<T> = std::result::Result<T, Error>;
