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

//! Agent file storage endpoint
//!
//! Returns the stored record as decoded JSON. Content decryption is left to
//! the caller.

use super::{impl_endpoint_base, EndpointBase};
use crate::transport::Transport;
use at_core::{Config, Error, FuncType, Result};
use at_models::files::FileRequest;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Storage endpoints scoped by agent id
pub struct FileEndpoints {
  transport: Arc<Transport>,
  config: Arc<Config>,
}

impl_endpoint_base!(FileEndpoints);

impl FileEndpoints {
  /// Create a new file endpoints instance
  pub fn new(transport: Arc<Transport>, config: Arc<Config>) -> Self {
    Self { transport, config }
  }

  /// Open `file_id` on behalf of `agent_id`
  pub async fn open_file(&self, file_id: &str, agent_id: &str) -> Result<Value> {
    self.open(&FileRequest::new(file_id, agent_id)).await
  }

  /// GET `{storage_base_url}{file_id}?agentId=...` with JSON headers
  ///
  /// # Errors
  ///
  /// Blank ids are rejected with `Error::InvalidInput` before any request.
  #[instrument(skip(self, request), fields(file_id = %request.file_id, agent_id = %request.agent_id))]
  pub async fn open(&self, request: &FileRequest) -> Result<Value> {
    if let Some(field) = request.missing_field() {
      return Err(Error::InvalidInput(format!("{} must not be empty", field)));
    }

    let url = self.transport().segment_url(&self.config().storage_base_url, &request.file_id)?;

    self
      .transport()
      .get(FuncType::OpenFile, url, &request.to_params(), Transport::json_headers())
      .await
  }
}
