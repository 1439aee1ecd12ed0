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

//! Agent file storage request

use serde::{Deserialize, Serialize};

/// Identifies one stored file as seen by one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRequest {
  /// Storage file id, appended to the storage root as a single path segment
  pub file_id: String,

  /// Agent the file is scoped to, sent as `agentId`
  pub agent_id: String,
}

impl FileRequest {
  pub fn new(file_id: impl Into<String>, agent_id: impl Into<String>) -> Self {
    Self { file_id: file_id.into(), agent_id: agent_id.into() }
  }

  /// Name of the first blank id, if any
  pub fn missing_field(&self) -> Option<&'static str> {
    if self.file_id.trim().is_empty() {
      Some("file_id")
    } else if self.agent_id.trim().is_empty() {
      Some("agent_id")
    } else {
      None
    }
  }

  pub fn to_params(&self) -> Vec<(&'static str, String)> {
    vec![("agentId", self.agent_id.clone())]
  }
}
