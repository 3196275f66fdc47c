// Copyright 2023 Greptime Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! A logical column stored as an ordered sequence of Arrow array chunks.

use arrow_array::ArrayRef;

/// One logical column materialized as discontiguous chunks.
///
/// The column is the ordered concatenation of its chunks; individual chunks
/// may be empty. All chunks are expected to share one data type — mixing
/// types is a programmer error surfaced when a handler downcasts a chunk.
#[derive(Debug, Clone, Default)]
pub struct ChunkedColumn {
    chunks: Vec<ArrayRef>,
}

impl ChunkedColumn {
    /// Create a column from pre-built chunks.
    #[must_use]
    pub fn new(chunks: Vec<ArrayRef>) -> Self {
        Self { chunks }
    }

    /// Append one chunk to the end of the column.
    pub fn push_chunk(&mut self, chunk: ArrayRef) {
        self.chunks.push(chunk);
    }

    /// Number of chunks, including empty ones.
    #[must_use]
    pub fn num_chunks(&self) -> usize {
        self.chunks.len()
    }

    /// Chunk at the given position.
    #[must_use]
    pub fn chunk(&self, i: usize) -> &ArrayRef {
        &self.chunks[i]
    }

    /// All chunks in column order.
    #[must_use]
    pub fn chunks(&self) -> &[ArrayRef] {
        &self.chunks
    }

    /// Total number of logical rows across all chunks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chunks.iter().map(|c| c.len()).sum()
    }

    /// Whether the column holds no rows at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<ArrayRef> for ChunkedColumn {
    fn from(array: ArrayRef) -> Self {
        Self {
            chunks: vec![array],
        }
    }
}
