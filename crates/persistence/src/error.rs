// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Errors that can occur while reading or writing a storage slot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The backing medium failed.
    #[error("I/O error on storage slot '{key}': {source}")]
    Io {
        /// The slot being accessed.
        key: String,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The key cannot be mapped onto the backing medium.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}
