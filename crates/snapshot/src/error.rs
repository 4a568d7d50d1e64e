// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use agency_dash_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a snapshot or previewing an import.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The snapshot file could not be read.
    #[error("Failed to read {path}: {source}")]
    Io {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The snapshot is not valid JSON or does not match the record shapes.
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// A record violates a domain rule.
    #[error("Invalid record: {0}")]
    InvalidRecord(#[from] DomainError),

    /// The CSV header row is unusable.
    #[error("Invalid CSV format: {reason}")]
    InvalidCsvFormat {
        /// What is wrong with the header.
        reason: String,
    },
}
