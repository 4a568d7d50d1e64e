// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Snapshot loading and cost import for the agency dashboard.
//!
//! The engine in `agency-dash` works on borrowed collections. This crate
//! owns those collections: it reads them from a JSON snapshot document,
//! validates the financial records and previews CSV cost imports.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod cost_import;
mod error;
mod snapshot;

pub use cost_import::{CostImportPreview, CostRowResult, CostRowStatus, preview_cost_import};
pub use error::SnapshotError;
pub use snapshot::Snapshot;
