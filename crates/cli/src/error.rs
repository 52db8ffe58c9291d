// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use storefront::CoreError;
use storefront_catalog::SeedLoadError;
use thiserror::Error;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// The product id is not in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// The seed file could not be loaded.
    #[error(transparent)]
    Seeds(#[from] SeedLoadError),

    /// A cart or wishlist action was rejected.
    #[error(transparent)]
    Rejected(#[from] CoreError),

    /// Output could not be rendered.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}
