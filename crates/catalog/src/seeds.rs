// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Seed product loading.
//!
//! Seeds come either as a JSON array of objects or as CSV with a header row:
//!
//! ```text
//! id,name,price,imageRef,category,description,origin,inStock
//! 1,Fresh Tomato,40,tomato.jpg,vegetables,,Nashik,true
//! ```
//!
//! Every seed is validated on the way in; the generator itself never
//! rejects a seed.

use std::io::Read;
use std::path::{Path, PathBuf};
use storefront_domain::{DomainError, ProductSeed, validate_seed};
use thiserror::Error;
use tracing::info;

/// Errors that can occur while loading seed products.
#[derive(Debug, Error)]
pub enum SeedLoadError {
    /// The seed file could not be read.
    #[error("Failed to read seed file {}: {source}", path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The JSON document is malformed.
    #[error("Malformed JSON seeds: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV document is malformed.
    #[error("Malformed CSV seeds: {0}")]
    Csv(#[from] csv::Error),

    /// A seed failed validation.
    #[error("Seed #{index} is invalid: {source}")]
    InvalidSeed {
        /// Zero-based position of the seed in the input.
        index: usize,
        /// The validation failure.
        #[source]
        source: DomainError,
    },

    /// The file extension is neither `.json` nor `.csv`.
    #[error("Unsupported seed file format: {0}")]
    UnsupportedFormat(String),
}

/// Loads seeds from a `.json` or `.csv` file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, cannot be parsed, has an
/// unsupported extension, or contains an invalid seed.
pub fn load_seeds(path: &Path) -> Result<Vec<ProductSeed>, SeedLoadError> {
    let extension: String = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let io_err = |source: std::io::Error| SeedLoadError::Io {
        path: path.to_path_buf(),
        source,
    };

    let seeds: Vec<ProductSeed> = match extension.as_str() {
        "json" => parse_json_seeds(&std::fs::read_to_string(path).map_err(io_err)?)?,
        "csv" => parse_csv_seeds(std::fs::File::open(path).map_err(io_err)?)?,
        _ => {
            return Err(SeedLoadError::UnsupportedFormat(
                path.display().to_string(),
            ));
        }
    };

    info!(path = %path.display(), seeds = seeds.len(), "Loaded seed products");
    Ok(seeds)
}

/// Parses seeds from a JSON array.
///
/// # Errors
///
/// Returns an error if the document is malformed or a seed is invalid.
pub fn parse_json_seeds(raw: &str) -> Result<Vec<ProductSeed>, SeedLoadError> {
    let seeds: Vec<ProductSeed> = serde_json::from_str(raw)?;
    validate_all(seeds)
}

/// Parses seeds from CSV with a header row.
///
/// Empty optional columns are read as absent.
///
/// # Errors
///
/// Returns an error if a record is malformed or a seed is invalid.
pub fn parse_csv_seeds<R: Read>(reader: R) -> Result<Vec<ProductSeed>, SeedLoadError> {
    let mut csv_reader: csv::Reader<R> = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let seeds: Vec<ProductSeed> = csv_reader
        .deserialize::<ProductSeed>()
        .collect::<Result<Vec<ProductSeed>, csv::Error>>()?;
    validate_all(seeds)
}

fn validate_all(seeds: Vec<ProductSeed>) -> Result<Vec<ProductSeed>, SeedLoadError> {
    for (index, seed) in seeds.iter().enumerate() {
        validate_seed(seed).map_err(|source| SeedLoadError::InvalidSeed { index, source })?;
    }
    Ok(seeds)
}
