// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::ImageConfig;
use storefront_domain::Category;

const ABSOLUTE_PREFIXES: [&str; 4] = ["http://", "https://", "//", "data:"];

/// Resolves a seed's image reference to an absolute reference.
///
/// - Products in an unrecognized category, or with a blank reference, get
///   the placeholder.
/// - Absolute references (`http(s)://`, protocol-relative, `data:`) are kept.
/// - References that already start with a known host-relative prefix are
///   joined onto the base host.
/// - Anything else is treated as a bare file name under the base path.
#[must_use]
pub fn normalize_image_ref(raw: &str, category: &Category, config: &ImageConfig) -> String {
    let raw: &str = raw.trim();
    if raw.is_empty() || !category.is_recognized() {
        return config.placeholder.clone();
    }

    if ABSOLUTE_PREFIXES.iter().any(|prefix| raw.starts_with(prefix)) {
        return raw.to_string();
    }

    let host: &str = config.base_host.trim_end_matches('/');
    if config
        .host_relative_prefixes
        .iter()
        .any(|prefix| raw.starts_with(prefix.as_str()))
    {
        return format!("{host}/{}", raw.trim_start_matches('/'));
    }

    let base_path: &str = config.base_path.trim_matches('/');
    let file: &str = raw.trim_start_matches("./").trim_start_matches('/');
    if base_path.is_empty() {
        format!("{host}/{file}")
    } else {
        format!("{host}/{base_path}/{file}")
    }
}
