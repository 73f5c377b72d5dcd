//! Centralized naming rules for keys, URLs and variant files.
//!
//! The frontend looks images up by path and fetches variants by URL, so these
//! strings are a contract:
//!
//! - **Manifest key**: source path relative to the project root, always with
//!   `/` separators: `assets/freepik/hero.jpg`. Each key is also stored with a
//!   leading slash: `/assets/freepik/hero.jpg`.
//! - **Variant file**: `<stem>-<width>.<ext>`, e.g. `hero-768.jpg`.
//! - **Variant URL**: public prefix + file name, e.g. `/assets/optimized/hero-768.jpg`.

use crate::imaging::OutputFormat;
use std::path::{Component, Path};

/// File name for a resized variant: `<stem>-<width>.<ext>`.
pub fn variant_file_name(stem: &str, width: u32, format: OutputFormat) -> String {
    format!("{}-{}.{}", stem, width, format.extension())
}

/// Manifest key for `path`: its location relative to `root`, `/`-separated.
///
/// Returns `None` if `path` is not under `root` or has no normal components.
pub fn relative_key(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    let parts: Vec<String> = rel
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().replace('\\', "/")),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}

/// The key with a leading slash; also the public URL of the original file.
pub fn with_leading_slash(key: &str) -> String {
    format!("/{}", key.trim_start_matches('/'))
}

/// Join a URL prefix and a file name with exactly one slash between them.
pub fn public_url(prefix: &str, file_name: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    format!("{}/{}", prefix, file_name)
}

/// Wildcard match of a file name: `*` matches any run of characters, `?`
/// matches exactly one. A leading dot gets no special treatment, so `*.jpg`
/// also matches `.hidden.jpg`.
pub fn matches_pattern(pattern: &str, name: &str) -> bool {
    let pattern: Vec<char> = pattern.chars().collect();
    let name: Vec<char> = name.chars().collect();

    let (mut p, mut n) = (0, 0);
    // Position of the last `*` and the name index it is currently absorbing up to.
    let mut backtrack: Option<(usize, usize)> = None;

    while n < name.len() {
        match pattern.get(p) {
            Some('*') => {
                backtrack = Some((p, n));
                p += 1;
            }
            Some('?') => {
                p += 1;
                n += 1;
            }
            Some(&c) if c == name[n] => {
                p += 1;
                n += 1;
            }
            _ => match backtrack {
                Some((star, absorbed)) => {
                    p = star + 1;
                    n = absorbed + 1;
                    backtrack = Some((star, absorbed + 1));
                }
                None => return false,
            },
        }
    }
    pattern[p..].iter().all(|&c| c == '*')
}
