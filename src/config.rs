//! Converter configuration.
//!
//! Every parameter has a built-in default, and running `gen-images` with no
//! arguments uses exactly those. A TOML file passed with `--config` can
//! override any subset of them; it is merged on top of the stock defaults,
//! unknown keys are rejected, and the result is validated.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below.
//! # Paths are relative to the project root (--root, default ".").
//!
//! source_dir = "assets/freepik"       # Where source images live
//! pattern = "*.jp*g"                  # File name wildcard for source images
//! output_dir = "assets/optimized"     # Where resized variants are written
//! public_prefix = "/assets/optimized" # URL under which output_dir is served
//! manifest_path = "data/images.json"  # Image map for the frontend
//!
//! widths = [768, 1280, 1600]          # Target widths, strictly ascending
//! jpeg_quality = 82                   # JPEG quality (1-100)
//! webp_quality = 80                   # WebP quality (1-100)
//! sizes = "100vw"                     # `sizes` hint stored with every image
//! ```

use crate::imaging::{Quality, VariantConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Converter configuration. See the [module docs](self) for defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConverterConfig {
    pub source_dir: String,
    pub pattern: String,
    pub output_dir: String,
    pub public_prefix: String,
    pub manifest_path: String,
    pub widths: Vec<u32>,
    pub jpeg_quality: u32,
    pub webp_quality: u32,
    pub sizes: String,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            source_dir: "assets/freepik".to_string(),
            pattern: "*.jp*g".to_string(),
            output_dir: "assets/optimized".to_string(),
            public_prefix: "/assets/optimized".to_string(),
            manifest_path: "data/images.json".to_string(),
            widths: vec![768, 1280, 1600],
            jpeg_quality: 82,
            webp_quality: 80,
            sizes: "100vw".to_string(),
        }
    }
}

impl ConverterConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.widths.is_empty() {
            return Err(ConfigError::Validation("widths must not be empty".into()));
        }
        if self.widths.contains(&0) {
            return Err(ConfigError::Validation("widths must be non-zero".into()));
        }
        if self.widths.windows(2).any(|w| w[0] >= w[1]) {
            return Err(ConfigError::Validation(
                "widths must be strictly ascending".into(),
            ));
        }
        for (name, value) in [
            ("jpeg_quality", self.jpeg_quality),
            ("webp_quality", self.webp_quality),
        ] {
            if !(1..=100).contains(&value) {
                return Err(ConfigError::Validation(format!("{name} must be 1-100")));
            }
        }
        if self.pattern.is_empty() {
            return Err(ConfigError::Validation("pattern must not be empty".into()));
        }
        Ok(())
    }

    pub fn source_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.source_dir)
    }

    pub fn output_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.output_dir)
    }

    pub fn manifest_path(&self, root: &Path) -> PathBuf {
        root.join(&self.manifest_path)
    }

    /// Variant generation settings with paths resolved against `root`.
    pub fn variant_config(&self, root: &Path) -> VariantConfig {
        VariantConfig {
            widths: self.widths.clone(),
            jpeg_quality: Quality::new(self.jpeg_quality),
            webp_quality: Quality::new(self.webp_quality),
            output_dir: self.output_dir(root),
            public_prefix: self.public_prefix.clone(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    toml::Value::try_from(ConverterConfig::default())
        .map_err(|e| ConfigError::Validation(format!("default config does not serialize: {e}")))
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Merge an optional overlay onto the stock defaults, then deserialize and validate.
pub fn resolve_config(overlay: Option<toml::Value>) -> Result<ConverterConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: ConverterConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load the configuration, reading `path` as an overlay when given.
///
/// With `None` no file is read and the stock defaults are returned.
pub fn load_config(path: Option<&Path>) -> Result<ConverterConfig, ConfigError> {
    let overlay = match path {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Some(toml::from_str::<toml::Value>(&content)?)
        }
        None => None,
    };
    resolve_config(overlay)
}

/// Returns a fully-commented stock config file.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# gen-images configuration
# ========================
# All settings are optional. Values shown below are the defaults, which is
# also what gen-images uses when run without --config.
# Paths are relative to the project root (--root, default ".").
# Unknown keys will cause an error.

# Directory holding the source images. Not searched recursively.
source_dir = "assets/freepik"

# Shell-style wildcard for source file names (`*` and `?`).
pattern = "*.jp*g"

# Directory receiving <name>-<width>.jpg and <name>-<width>.webp files.
# Created if missing. Existing files are overwritten, stale ones are kept.
output_dir = "assets/optimized"

# URL path under which output_dir is served. Manifest entries for resized
# variants point here.
public_prefix = "/assets/optimized"

# JSON map from image path to its variants. Rewritten on every run.
manifest_path = "data/images.json"

# Target widths in pixels, strictly ascending. Widths at or above an image's
# own width reference the original instead of upscaling.
widths = [768, 1280, 1600]

# Lossy encoding quality, 1-100.
jpeg_quality = 82
webp_quality = 80

# `sizes` attribute hint stored with every image.
sizes = "100vw"
"##
}
