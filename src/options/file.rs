//! Option file loading with provenance

use std::fs;
use std::path::Path;

use chart_option::OptionMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

/// Errors that can occur when loading a user option file
#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Options must be a mapping at the top level")]
    NotAMap,
}

/// File format of an option file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionsFormat {
    Json,
    Toml,
}

impl OptionsFormat {
    /// Format from the file extension (`.toml` is TOML, anything else JSON)
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => OptionsFormat::Toml,
            _ => OptionsFormat::Json,
        }
    }
}

/// Where a user option layer came from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsSource {
    /// File path (None for inline options)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    pub format: OptionsFormat,

    /// SHA-256 digest of the raw bytes
    pub digest: String,
}

/// A parsed user option layer
#[derive(Debug, Clone)]
pub struct OptionsFile {
    pub source: OptionsSource,
    pub option: OptionMap,
}

impl OptionsFile {
    /// Load and parse an option file
    pub fn load(path: &Path) -> Result<Self, OptionsError> {
        let bytes = fs::read(path)?;
        let format = OptionsFormat::from_path(path);
        let mut file = Self::from_bytes(bytes, format)?;
        file.source.path = Some(path.to_string_lossy().to_string());

        debug!(
            path = %path.display(),
            digest = %file.source.digest,
            keys = file.option.len(),
            "loaded options file"
        );
        Ok(file)
    }

    /// Parse inline option text
    pub fn parse(text: &str, format: OptionsFormat) -> Result<Self, OptionsError> {
        Self::from_bytes(text.as_bytes().to_vec(), format)
    }

    fn from_bytes(bytes: Vec<u8>, format: OptionsFormat) -> Result<Self, OptionsError> {
        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let contents = String::from_utf8(bytes)?;
        let option = match format {
            OptionsFormat::Json => {
                let value: serde_json::Value = serde_json::from_str(&contents)?;
                OptionMap::from_json(value)
            }
            OptionsFormat::Toml => {
                let value: toml::Value = toml::from_str(&contents)?;
                OptionMap::from_toml(value)
            }
        }
        .ok_or(OptionsError::NotAMap)?;

        Ok(Self {
            source: OptionsSource {
                path: None,
                format,
                digest,
            },
            option,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_parse_json() {
        let file = OptionsFile::parse(
            r#"{ "start": 20, "left": null, "handleStyle": { "color": "red" } }"#,
            OptionsFormat::Json,
        )
        .unwrap();

        assert_eq!(file.option.get_f64("start"), Some(20.0));
        assert!(file.option.is_unset("left"));
        assert_eq!(file.option.get_str("handleStyle.color"), Some("red"));
        assert_eq!(file.source.digest.len(), 64);
        assert!(file.source.path.is_none());
    }

    #[test]
    fn test_parse_rejects_array() {
        let err = OptionsFile::parse("[1, 2, 3]", OptionsFormat::Json).unwrap_err();
        assert!(matches!(err, OptionsError::NotAMap));
    }

    #[test]
    fn test_parse_bad_json() {
        let err = OptionsFile::parse("{ start: ", OptionsFormat::Json).unwrap_err();
        assert!(matches!(err, OptionsError::Json(_)));
    }

    #[test]
    fn test_load_toml_file() {
        let mut temp = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(temp, "brushSelect = false").unwrap();
        writeln!(temp, "[textStyle]").unwrap();
        writeln!(temp, "color = \"#333\"").unwrap();

        let file = OptionsFile::load(temp.path()).unwrap();

        assert_eq!(file.source.format, OptionsFormat::Toml);
        assert_eq!(file.option.get_bool("brushSelect"), Some(false));
        assert_eq!(file.option.get_str("textStyle.color"), Some("#333"));
        assert!(file.source.path.is_some());
    }

    #[test]
    fn test_same_bytes_same_digest() {
        let a = OptionsFile::parse(r#"{"show": false}"#, OptionsFormat::Json).unwrap();
        let b = OptionsFile::parse(r#"{"show": false}"#, OptionsFormat::Json).unwrap();
        let c = OptionsFile::parse(r#"{"show": true}"#, OptionsFormat::Json).unwrap();
        assert_eq!(a.source.digest, b.source.digest);
        assert_ne!(a.source.digest, c.source.digest);
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(OptionsFormat::from_path(Path::new("a.TOML")), OptionsFormat::Toml);
        assert_eq!(OptionsFormat::from_path(Path::new("a.json")), OptionsFormat::Json);
        assert_eq!(OptionsFormat::from_path(Path::new("a")), OptionsFormat::Json);
    }
}
