//! Codec configuration
//!
//! Controls the document format, pretty-printing and how bindings objects with
//! keys this crate does not model are treated on decode.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use crate::error::{Error, ErrorContext};

pub const ENV_FORMAT: &str = "ASYNCAPI_BINDINGS_FORMAT";
pub const ENV_PRETTY: &str = "ASYNCAPI_BINDINGS_PRETTY";
pub const ENV_UNKNOWN_PROTOCOLS: &str = "ASYNCAPI_BINDINGS_UNKNOWN_PROTOCOLS";

/// Serialized document format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infer the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Some(Self::Json),
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Some(Self::Yaml)
            }
            _ => None,
        }
    }
}

impl FromStr for DocumentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            other => Err(format!("format '{}' not recognized (expected json or yaml)", other)),
        }
    }
}

/// What to do with a bindings key that has no binding type at the attachment
/// point being decoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownProtocolPolicy {
    /// Keep the raw value and emit it again on encode.
    #[default]
    Preserve,
    /// Drop the entry and log a warning.
    Ignore,
    /// Fail the decode.
    Reject,
}

impl FromStr for UnknownProtocolPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "ignore" => Ok(Self::Ignore),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "policy '{}' not recognized (expected preserve, ignore or reject)",
                other
            )),
        }
    }
}

/// Codec settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// Format used when encoding, and when decoding input whose format cannot
    /// be inferred from a file extension.
    pub format: DocumentFormat,
    /// Pretty-print JSON output. YAML output is always block style.
    pub pretty: bool,
    pub unknown_protocols: UnknownProtocolPolicy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            format: DocumentFormat::Json,
            pretty: true,
            unknown_protocols: UnknownProtocolPolicy::Preserve,
        }
    }
}

impl CodecConfig {
    /// Build a config from `ASYNCAPI_BINDINGS_*` environment variables,
    /// falling back to defaults for unset variables.
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> crate::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_FORMAT) {
            config.format = raw.parse().map_err(|e| invalid_setting(ENV_FORMAT, e))?;
        }
        if let Some(raw) = lookup(ENV_PRETTY) {
            config.pretty = parse_bool(&raw).ok_or_else(|| {
                invalid_setting(ENV_PRETTY, format!("'{}' is not a boolean", raw))
            })?;
        }
        if let Some(raw) = lookup(ENV_UNKNOWN_PROTOCOLS) {
            config.unknown_protocols = raw
                .parse()
                .map_err(|e| invalid_setting(ENV_UNKNOWN_PROTOCOLS, e))?;
        }

        Ok(config)
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn invalid_setting(key: &str, details: String) -> Error {
    Error::configuration_with_context(
        "invalid codec setting",
        ErrorContext::new()
            .with_field_path(key)
            .with_details(details)
            .with_source("codec_config"),
    )
}
