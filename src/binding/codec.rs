//! Reading and writing bindings objects as JSON or YAML.

use serde_json::{Map, Value};
use std::path::Path;

use super::attachment::{Binding, BindingAttachment};
use super::config::{CodecConfig, DocumentFormat, UnknownProtocolPolicy};
use super::error::BindingError;
use super::protocol::AttachmentPoint;

/// Decodes and encodes the bindings object of a single attachment point.
#[derive(Debug, Clone, Default)]
pub struct BindingCodec {
    config: CodecConfig,
}

impl BindingCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.config.pretty = pretty;
        self
    }

    pub fn with_unknown_protocols(mut self, policy: UnknownProtocolPolicy) -> Self {
        self.config.unknown_protocols = policy;
        self
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Decode bindings from text in the configured format.
    pub fn decode_str<V: Binding>(&self, input: &str) -> Result<BindingAttachment<V>, BindingError> {
        let value = parse_document(input, self.config.format, V::ATTACHMENT)?;
        self.decode_value(value)
    }

    /// Decode bindings from an already-parsed document node.
    pub fn decode_value<V: Binding>(&self, value: Value) -> Result<BindingAttachment<V>, BindingError> {
        match value {
            Value::Object(map) => BindingAttachment::decode_map(map, self.config.unknown_protocols),
            other => Err(BindingError::Document {
                attachment: V::ATTACHMENT,
                reason: format!(
                    "expected an object keyed by protocol, found {}",
                    type_name(&other)
                ),
            }),
        }
    }

    /// Decode bindings from a file. The format is taken from the file extension
    /// when it is recognizable, otherwise from the config.
    pub fn decode_file<V: Binding>(
        &self,
        path: impl AsRef<Path>,
    ) -> Result<BindingAttachment<V>, BindingError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| BindingError::LoadError {
            path: path.display().to_string(),
            reason: e.to_string(),
            hint: None,
        })?;
        let format = DocumentFormat::from_path(path).unwrap_or(self.config.format);
        tracing::debug!(path = %path.display(), ?format, attachment = %V::ATTACHMENT, "loading bindings");

        let value = parse_document(&content, format, V::ATTACHMENT).map_err(|e| {
            BindingError::LoadError {
                path: path.display().to_string(),
                reason: e.to_string(),
                hint: None,
            }
        })?;
        self.decode_value(value).map_err(|e| match e {
            BindingError::Document { .. } => BindingError::LoadError {
                path: path.display().to_string(),
                reason: e.to_string(),
                hint: Some("The file must contain a single bindings object, e.g. `ws: {}`".into()),
            },
            other => other,
        })
    }

    pub fn encode_value<V: Binding>(
        &self,
        attachment: &BindingAttachment<V>,
    ) -> Result<Value, BindingError> {
        attachment.encode_map().map(Value::Object)
    }

    /// Encode bindings as text in the configured format.
    pub fn encode_string<V: Binding>(
        &self,
        attachment: &BindingAttachment<V>,
    ) -> Result<String, BindingError> {
        let value = self.encode_value(attachment)?;
        match self.config.format {
            DocumentFormat::Json if self.config.pretty => serde_json::to_string_pretty(&value)
                .map_err(|e| BindingError::Encode(e.to_string())),
            DocumentFormat::Json => {
                serde_json::to_string(&value).map_err(|e| BindingError::Encode(e.to_string()))
            }
            DocumentFormat::Yaml => {
                serde_yaml::to_string(&value).map_err(|e| BindingError::Encode(e.to_string()))
            }
        }
    }
}

fn parse_document(
    input: &str,
    format: DocumentFormat,
    attachment: AttachmentPoint,
) -> Result<Value, BindingError> {
    let malformed = |reason: String| BindingError::Document { attachment, reason };
    match format {
        DocumentFormat::Json => {
            serde_json::from_str(input).map_err(|e| malformed(format!("invalid JSON: {}", e)))
        }
        DocumentFormat::Yaml => {
            let value: Value = serde_yaml::from_str(input)
                .map_err(|e| malformed(format!("invalid YAML: {}", e)))?;
            // An empty YAML document parses as null.
            match value {
                Value::Null => Ok(Value::Object(Map::new())),
                other => Ok(other),
            }
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
