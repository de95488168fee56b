//! Binding validator using JSON Schema
//!
//! Checks the constraints binding types document but do not enforce, e.g. the
//! WebSockets `method` being `GET` or `POST`. Validation is opt-in and never
//! changes the values it inspects.

use jsonschema::{Draft, JSONSchema};

use super::attachment::{Binding, BindingAttachment};
use super::error::BindingError;
use super::protocol::{AttachmentPoint, Protocol};

/// Validates bindings against the schemas of field-bearing binding types.
pub struct BindingValidator {
    ws_channel: JSONSchema,
}

impl BindingValidator {
    pub fn new() -> Result<Self, BindingError> {
        Ok(Self {
            ws_channel: Self::compile(include_str!("schemas/ws_channel.json"))?,
        })
    }

    fn compile(source: &str) -> Result<JSONSchema, BindingError> {
        let schema_value: serde_json::Value = serde_json::from_str(source)
            .map_err(|e| BindingError::Internal(format!("Invalid JSON Schema: {}", e)))?;

        JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(&schema_value)
            .map_err(|e| BindingError::Internal(format!("Failed to compile schema: {}", e)))
    }

    /// Schema for a (attachment point, protocol) pair, if that binding has
    /// anything to check. Reserved bindings have no schema.
    fn schema_for(&self, attachment: AttachmentPoint, protocol: Protocol) -> Option<&JSONSchema> {
        match (attachment, protocol) {
            (AttachmentPoint::Channel, Protocol::Ws) => Some(&self.ws_channel),
            _ => None,
        }
    }

    fn violations<V: Binding>(&self, binding: &V) -> Result<Vec<String>, BindingError> {
        let protocol = binding.protocol();
        let Some(schema) = self.schema_for(V::ATTACHMENT, protocol) else {
            return Ok(Vec::new());
        };

        let instance = binding.encode()?;
        let messages = match schema.validate(&instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|e| {
                    let path = e.instance_path.to_string();
                    if path.is_empty() {
                        format!("{}: {}", protocol, e)
                    } else {
                        format!("{}{}: {}", protocol, path, e)
                    }
                })
                .collect(),
        };
        Ok(messages)
    }

    /// Validate one binding.
    pub fn validate<V: Binding>(&self, binding: &V) -> Result<(), BindingError> {
        let messages = self.violations(binding)?;
        if messages.is_empty() {
            return Ok(());
        }
        Err(BindingError::ValidationError(format!(
            "{} binding:\n  - {}",
            V::ATTACHMENT,
            messages.join("\n  - ")
        )))
    }

    /// Validate every recognized binding of an attachment point, reporting all
    /// violations at once. Preserved unrecognized entries are not checked.
    pub fn validate_attachment<V: Binding>(
        &self,
        attachment: &BindingAttachment<V>,
    ) -> Result<(), BindingError> {
        let mut messages = Vec::new();
        for (_, binding) in attachment.iter() {
            messages.extend(self.violations(binding)?);
        }
        if messages.is_empty() {
            return Ok(());
        }
        tracing::debug!(attachment = %V::ATTACHMENT, count = messages.len(), "binding validation failed");
        Err(BindingError::ValidationError(format!(
            "{} bindings:\n  - {}",
            V::ATTACHMENT,
            messages.join("\n  - ")
        )))
    }
}
