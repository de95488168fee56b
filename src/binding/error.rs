//! Binding error types

use super::protocol::{AttachmentPoint, Protocol};

/// Binding error types
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("Failed to load bindings from {path}: {reason}{}", .hint.as_ref().map(|h| format!("\n Hint: {}", h)).unwrap_or_default())]
    LoadError {
        path: String,
        reason: String,
        hint: Option<String>,
    },

    #[error("Unknown protocol '{key}' in {attachment} bindings{}", .hint.as_ref().map(|h| format!("\n Hint: {}", h)).unwrap_or_default())]
    UnknownProtocol {
        key: String,
        attachment: AttachmentPoint,
        hint: Option<String>,
    },

    #[error("Protocol '{protocol}' defines no {attachment} binding")]
    UnsupportedAttachment {
        protocol: Protocol,
        attachment: AttachmentPoint,
    },

    #[error("Invalid {protocol} {attachment} binding: {reason}{}", .hint.as_ref().map(|h| format!("\n Hint: {}", h)).unwrap_or_default())]
    Decode {
        protocol: Protocol,
        attachment: AttachmentPoint,
        reason: String,
        hint: Option<String>,
    },

    #[error("Malformed {attachment} bindings document: {reason}")]
    Document {
        attachment: AttachmentPoint,
        reason: String,
    },

    #[error("Failed to encode bindings: {0}")]
    Encode(String),

    #[error("Binding validation failed: {0}")]
    ValidationError(String),

    #[error("Internal binding error: {0}")]
    Internal(String),
}

impl BindingError {
    /// Attach an actionable hint to the error
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        let hint_val = Some(hint.into());
        match self {
            BindingError::LoadError { ref mut hint, .. } => *hint = hint_val,
            BindingError::UnknownProtocol { ref mut hint, .. } => *hint = hint_val,
            BindingError::Decode { ref mut hint, .. } => *hint = hint_val,
            _ => (),
        }
        self
    }
}
