//! WebSockets bindings.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Binding version assumed when `bindingVersion` is omitted.
pub const LATEST_BINDING_VERSION: &str = "latest";

/// WebSockets channel binding.
///
/// Every field is independently optional and absent fields are omitted from
/// the encoded object. Documented constraints (`method` is `GET` or `POST`,
/// `query`/`headers` are object schemas with a `properties` key) are not
/// enforced here; see [`BindingValidator`](super::validator::BindingValidator).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSocketsChannelBinding {
    /// The HTTP method to use when establishing the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    method: Option<String>,
    /// Schema object containing the definitions for each query parameter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    query: Option<Value>,
    /// Schema object containing the definitions of the HTTP headers used when
    /// establishing the connection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    headers: Option<Value>,
    /// The version of this binding. Absent means "latest".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    binding_version: Option<String>,
}

impl WebSocketsChannelBinding {
    /// Binding with every field absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binding with every field supplied explicitly.
    pub fn with_all(
        method: Option<String>,
        query: Option<Value>,
        headers: Option<Value>,
        binding_version: Option<String>,
    ) -> Self {
        Self {
            method,
            query,
            headers,
            binding_version,
        }
    }

    pub fn builder() -> WebSocketsChannelBindingBuilder {
        WebSocketsChannelBindingBuilder::new()
    }

    pub fn method(&self) -> Option<&str> {
        self.method.as_deref()
    }

    pub fn query(&self) -> Option<&Value> {
        self.query.as_ref()
    }

    pub fn headers(&self) -> Option<&Value> {
        self.headers.as_ref()
    }

    pub fn binding_version(&self) -> Option<&str> {
        self.binding_version.as_deref()
    }

    /// Binding version with the "latest" default applied.
    pub fn effective_binding_version(&self) -> &str {
        self.binding_version().unwrap_or(LATEST_BINDING_VERSION)
    }

    /// Reopen this binding for incremental changes.
    pub fn to_builder(&self) -> WebSocketsChannelBindingBuilder {
        WebSocketsChannelBindingBuilder {
            inner: self.clone(),
        }
    }
}

/// Incremental construction of a [`WebSocketsChannelBinding`].
///
/// Fields not set stay absent.
#[derive(Debug, Clone, Default)]
pub struct WebSocketsChannelBindingBuilder {
    inner: WebSocketsChannelBinding,
}

impl WebSocketsChannelBindingBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.inner.method = Some(method.into());
        self
    }

    pub fn query(mut self, query: Value) -> Self {
        self.inner.query = Some(query);
        self
    }

    pub fn headers(mut self, headers: Value) -> Self {
        self.inner.headers = Some(headers);
        self
    }

    pub fn binding_version(mut self, version: impl Into<String>) -> Self {
        self.inner.binding_version = Some(version.into());
        self
    }

    pub fn build(self) -> WebSocketsChannelBinding {
        self.inner
    }
}
