//! Per-attachment-point binding mappings.
//!
//! A [`BindingAttachment`] holds the bindings declared on one server, channel,
//! operation or message, keyed by protocol identifier. The value type is one of
//! the attachment-point sum types ([`ServerBinding`](super::ServerBinding),
//! [`ChannelBinding`](super::ChannelBinding), ...), each of which implements
//! [`Binding`].

use serde::de::{DeserializeOwned, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;

use super::config::UnknownProtocolPolicy;
use super::error::BindingError;
use super::protocol::{AttachmentPoint, Protocol};

/// Capability shared by every binding at one attachment point.
pub trait Binding: Clone + PartialEq + fmt::Debug + Serialize + Sized {
    /// Attachment point this binding family belongs to.
    const ATTACHMENT: AttachmentPoint;

    /// Protocols that define a binding at this attachment point.
    fn supported_protocols() -> &'static [Protocol];

    /// Protocol key this binding is stored under.
    fn protocol(&self) -> Protocol;

    /// Decode the binding object found under `protocol`.
    ///
    /// Returns [`BindingError::UnsupportedAttachment`] when the protocol has no
    /// binding at this attachment point.
    fn decode(protocol: Protocol, value: Value) -> Result<Self, BindingError>;

    fn encode(&self) -> Result<Value, BindingError> {
        serde_json::to_value(self).map_err(|e| BindingError::Encode(e.to_string()))
    }

    fn supports(protocol: Protocol) -> bool {
        Self::supported_protocols().contains(&protocol)
    }
}

/// Decode one protocol's binding object into its concrete type.
pub(crate) fn decode_variant<T: DeserializeOwned>(
    protocol: Protocol,
    attachment: AttachmentPoint,
    value: Value,
) -> Result<T, BindingError> {
    if !value.is_object() {
        return Err(BindingError::Decode {
            protocol,
            attachment,
            reason: format!("expected an object, found {}", json_kind(&value)),
            hint: Some(format!(
                "Use `{}: {{}}` to declare a binding without properties.",
                protocol
            )),
        });
    }
    serde_json::from_value(value).map_err(|e| BindingError::Decode {
        protocol,
        attachment,
        reason: e.to_string(),
        hint: None,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Bindings declared at one attachment point, keyed by protocol.
///
/// Keys are unique: inserting a binding for a protocol that is already present
/// replaces the previous value. Entries whose key is not a protocol known at
/// this attachment point can be kept verbatim in [`unrecognized`](Self::unrecognized)
/// so they survive a decode/encode cycle.
#[derive(Clone, PartialEq)]
pub struct BindingAttachment<V> {
    bindings: BTreeMap<Protocol, V>,
    unrecognized: BTreeMap<String, Value>,
}

impl<V> Default for BindingAttachment<V> {
    fn default() -> Self {
        Self {
            bindings: BTreeMap::new(),
            unrecognized: BTreeMap::new(),
        }
    }
}

impl<V: Binding> BindingAttachment<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `binding` under its protocol key, returning the binding it replaced.
    pub fn insert(&mut self, binding: impl Into<V>) -> Option<V> {
        let binding = binding.into();
        self.bindings.insert(binding.protocol(), binding)
    }

    pub fn get(&self, protocol: Protocol) -> Option<&V> {
        self.bindings.get(&protocol)
    }

    /// Look up a binding by its raw key (e.g. `"ws"`).
    pub fn get_by_key(&self, key: &str) -> Option<&V> {
        Protocol::from_key(key).and_then(|p| self.get(p))
    }

    pub fn get_mut(&mut self, protocol: Protocol) -> Option<&mut V> {
        self.bindings.get_mut(&protocol)
    }

    pub fn remove(&mut self, protocol: Protocol) -> Option<V> {
        self.bindings.remove(&protocol)
    }

    pub fn contains(&self, protocol: Protocol) -> bool {
        self.bindings.contains_key(&protocol)
    }

    /// Number of recognized bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// True when there are no recognized bindings. Preserved entries are
    /// reported by [`has_unrecognized`](Self::has_unrecognized).
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn has_unrecognized(&self) -> bool {
        !self.unrecognized.is_empty()
    }

    pub fn protocols(&self) -> impl Iterator<Item = Protocol> + '_ {
        self.bindings.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Protocol, &V)> {
        self.bindings.iter().map(|(p, v)| (*p, v))
    }

    /// Entries preserved verbatim because their key is not known here.
    pub fn unrecognized(&self) -> &BTreeMap<String, Value> {
        &self.unrecognized
    }

    /// Decode a bindings object, resolving each key to its binding type.
    pub fn decode_map(
        map: Map<String, Value>,
        policy: UnknownProtocolPolicy,
    ) -> Result<Self, BindingError> {
        let mut attachment = Self::new();
        for (key, value) in map {
            match Protocol::from_key(&key).filter(|p| V::supports(*p)) {
                Some(protocol) => {
                    tracing::debug!(protocol = %protocol, attachment = %V::ATTACHMENT, "decoding binding");
                    let binding = V::decode(protocol, value)?;
                    attachment.bindings.insert(protocol, binding);
                }
                None => match policy {
                    UnknownProtocolPolicy::Preserve => {
                        tracing::debug!(key = %key, attachment = %V::ATTACHMENT, "preserving unrecognized binding");
                        attachment.unrecognized.insert(key, value);
                    }
                    UnknownProtocolPolicy::Ignore => {
                        tracing::warn!(key = %key, attachment = %V::ATTACHMENT, "ignoring unrecognized binding");
                    }
                    UnknownProtocolPolicy::Reject => {
                        let supported: Vec<&str> =
                            V::supported_protocols().iter().map(|p| p.as_str()).collect();
                        return Err(BindingError::UnknownProtocol {
                            key,
                            attachment: V::ATTACHMENT,
                            hint: None,
                        }
                        .with_hint(format!(
                            "Known {} bindings: {}",
                            V::ATTACHMENT,
                            supported.join(", ")
                        )));
                    }
                },
            }
        }
        Ok(attachment)
    }

    /// Encode into a bindings object holding both recognized and preserved
    /// entries. Their keys never overlap: preserved keys are never a protocol
    /// supported at this attachment point.
    pub fn encode_map(&self) -> Result<Map<String, Value>, BindingError> {
        let mut map = Map::new();
        for (key, value) in &self.unrecognized {
            map.insert(key.clone(), value.clone());
        }
        for (protocol, binding) in &self.bindings {
            tracing::trace!(protocol = %protocol, attachment = %V::ATTACHMENT, "encoding binding");
            map.insert(protocol.as_str().to_string(), binding.encode()?);
        }
        Ok(map)
    }
}

impl<V: fmt::Debug> fmt::Debug for BindingAttachment<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (protocol, binding) in &self.bindings {
            map.entry(&protocol.as_str(), binding);
        }
        for (key, value) in &self.unrecognized {
            map.entry(key, value);
        }
        map.finish()
    }
}

impl<V: Binding> FromIterator<V> for BindingAttachment<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut attachment = Self::new();
        attachment.extend(iter);
        attachment
    }
}

impl<V: Binding> Extend<V> for BindingAttachment<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for binding in iter {
            self.insert(binding);
        }
    }
}

impl<V: Binding> Serialize for BindingAttachment<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = self.encode_map().map_err(serde::ser::Error::custom)?;
        let mut map = serializer.serialize_map(Some(encoded.len()))?;
        for (key, value) in &encoded {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de, V: Binding> Deserialize<'de> for BindingAttachment<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Self::decode_map(map, UnknownProtocolPolicy::default()).map_err(serde::de::Error::custom)
    }
}
