//! Channel binding family.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::attachment::{decode_variant, Binding};
use super::error::BindingError;
use super::jms::JmsChannelBinding;
use super::protocol::{AttachmentPoint, Protocol};
use super::ws::WebSocketsChannelBinding;

/// Protocol-specific binding attached to a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChannelBinding {
    Jms(JmsChannelBinding),
    Ws(WebSocketsChannelBinding),
}

impl ChannelBinding {
    pub fn as_jms(&self) -> Option<&JmsChannelBinding> {
        match self {
            Self::Jms(binding) => Some(binding),
            _ => None,
        }
    }

    pub fn as_ws(&self) -> Option<&WebSocketsChannelBinding> {
        match self {
            Self::Ws(binding) => Some(binding),
            _ => None,
        }
    }
}

impl Binding for ChannelBinding {
    const ATTACHMENT: AttachmentPoint = AttachmentPoint::Channel;

    fn supported_protocols() -> &'static [Protocol] {
        &[Protocol::Jms, Protocol::Ws]
    }

    fn protocol(&self) -> Protocol {
        match self {
            Self::Jms(_) => Protocol::Jms,
            Self::Ws(_) => Protocol::Ws,
        }
    }

    fn decode(protocol: Protocol, value: Value) -> Result<Self, BindingError> {
        match protocol {
            Protocol::Jms => decode_variant(protocol, Self::ATTACHMENT, value).map(Self::Jms),
            Protocol::Ws => decode_variant(protocol, Self::ATTACHMENT, value).map(Self::Ws),
            other => Err(BindingError::UnsupportedAttachment {
                protocol: other,
                attachment: Self::ATTACHMENT,
            }),
        }
    }
}

impl From<JmsChannelBinding> for ChannelBinding {
    fn from(binding: JmsChannelBinding) -> Self {
        Self::Jms(binding)
    }
}

impl From<WebSocketsChannelBinding> for ChannelBinding {
    fn from(binding: WebSocketsChannelBinding) -> Self {
        Self::Ws(binding)
    }
}

impl fmt::Display for ChannelBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} binding", self.protocol(), Self::ATTACHMENT)
    }
}
