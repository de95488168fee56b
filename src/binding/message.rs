//! Message binding family.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::attachment::{decode_variant, Binding};
use super::error::BindingError;
use super::protocol::{AttachmentPoint, Protocol};
use super::redis::RedisMessageBinding;

/// Protocol-specific binding attached to a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MessageBinding {
    Redis(RedisMessageBinding),
}

impl MessageBinding {
    pub fn as_redis(&self) -> Option<&RedisMessageBinding> {
        match self {
            Self::Redis(binding) => Some(binding),
        }
    }
}

impl Binding for MessageBinding {
    const ATTACHMENT: AttachmentPoint = AttachmentPoint::Message;

    fn supported_protocols() -> &'static [Protocol] {
        &[Protocol::Redis]
    }

    fn protocol(&self) -> Protocol {
        match self {
            Self::Redis(_) => Protocol::Redis,
        }
    }

    fn decode(protocol: Protocol, value: Value) -> Result<Self, BindingError> {
        match protocol {
            Protocol::Redis => decode_variant(protocol, Self::ATTACHMENT, value).map(Self::Redis),
            other => Err(BindingError::UnsupportedAttachment {
                protocol: other,
                attachment: Self::ATTACHMENT,
            }),
        }
    }
}

impl From<RedisMessageBinding> for MessageBinding {
    fn from(binding: RedisMessageBinding) -> Self {
        Self::Redis(binding)
    }
}

impl fmt::Display for MessageBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} binding", self.protocol(), Self::ATTACHMENT)
    }
}
