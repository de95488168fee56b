//! Server binding family.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::attachment::{decode_variant, Binding};
use super::error::BindingError;
use super::protocol::{AttachmentPoint, Protocol};
use super::sqs::SqsServerBinding;

/// Protocol-specific binding attached to a server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ServerBinding {
    Sqs(SqsServerBinding),
}

impl ServerBinding {
    pub fn as_sqs(&self) -> Option<&SqsServerBinding> {
        match self {
            Self::Sqs(binding) => Some(binding),
        }
    }
}

impl Binding for ServerBinding {
    const ATTACHMENT: AttachmentPoint = AttachmentPoint::Server;

    fn supported_protocols() -> &'static [Protocol] {
        &[Protocol::Sqs]
    }

    fn protocol(&self) -> Protocol {
        match self {
            Self::Sqs(_) => Protocol::Sqs,
        }
    }

    fn decode(protocol: Protocol, value: Value) -> Result<Self, BindingError> {
        match protocol {
            Protocol::Sqs => decode_variant(protocol, Self::ATTACHMENT, value).map(Self::Sqs),
            other => Err(BindingError::UnsupportedAttachment {
                protocol: other,
                attachment: Self::ATTACHMENT,
            }),
        }
    }
}

impl From<SqsServerBinding> for ServerBinding {
    fn from(binding: SqsServerBinding) -> Self {
        Self::Sqs(binding)
    }
}

impl fmt::Display for ServerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} binding", self.protocol(), Self::ATTACHMENT)
    }
}
