//! Operation binding family.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

use super::attachment::{decode_variant, Binding};
use super::error::BindingError;
use super::jms::JmsOperationBinding;
use super::protocol::{AttachmentPoint, Protocol};
use super::stomp::StompOperationBinding;

/// Protocol-specific binding attached to an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OperationBinding {
    Jms(JmsOperationBinding),
    Stomp(StompOperationBinding),
}

impl OperationBinding {
    pub fn as_jms(&self) -> Option<&JmsOperationBinding> {
        match self {
            Self::Jms(binding) => Some(binding),
            _ => None,
        }
    }

    pub fn as_stomp(&self) -> Option<&StompOperationBinding> {
        match self {
            Self::Stomp(binding) => Some(binding),
            _ => None,
        }
    }
}

impl Binding for OperationBinding {
    const ATTACHMENT: AttachmentPoint = AttachmentPoint::Operation;

    fn supported_protocols() -> &'static [Protocol] {
        &[Protocol::Jms, Protocol::Stomp]
    }

    fn protocol(&self) -> Protocol {
        match self {
            Self::Jms(_) => Protocol::Jms,
            Self::Stomp(_) => Protocol::Stomp,
        }
    }

    fn decode(protocol: Protocol, value: Value) -> Result<Self, BindingError> {
        match protocol {
            Protocol::Jms => decode_variant(protocol, Self::ATTACHMENT, value).map(Self::Jms),
            Protocol::Stomp => decode_variant(protocol, Self::ATTACHMENT, value).map(Self::Stomp),
            other => Err(BindingError::UnsupportedAttachment {
                protocol: other,
                attachment: Self::ATTACHMENT,
            }),
        }
    }
}

impl From<JmsOperationBinding> for OperationBinding {
    fn from(binding: JmsOperationBinding) -> Self {
        Self::Jms(binding)
    }
}

impl From<StompOperationBinding> for OperationBinding {
    fn from(binding: StompOperationBinding) -> Self {
        Self::Stomp(binding)
    }
}

impl fmt::Display for OperationBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} binding", self.protocol(), Self::ATTACHMENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reserved_operation_bindings_differ() {
        let jms = OperationBinding::from(JmsOperationBinding::new());
        let stomp = OperationBinding::from(StompOperationBinding::new());
        assert_eq!(jms.encode().unwrap(), json!({}));
        assert_eq!(stomp.encode().unwrap(), json!({}));
        assert_ne!(jms, stomp);
        assert_eq!(jms, OperationBinding::Jms(JmsOperationBinding::default()));
    }

    #[test]
    fn test_decode_stomp_ignores_extra_keys() {
        let binding =
            OperationBinding::decode(Protocol::Stomp, json!({"receipt": true})).unwrap();
        assert_eq!(binding.as_stomp(), Some(&StompOperationBinding::new()));
        assert_eq!(binding.encode().unwrap(), json!({}));
    }
}
