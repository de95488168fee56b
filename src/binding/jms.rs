//! JMS bindings.
//!
//! Both JMS types are reserved: they carry no properties today and exist so
//! that `jms` keys resolve to a named type at the channel and operation
//! attachment points.

use serde::{Deserialize, Serialize};

/// JMS channel binding. Reserved for future use; MUST NOT contain properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JmsChannelBinding {}

impl JmsChannelBinding {
    pub const fn new() -> Self {
        Self {}
    }
}

/// JMS operation binding. Reserved for future use; MUST NOT contain properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JmsOperationBinding {}

impl JmsOperationBinding {
    pub const fn new() -> Self {
        Self {}
    }
}
