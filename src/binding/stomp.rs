//! STOMP bindings.

use serde::{Deserialize, Serialize};

/// STOMP operation binding. Reserved for future use; MUST NOT contain properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StompOperationBinding {}

impl StompOperationBinding {
    pub const fn new() -> Self {
        Self {}
    }
}
