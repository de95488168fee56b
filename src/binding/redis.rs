//! Redis bindings.

use serde::{Deserialize, Serialize};

/// Redis message binding. Reserved for future use; MUST NOT contain properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedisMessageBinding {}

impl RedisMessageBinding {
    pub const fn new() -> Self {
        Self {}
    }
}
