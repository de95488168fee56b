//! SQS bindings.

use serde::{Deserialize, Serialize};

/// SQS server binding. Reserved for future use; MUST NOT contain properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SqsServerBinding {}

impl SqsServerBinding {
    pub const fn new() -> Self {
        Self {}
    }
}
