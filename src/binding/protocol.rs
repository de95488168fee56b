//! Protocol identifiers and attachment points.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Protocol identifier used as the key of a bindings object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    Jms,
    Redis,
    Sqs,
    Stomp,
    Ws,
}

impl Protocol {
    /// Every protocol this crate has binding types for.
    pub const ALL: [Protocol; 5] = [
        Protocol::Jms,
        Protocol::Redis,
        Protocol::Sqs,
        Protocol::Stomp,
        Protocol::Ws,
    ];

    /// The key used for this protocol in a bindings object.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jms => "jms",
            Self::Redis => "redis",
            Self::Sqs => "sqs",
            Self::Stomp => "stomp",
            Self::Ws => "ws",
        }
    }

    /// Parse a bindings-object key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str() == key)
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).ok_or_else(|| format!("unknown protocol '{}'", s))
    }
}

/// Position in a document where bindings may be declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentPoint {
    Server,
    Channel,
    Operation,
    Message,
}

impl AttachmentPoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "server",
            Self::Channel => "channel",
            Self::Operation => "operation",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for AttachmentPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttachmentPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "server" => Ok(Self::Server),
            "channel" => Ok(Self::Channel),
            "operation" => Ok(Self::Operation),
            "message" => Ok(Self::Message),
            other => Err(format!(
                "unknown attachment point '{}' (expected server, channel, operation or message)",
                other
            )),
        }
    }
}
