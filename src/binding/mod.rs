//! AsyncAPI protocol bindings.
//!
//! # Binding Model
//!
//! A document may attach protocol-specific metadata at four places: servers,
//! channels, operations and messages. Each place has its own closed family of
//! binding types, and the bindings declared at one place are held in a
//! [`BindingAttachment`] keyed by protocol identifier.
//!
//! | Attachment point | Family | Protocols |
//! |------------------|--------|-----------|
//! | server | [`ServerBinding`] | `sqs` |
//! | channel | [`ChannelBinding`] | `jms`, `ws` |
//! | operation | [`OperationBinding`] | `jms`, `stomp` |
//! | message | [`MessageBinding`] | `redis` |
//!
//! Apart from the WebSockets channel binding every type above is reserved: it
//! has no properties yet and encodes as `{}`, but remains a distinct type so it
//! can grow fields independently of its siblings.
//!
//! ## Module Structure
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`attachment`] | The [`Binding`] trait and the per-attachment mapping |
//! | [`codec`] | JSON/YAML decoding and encoding of bindings objects |
//! | [`config`] | Codec configuration and unknown-protocol policy |
//! | [`validator`] | Opt-in JSON Schema checks for documented constraints |
//! | [`error`] | Binding-specific error types |
//!
//! ## Example
//!
//! ```rust
//! use asyncapi_bindings::binding::{BindingCodec, ChannelBinding, ChannelBindings, Protocol};
//!
//! # fn main() -> Result<(), asyncapi_bindings::binding::BindingError> {
//! let codec = BindingCodec::new();
//! let bindings: ChannelBindings =
//!     codec.decode_str(r#"{"ws": {"method": "GET", "bindingVersion": "0.1.0"}}"#)?;
//!
//! let ws = bindings.get(Protocol::Ws).and_then(ChannelBinding::as_ws).unwrap();
//! assert_eq!(ws.method(), Some("GET"));
//! assert_eq!(ws.query(), None);
//! # Ok(())
//! # }
//! ```

pub mod attachment;
pub mod channel;
pub mod codec;
pub mod config;
pub mod error;
pub mod jms;
pub mod message;
pub mod operation;
pub mod protocol;
pub mod redis;
pub mod server;
pub mod sqs;
pub mod stomp;
pub mod validator;
pub mod ws;

pub use attachment::{Binding, BindingAttachment};
pub use channel::ChannelBinding;
pub use codec::BindingCodec;
pub use config::{CodecConfig, DocumentFormat, UnknownProtocolPolicy};
pub use error::BindingError;
pub use jms::{JmsChannelBinding, JmsOperationBinding};
pub use message::MessageBinding;
pub use operation::OperationBinding;
pub use protocol::{AttachmentPoint, Protocol};
pub use redis::RedisMessageBinding;
pub use server::ServerBinding;
pub use sqs::SqsServerBinding;
pub use stomp::StompOperationBinding;
pub use validator::BindingValidator;
pub use ws::{WebSocketsChannelBinding, WebSocketsChannelBindingBuilder};

/// Bindings declared on a server.
pub type ServerBindings = BindingAttachment<ServerBinding>;
/// Bindings declared on a channel.
pub type ChannelBindings = BindingAttachment<ChannelBinding>;
/// Bindings declared on an operation.
pub type OperationBindings = BindingAttachment<OperationBinding>;
/// Bindings declared on a message.
pub type MessageBindings = BindingAttachment<MessageBinding>;
