//! # asyncapi-bindings
//!
//! Typed AsyncAPI protocol bindings.
//!
//! ## Overview
//!
//! AsyncAPI lets a document attach protocol-specific metadata ("bindings") to
//! servers, channels, operations and messages. This crate models those bindings
//! for JMS, Redis, SQS, STOMP and WebSockets as closed, per-attachment-point
//! sum types, and reads and writes the bindings objects found in JSON and YAML
//! documents.
//!
//! ## Key Features
//!
//! - **Typed families**: [`binding::ServerBinding`], [`binding::ChannelBinding`],
//!   [`binding::OperationBinding`] and [`binding::MessageBinding`], exhaustively
//!   matchable
//! - **Keyed mappings**: [`binding::BindingAttachment`] stores one binding per
//!   protocol and can preserve keys it does not model
//! - **Codec**: [`binding::BindingCodec`] for JSON/YAML with sparse output
//!   (absent fields are omitted, never written as `null`)
//! - **Validation**: opt-in [`binding::BindingValidator`] for documented
//!   constraints such as the WebSockets `method`
//!
//! ## Quick Start
//!
//! ```rust
//! use asyncapi_bindings::binding::{
//!     BindingCodec, ChannelBindings, DocumentFormat, WebSocketsChannelBinding,
//! };
//!
//! # fn main() -> asyncapi_bindings::Result<()> {
//! let mut bindings = ChannelBindings::new();
//! bindings.insert(
//!     WebSocketsChannelBinding::builder()
//!         .method("GET")
//!         .binding_version("0.1.0")
//!         .build(),
//! );
//!
//! let yaml = BindingCodec::new()
//!     .with_format(DocumentFormat::Yaml)
//!     .encode_string(&bindings)?;
//! assert!(yaml.contains("method: GET"));
//! # Ok(())
//! # }
//! ```

pub mod binding;

pub use binding::{
    AttachmentPoint, Binding, BindingAttachment, BindingCodec, BindingError, BindingValidator,
    ChannelBinding, MessageBinding, OperationBinding, Protocol, ServerBinding,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
