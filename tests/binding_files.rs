//! Loading bindings from files and validating them.

use asyncapi_bindings::binding::{
    BindingCodec, BindingError, BindingValidator, ChannelBinding, ChannelBindings, CodecConfig,
    MessageBindings, Protocol, ServerBindings, UnknownProtocolPolicy,
};
use std::io::Write;

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_decode_yaml_file_by_extension() {
    let file = write_temp(
        ".yaml",
        r#"
ws:
  method: POST
  headers:
    type: object
    properties:
      Authorization:
        type: string
"#,
    );

    // The codec defaults to JSON; the extension decides.
    let bindings: ChannelBindings = BindingCodec::new().decode_file(file.path()).unwrap();
    let ws = bindings.get(Protocol::Ws).and_then(ChannelBinding::as_ws).unwrap();
    assert_eq!(ws.method(), Some("POST"));
    assert!(ws.headers().is_some());
    assert_eq!(ws.effective_binding_version(), "latest");

    BindingValidator::new()
        .unwrap()
        .validate_attachment(&bindings)
        .unwrap();
}

#[test]
fn test_decode_json_file() {
    let file = write_temp(".json", r#"{"sqs": {}}"#);
    let bindings: ServerBindings = BindingCodec::new().decode_file(file.path()).unwrap();
    assert!(bindings.contains(Protocol::Sqs));
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = BindingCodec::new()
        .decode_file::<ChannelBinding>(&path)
        .unwrap_err();
    match err {
        BindingError::LoadError { path: p, .. } => assert!(p.ends_with("absent.json")),
        other => panic!("Expected LoadError, got: {:?}", other),
    }
}

#[test]
fn test_scalar_document_is_load_error_with_hint() {
    let file = write_temp(".json", "\"ws\"");
    let err = BindingCodec::new()
        .decode_file::<ChannelBinding>(file.path())
        .unwrap_err();
    match err {
        BindingError::LoadError { reason, hint, .. } => {
            assert!(reason.contains("found string"));
            assert!(hint.is_some());
        }
        other => panic!("Expected LoadError, got: {:?}", other),
    }
}

#[test]
fn test_reject_policy_on_file() {
    let file = write_temp(".yml", "redis: {}\namqp: {}\n");
    let codec = BindingCodec::new().with_unknown_protocols(UnknownProtocolPolicy::Reject);
    let err = codec.decode_file::<asyncapi_bindings::MessageBinding>(file.path()).unwrap_err();
    assert!(matches!(err, BindingError::UnknownProtocol { ref key, .. } if key == "amqp"));

    let lenient: MessageBindings = BindingCodec::new()
        .with_unknown_protocols(UnknownProtocolPolicy::Ignore)
        .decode_file(file.path())
        .unwrap();
    assert_eq!(lenient.len(), 1);
    assert!(lenient.unrecognized().is_empty());
}

#[test]
fn test_invalid_ws_file_fails_validation_only() {
    let file = write_temp(".json", r#"{"ws": {"method": "CONNECT", "bindingVersion": "0.1.0"}}"#);
    let bindings: ChannelBindings = BindingCodec::new().decode_file(file.path()).unwrap();

    let ws = bindings.get(Protocol::Ws).and_then(ChannelBinding::as_ws).unwrap();
    assert_eq!(ws.method(), Some("CONNECT"));

    let err = BindingValidator::new()
        .unwrap()
        .validate_attachment(&bindings)
        .unwrap_err();
    assert!(matches!(err, BindingError::ValidationError(_)));
}


#[test]
fn test_malformed_file_is_load_error_not_validation_error() {
    let file = write_temp(".json", "{\"ws\": {\"method\": ");
    let err = BindingCodec::new()
        .decode_file::<ChannelBinding>(file.path())
        .unwrap_err();
    match err {
        BindingError::LoadError { reason, .. } => {
            assert!(reason.contains("invalid JSON"), "unexpected reason: {}", reason)
        }
        other => panic!("Expected LoadError, got: {:?}", other),
    }
}

#[test]
fn test_env_settings_drive_encoded_output() {
    let file = write_temp(".json", r#"{"ws": {"method": "GET"}, "kafka": {"topic": "orders"}}"#);

    let yaml = CodecConfig::from_lookup(|key: &str| {
        (key == "ASYNCAPI_BINDINGS_FORMAT").then(|| "yaml".to_string())
    })
    .unwrap();
    let codec = BindingCodec::with_config(yaml);
    let bindings: ChannelBindings = codec.decode_file(file.path()).unwrap();
    let text = codec.encode_string(&bindings).unwrap();
    assert!(text.contains("method: GET"), "unexpected YAML: {}", text);
    assert!(!text.contains('{'), "unexpected YAML: {}", text);

    let compact = CodecConfig::from_lookup(|key: &str| {
        (key == "ASYNCAPI_BINDINGS_PRETTY").then(|| "false".to_string())
    })
    .unwrap();
    let text = BindingCodec::with_config(compact)
        .encode_string(&bindings)
        .unwrap();
    assert_eq!(text, r#"{"kafka":{"topic":"orders"},"ws":{"method":"GET"}}"#);
}
