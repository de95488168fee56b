//! Round-trip, equality and keying behavior of the binding model.

use asyncapi_bindings::binding::{
    Binding, BindingAttachment, BindingCodec, ChannelBinding, ChannelBindings,
    JmsChannelBinding, JmsOperationBinding, MessageBinding, MessageBindings, OperationBinding,
    OperationBindings, Protocol, RedisMessageBinding, ServerBinding, ServerBindings,
    SqsServerBinding, StompOperationBinding, WebSocketsChannelBinding,
};
use serde_json::{json, Value};

fn round_trip<V: Binding>(bindings: &BindingAttachment<V>) -> BindingAttachment<V> {
    let encoded = serde_json::to_string(bindings).unwrap();
    serde_json::from_str(&encoded).unwrap()
}

fn ws_combinations() -> Vec<WebSocketsChannelBinding> {
    (0u8..16)
        .map(|mask| {
            WebSocketsChannelBinding::with_all(
                (mask & 1 != 0).then(|| "GET".to_string()),
                (mask & 2 != 0)
                    .then(|| json!({"type": "object", "properties": {"id": {"type": "integer"}}})),
                (mask & 4 != 0)
                    .then(|| json!({"type": "object", "properties": {"Authorization": {"type": "string"}}})),
                (mask & 8 != 0).then(|| "0.1.0".to_string()),
            )
        })
        .collect()
}

#[test]
fn test_every_reserved_binding_round_trips() {
    let servers: ServerBindings = [ServerBinding::from(SqsServerBinding::new())]
        .into_iter()
        .collect();
    let channels: ChannelBindings = [ChannelBinding::from(JmsChannelBinding::new())]
        .into_iter()
        .collect();
    let operations: OperationBindings = [
        OperationBinding::from(JmsOperationBinding::new()),
        OperationBinding::from(StompOperationBinding::new()),
    ]
    .into_iter()
    .collect();
    let messages: MessageBindings = [MessageBinding::from(RedisMessageBinding::new())]
        .into_iter()
        .collect();

    assert_eq!(round_trip(&servers), servers);
    assert_eq!(round_trip(&channels), channels);
    assert_eq!(round_trip(&operations), operations);
    assert_eq!(round_trip(&messages), messages);

    assert_eq!(serde_json::to_value(&servers).unwrap(), json!({"sqs": {}}));
    assert_eq!(
        serde_json::to_value(&operations).unwrap(),
        json!({"jms": {}, "stomp": {}})
    );
}

#[test]
fn test_every_ws_combination_round_trips() {
    for ws in ws_combinations() {
        let mut bindings = ChannelBindings::new();
        bindings.insert(ws.clone());
        let decoded = round_trip(&bindings);
        assert_eq!(decoded, bindings);
        assert_eq!(decoded.get(Protocol::Ws).and_then(ChannelBinding::as_ws), Some(&ws));
    }
}

#[test]
fn test_reserved_variants_share_encoding_but_not_identity() {
    let jms = OperationBinding::from(JmsOperationBinding::new());
    let stomp = OperationBinding::from(StompOperationBinding::new());
    assert_eq!(jms.encode().unwrap(), stomp.encode().unwrap());
    assert_ne!(jms, stomp);

    let jms_channel = ChannelBinding::from(JmsChannelBinding::new());
    let empty_ws = ChannelBinding::from(WebSocketsChannelBinding::new());
    assert_eq!(jms_channel.encode().unwrap(), json!({}));
    assert_ne!(jms_channel, empty_ws);
}

#[test]
fn test_only_method_present_emits_only_method() {
    let mut bindings = ChannelBindings::new();
    bindings.insert(WebSocketsChannelBinding::builder().method("GET").build());
    let encoded = serde_json::to_value(&bindings).unwrap();
    let ws = encoded["ws"].as_object().unwrap();
    assert_eq!(ws.keys().collect::<Vec<_>>(), vec!["method"]);
}

#[test]
fn test_second_insert_replaces_first() {
    let mut bindings = OperationBindings::new();
    bindings.insert(StompOperationBinding::new());
    let replaced = bindings.insert(StompOperationBinding::new());
    assert_eq!(replaced, Some(OperationBinding::Stomp(StompOperationBinding::new())));
    assert_eq!(bindings.len(), 1);
    assert_eq!(
        serde_json::to_value(&bindings).unwrap(),
        json!({"stomp": {}})
    );
}

#[test]
fn test_ws_channel_scenario() {
    let input = json!({"ws": {"method": "GET", "bindingVersion": "0.1.0"}});
    let bindings: ChannelBindings = serde_json::from_value(input.clone()).unwrap();

    assert_eq!(bindings.len(), 1);
    let expected = WebSocketsChannelBinding::builder()
        .method("GET")
        .binding_version("0.1.0")
        .build();
    assert_eq!(bindings.get_by_key("ws"), Some(&ChannelBinding::Ws(expected)));
    assert_eq!(serde_json::to_value(&bindings).unwrap(), input);
}

#[test]
fn test_jms_operation_scenario() {
    let bindings: OperationBindings = serde_json::from_str(r#"{"jms": {}}"#).unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(
        bindings.get(Protocol::Jms),
        Some(&OperationBinding::Jms(JmsOperationBinding::new()))
    );
}

#[test]
fn test_default_deserialize_preserves_other_protocols() {
    let input = json!({
        "ws": {"method": "POST"},
        "kafka": {"topic": "orders", "partitions": 3},
        "http": {"type": "request"}
    });
    let bindings: ChannelBindings = serde_json::from_value(input.clone()).unwrap();
    assert_eq!(bindings.len(), 1);
    assert_eq!(
        bindings.unrecognized().keys().collect::<Vec<_>>(),
        vec!["http", "kafka"]
    );
    assert_eq!(serde_json::to_value(&bindings).unwrap(), input);
}

#[test]
fn test_malformed_known_binding_fails_deserialize() {
    let result: Result<ChannelBindings, _> =
        serde_json::from_value(json!({"ws": {"method": ["GET", "POST"]}}));
    let err = result.unwrap_err().to_string();
    assert!(err.contains("ws channel binding"), "unexpected error: {}", err);
}

#[test]
fn test_yaml_channel_bindings() {
    let yaml = r#"
ws:
  method: GET
  query:
    type: object
    properties:
      companyId:
        type: number
  bindingVersion: 0.1.0
jms: {}
"#;
    let codec = BindingCodec::new().with_format(asyncapi_bindings::binding::DocumentFormat::Yaml);
    let bindings: ChannelBindings = codec.decode_str(yaml).unwrap();
    assert_eq!(bindings.len(), 2);

    let ws = bindings.get(Protocol::Ws).and_then(ChannelBinding::as_ws).unwrap();
    assert_eq!(ws.method(), Some("GET"));
    assert_eq!(ws.binding_version(), Some("0.1.0"));
    assert_eq!(
        ws.query().and_then(|q| q.pointer("/properties/companyId/type")),
        Some(&Value::from("number"))
    );
    assert!(bindings.contains(Protocol::Jms));
}
