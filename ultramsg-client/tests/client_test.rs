//! Operation-level tests against an in-memory transport.

mod common;

use std::sync::Arc;

use serde_json::json;
use ultramsg_client::{
    ApiResponse, ClearResult, ClearStatus, Error, GatewayClient, InstanceSettings, Method,
    MessageFilters, Params, ResendStatus, SendOptions, SendResult, ValidationError,
};

use common::{client_with, init_tracing, EchoTransport, RecordingTransport, INSTANCE_ID, TOKEN};

const TO: &str = "+14155550100";

/// Call every send operation once.
async fn send_all(client: &GatewayClient) -> Vec<ApiResponse<SendResult>> {
    let opts = SendOptions::new();
    let image = "https://file-example.s3-accelerate.amazonaws.com/images/test.jpg";
    let vcard = "BEGIN:VCARD\nVERSION:3.0\nN:lastname;firstname\nFN:firstname lastname\nEND:VCARD";
    vec![
        client.send_chat_message(TO, "hello", &opts).await.unwrap(),
        client.send_image_message(TO, "caption", image, &opts).await.unwrap(),
        client
            .send_document_message(TO, "cv.pdf", "https://example.com/cv.pdf", &opts)
            .await
            .unwrap(),
        client.send_audio_message(TO, "https://example.com/a.mp3", &opts).await.unwrap(),
        client.send_voice_message(TO, "https://example.com/v.ogg", &opts).await.unwrap(),
        client
            .send_video_message(TO, "clip", "https://example.com/v.mp4", &opts)
            .await
            .unwrap(),
        client.send_link_message(TO, "https://example.com", &opts).await.unwrap(),
        client.send_contact_message(TO, "14000000001@c.us", &opts).await.unwrap(),
        client
            .send_location_message(TO, "ABC company\nSixth floor", 25.197197, 55.2721877, &opts)
            .await
            .unwrap(),
        client.send_vcard_message(TO, vcard, &opts).await.unwrap(),
    ]
}

#[tokio::test]
async fn test_send_operations_resolve_gateway_error() {
    init_tracing();
    let transport = RecordingTransport::new(json!({"error": "bad recipient"}));
    let client = client_with(transport.clone());

    let responses = send_all(&client).await;

    assert_eq!(responses.len(), 10);
    for resp in responses {
        assert!(resp.is_error());
        assert_eq!(resp.error().unwrap().error, "bad recipient");
    }
    assert_eq!(transport.requests().len(), 10);
}

#[tokio::test]
async fn test_send_operations_return_record_unmodified() {
    let wire = json!({"sent": "true", "message": "ok", "id": 4321, "queued": false});
    let transport = RecordingTransport::new(wire.clone());
    let client = client_with(transport);

    for resp in send_all(&client).await {
        let record = resp.clone().ok().unwrap();
        assert_eq!(record.id, 4321);
        assert_eq!(record.message, "ok");
        assert_eq!(serde_json::to_value(&resp).unwrap(), wire);
    }
}

#[tokio::test]
async fn test_send_endpoints_and_payload_fields() {
    let transport = RecordingTransport::new(json!({"sent": "true", "message": "ok", "id": 1}));
    let client = client_with(transport.clone());

    send_all(&client).await;

    let paths: Vec<String> = transport.requests().into_iter().map(|r| r.path).collect();
    let expected: Vec<String> = [
        "chat", "image", "document", "audio", "voice", "video", "link", "contact", "location",
        "vcard",
    ]
    .iter()
    .map(|kind| format!("{}/messages/{}", INSTANCE_ID, kind))
    .collect();
    assert_eq!(paths, expected);

    let location = &transport.requests()[8];
    assert_eq!(location.method, Method::Post);
    assert_eq!(location.params.get("address"), Some("ABC company\nSixth floor"));
    assert_eq!(location.params.get("lat"), Some("25.197197"));
    assert_eq!(location.params.get("lng"), Some("55.2721877"));
}

#[tokio::test]
async fn test_resend_by_id_issues_exactly_one_request() {
    let transport = RecordingTransport::new(json!({"success": "done"}));
    let client = client_with(transport.clone());

    let resp = client.resend_by_id(42).await.unwrap();

    assert_eq!(resp.ok().unwrap().success, "done");
    let request = transport.single_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "instance123/messages/resendById");
    assert_eq!(request.params.get("id"), Some("42"));
}

#[tokio::test]
async fn test_instance_and_token_on_every_request() {
    let transport = RecordingTransport::new(json!({}));
    let client = client_with(transport.clone());

    client.get_chats().await.unwrap();
    client.get_contacts().await.unwrap();
    client.get_instance_me().await.unwrap();
    client.instance_restart().await.unwrap();
    client.resend_by_status(ResendStatus::Expired).await.unwrap();
    client.block_contact("14000000001@c.us").await.unwrap();
    client
        .send_request(Method::Get, "/media/list", Params::new())
        .await
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 7);
    for request in requests {
        assert!(
            request.path.starts_with("instance123/"),
            "unexpected path {}",
            request.path
        );
        assert_eq!(request.params.get("token"), Some(TOKEN));
    }
}

#[tokio::test]
async fn test_list_messages_omits_unset_filters() {
    let page = json!({"total": 0, "pages": 0, "limit": 10, "page": 1, "messages": []});
    let transport = RecordingTransport::new(page);
    let client = client_with(transport.clone());

    let filters = MessageFilters {
        limit: Some(10),
        status: Some("sent".to_string()),
        ..Default::default()
    };
    let resp = client.list_messages(&filters).await.unwrap();
    assert_eq!(resp.ok().unwrap().limit, 10);

    let request = transport.single_request();
    assert_eq!(request.method, Method::Get);
    assert_eq!(request.path, "instance123/messages");
    let keys: Vec<&str> = request.params.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["limit", "status", "token"]);
    let query = request.params.to_query_string();
    assert!(!query.contains("page="));
    assert!(!query.contains("referenceId"));
}

#[tokio::test]
async fn test_priority_and_reference_transmitted_unchanged() {
    let transport = RecordingTransport::new(json!({"sent": "true", "message": "ok", "id": 1}));
    let client = client_with(transport.clone());

    let opts = SendOptions::new().priority(-3).reference_id("order 9/A");
    client.send_chat_message(TO, "hi", &opts).await.unwrap();

    let request = transport.single_request();
    assert_eq!(request.params.get("priority"), Some("-3"));
    assert_eq!(request.params.get("referenceId"), Some("order 9/A"));
    assert_eq!(request.params.get("to"), Some(TO));
}

#[tokio::test]
async fn test_validation_failure_sends_nothing() {
    let transport = RecordingTransport::new(json!({}));
    let client = client_with(transport.clone());

    let long = "x".repeat(4097);
    let err = client
        .send_chat_message(TO, &long, &SendOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Validation(ValidationError::TooLong { field: "body", .. })
    ));

    let err = client
        .send_link_message("", "https://example.com", &SendOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Validation(ValidationError::Empty("to"))));

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_malformed_success_record_is_invalid_response() {
    let transport = RecordingTransport::new(json!({"unexpected": "shape"}));
    let client = client_with(transport);

    let err = client
        .send_chat_message(TO, "hi", &SendOptions::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidResponse(_)));
}

#[tokio::test]
async fn test_statistics_are_unwrapped() {
    let transport = RecordingTransport::new(json!({
        "messages_statistics": {"sent": 7, "queue": 2, "unsent": 1, "invalid": 0, "expired": 3}
    }));
    let client = client_with(transport.clone());

    let stats = client.get_statistics().await.unwrap().ok().unwrap();
    assert_eq!(stats.sent, 7);
    assert_eq!(stats.expired, 3);
    assert_eq!(transport.single_request().path, "instance123/messages/statistics");
}

#[tokio::test]
async fn test_clear_messages() {
    let transport = RecordingTransport::new(json!({"status": "unsent"}));
    let client = client_with(transport.clone());

    let resp = client.clear_messages(ClearStatus::Unsent).await.unwrap();

    assert_eq!(
        resp.ok().unwrap(),
        ClearResult::Status { status: "unsent".to_string() }
    );
    let request = transport.single_request();
    assert_eq!(request.path, "instance123/messages/clear");
    assert_eq!(request.params.get("status"), Some("unsent"));
}

#[tokio::test]
async fn test_update_settings_sends_only_set_options() {
    let transport = RecordingTransport::new(json!({"success": "done"}));
    let client = client_with(transport.clone());

    let settings = InstanceSettings {
        webhook_url: Some("https://hooks.example.com/in".to_string()),
        webhook_message_received: Some(true),
        ..Default::default()
    };
    client.update_instance_settings(&settings).await.unwrap();

    let request = transport.single_request();
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.path, "instance123/instance/settings");
    assert_eq!(request.params.get("webhook_message_received"), Some("true"));
    assert!(!request.params.contains_key("sendDelay"));
    assert!(!request.params.contains_key("webhook_message_ack"));
    assert_eq!(request.params.len(), 3);
}

#[tokio::test]
async fn test_qr_operations_hit_distinct_endpoints() {
    let transport = RecordingTransport::new(json!({}));
    let client = client_with(transport.clone());

    client.get_instance_qr().await.unwrap();
    client.get_instance_qr_code().await.unwrap();
    client.get_instance_screenshot(None).await.unwrap();
    client.get_instance_screenshot(Some("base64")).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].path, "instance123/instance/qr");
    assert_eq!(requests[1].path, "instance123/instance/qrCode");
    assert!(!requests[2].params.contains_key("encoding"));
    assert_eq!(requests[3].params.get("encoding"), Some("base64"));
}

#[tokio::test]
async fn test_chat_and_contact_params() {
    let transport = RecordingTransport::new(json!([]));
    let client = client_with(transport.clone());

    client.get_chat_messages("14000000001@c.us", Some(50)).await.unwrap();
    client.get_chat_messages("14000000001@c.us", None).await.unwrap();
    client.check_contact("14000000002@c.us").await.unwrap();
    client.unblock_contact("14000000003@c.us").await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].path, "instance123/chats/messages");
    assert_eq!(requests[0].params.get("limit"), Some("50"));
    assert!(!requests[1].params.contains_key("limit"));
    assert_eq!(requests[2].path, "instance123/contacts/check");
    assert_eq!(requests[2].method, Method::Get);
    assert_eq!(requests[3].method, Method::Post);
    assert_eq!(requests[3].params.get("chatId"), Some("14000000003@c.us"));
}

#[tokio::test]
async fn test_instance_status_is_typed() {
    let transport = RecordingTransport::new(json!({
        "status": {"accountStatus": {"status": "authenticated", "substatus": "connected"}}
    }));
    let client = client_with(transport);

    let status = client.get_instance_status().await.unwrap().ok().unwrap();
    assert_eq!(status.account().status, "authenticated");
}

#[tokio::test]
async fn test_escape_hatch_passes_params_through() {
    let transport = RecordingTransport::new(json!({"ok": true}));
    let client = client_with(transport.clone());

    let params = Params::from_json(&json!({"a": 1, "b": null, "c": "x y"}));
    let value = client
        .send_request(Method::Get, "groups", params)
        .await
        .unwrap();
    assert_eq!(value, json!({"ok": true}));

    let request = transport.single_request();
    assert_eq!(request.path, "instance123/groups");
    assert!(request.params.to_query_string().contains("c=x%20y"));
    assert!(!request.params.contains_key("b"));
}

#[tokio::test]
async fn test_concurrent_calls_do_not_share_params() {
    let client = GatewayClient::with_transport(INSTANCE_ID, TOKEN, Arc::new(EchoTransport));

    let mut handles = Vec::new();
    for i in 0..32 {
        let client = client.clone();
        handles.push(tokio::spawn(async move {
            let params = Params::new()
                .with("to", format!("+1415555{:04}", i))
                .with("body", format!("message {}", i));
            let echoed = client
                .send_request(Method::Post, "messages/chat", params)
                .await
                .unwrap();
            (i, echoed)
        }));
    }

    for handle in handles {
        let (i, echoed) = handle.await.unwrap();
        assert_eq!(echoed["to"], json!(format!("+1415555{:04}", i)));
        assert_eq!(echoed["body"], json!(format!("message {}", i)));
        assert_eq!(echoed["token"], json!(TOKEN));
    }
}

#[test]
fn test_debug_redacts_token() {
    let client = GatewayClient::new(INSTANCE_ID, TOKEN);
    let debug = format!("{:?}", client);
    assert!(debug.contains(INSTANCE_ID));
    assert!(!debug.contains(TOKEN));
    assert_eq!(client.instance_id(), INSTANCE_ID);
}
