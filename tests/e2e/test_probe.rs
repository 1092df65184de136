use crate::e2e::helpers;

use byteplus_tts_probe::domain::probe::{ProbeError, ProbeTarget};
use helpers::{
    output_text, probe_service, test_config, ACCESS_TOKEN, APP_ID, AUTHORIZATION, TTS_PATH,
};
use httpmock::MockServer;
use pretty_assertions::assert_eq;
use serde_json::Value;

#[tokio::test]
async fn it_should_send_configured_credentials_on_baseline() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(httpmock::Method::POST)
                .path(TTS_PATH)
                .header("Authorization", AUTHORIZATION)
                .header("Content-Type", "application/json");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"code":3000}"#);
        })
        .await;

    let config = test_config(&server.url(TTS_PATH), &[]);
    let service = probe_service(&config);
    let mut out = Vec::new();

    let outcome = service.probe(&ProbeTarget::Baseline, &mut out).await.unwrap();

    mock.assert_async().await;
    assert_eq!(outcome.status, 200);
    assert!(outcome.accepted());
    assert_eq!(outcome.request.app.appid.as_deref(), Some(APP_ID));
    assert_eq!(outcome.request.app.token.as_deref(), Some(ACCESS_TOKEN));
    assert_eq!(outcome.request.app.cluster.as_deref(), Some("byteplus_tts"));

    let text = output_text(out);
    assert!(text.contains("Testing none with value: [actual value]"));
    assert!(text.contains("Status code: 200"));
    assert!(text.contains(r#"Response: {"code":3000}"#));
}

#[tokio::test]
async fn it_should_keep_configured_token_in_header_when_body_token_is_invalid() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(httpmock::Method::POST)
                .path(TTS_PATH)
                .header("Authorization", AUTHORIZATION);
            then.status(401)
                .body(r#"{"code":3001,"message":"invalid token"}"#);
        })
        .await;

    let config = test_config(&server.url(TTS_PATH), &[]);
    let service = probe_service(&config);
    let mut out = Vec::new();

    let outcome = service
        .probe(&ProbeTarget::Token("INVALID_TOKEN".to_string()), &mut out)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(outcome.status, 401);
    assert!(!outcome.accepted());
    assert_eq!(outcome.request.app.token.as_deref(), Some("INVALID_TOKEN"));
    assert_eq!(
        outcome.reply.and_then(|r| r.message),
        Some("invalid token".to_string())
    );
    assert!(output_text(out).contains("Status code: 401"));
}

#[tokio::test]
async fn it_should_run_the_default_sequence_in_order() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(httpmock::Method::POST)
                .path(TTS_PATH)
                .header("Authorization", AUTHORIZATION);
            then.status(400).body(r#"{"code":3001}"#);
        })
        .await;

    let config = test_config(
        &server.url(TTS_PATH),
        &[("BYTEPLUS_CLUSTER", "custom_cluster")],
    );
    let service = probe_service(&config);
    let mut out = Vec::new();

    let outcomes = service
        .run_sequence(&ProbeTarget::default_sequence(), &mut out)
        .await
        .unwrap();

    // a request not matching the mock would have come back as 404
    let statuses: Vec<u16> = outcomes.iter().map(|o| o.status).collect();
    assert_eq!(statuses, vec![400, 400, 400, 400]);

    let clusters: Vec<_> = outcomes
        .iter()
        .map(|o| o.request.app.cluster.clone().unwrap_or_default())
        .collect();
    assert_eq!(
        clusters,
        vec!["custom_cluster", "custom_cluster", "custom_cluster", "INVALID_CLUSTER"]
    );

    let text = output_text(out);
    let positions: Vec<usize> = ["Testing none", "Testing appid", "Testing token", "Testing cluster"]
        .iter()
        .map(|needle| text.find(needle).expect("probe missing from report"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn it_should_print_the_exact_json_that_was_sent() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(httpmock::Method::POST).path(TTS_PATH);
            then.status(200).body("{}");
        })
        .await;

    let config = test_config(&server.url(TTS_PATH), &[]);
    let service = probe_service(&config);
    let mut out = Vec::new();

    let outcome = service
        .probe(&ProbeTarget::AppId("INVALID_APPID".to_string()), &mut out)
        .await
        .unwrap();

    let text = output_text(out);
    let start = text.find("Request JSON: ").unwrap() + "Request JSON: ".len();
    let end = text.find("Status code:").unwrap();
    let printed: Value = serde_json::from_str(text[start..end].trim()).unwrap();

    assert_eq!(printed, serde_json::to_value(&outcome.request).unwrap());
    assert_eq!(printed["app"]["appid"], "INVALID_APPID");
    assert_eq!(printed["audio"]["voice_type"], "BV027_streaming");
}

#[tokio::test]
async fn it_should_report_unreadable_bodies_verbatim() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(httpmock::Method::POST).path(TTS_PATH);
            then.status(502).body("<html>Bad Gateway</html>");
        })
        .await;

    let config = test_config(&server.url(TTS_PATH), &[]);
    let service = probe_service(&config);
    let mut out = Vec::new();

    let outcome = service.probe(&ProbeTarget::Baseline, &mut out).await.unwrap();

    assert_eq!(outcome.status, 502);
    assert!(outcome.reply.is_none());
    assert!(output_text(out).contains("Response: <html>Bad Gateway</html>"));
}

#[tokio::test]
async fn it_should_fail_distinctly_when_nothing_is_listening() {
    let config = test_config(&helpers::closed_port_url(), &[]);
    let service = probe_service(&config);
    let mut out = Vec::new();

    let err = service
        .run_sequence(&ProbeTarget::default_sequence(), &mut out)
        .await
        .unwrap_err();

    assert!(matches!(err, ProbeError::Transport(_)));
    assert!(err.is_network());
    assert_eq!(err.category(), "connect");
    // the run stops after the first probe
    assert!(!output_text(out).contains("Testing appid"));
}
