use std::time::Duration;

use chart_playground::PlaygroundConfig;
use chart_playground::error::{PlaygroundError, TransportError};
use chart_playground::fetch::{HttpTransport, Transport, UserService};
use serde_json::json;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Serves a single canned HTTP/1.1 response and returns the base url.
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut request = Vec::new();
        let mut buf = [0_u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = socket.read(&mut buf).await.expect("read request");
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        socket.shutdown().await.ok();
    });

    format!("http://{addr}")
}

/// Loopback requests must not be routed through a proxy picked up from the environment.
fn local_transport(timeout: Duration) -> HttpTransport {
    let client = reqwest::Client::builder()
        .no_proxy()
        .timeout(timeout)
        .build()
        .expect("client");
    HttpTransport::from_client(client, timeout)
}

#[tokio::test]
async fn http_transport_wraps_json_body_in_data() {
    let base = serve_once("200 OK", r#"[{"name":"Naresh"}]"#).await;
    let transport = local_transport(Duration::from_secs(5));

    let response = transport
        .get(&format!("{base}/users"))
        .await
        .expect("response");

    assert_eq!(response.status, 200);
    assert_eq!(response.data, json!([{ "name": "Naresh" }]));
}

#[tokio::test]
async fn user_service_fetches_over_http() {
    let base = serve_once("200 OK", r#"[{"id":1,"name":"Leanne Graham"}]"#).await;
    let config = PlaygroundConfig::default().with_users_endpoint(format!("{base}/users"));
    let transport = local_transport(config.request_timeout());
    let service = UserService::from_config(transport, &config).expect("service");

    let users = service.fetch_users().await.expect("fetch users");

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].name(), Some("Leanne Graham"));
}

#[tokio::test]
async fn non_json_success_body_is_a_decode_error() {
    let base = serve_once("200 OK", "<html>not json</html>").await;
    let service = UserService::new(
        local_transport(Duration::from_secs(5)),
        format!("{base}/users"),
    );

    let err = service.fetch_users().await.expect_err("html body");

    match err {
        PlaygroundError::Decode(message) => assert!(message.contains("/users")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn http_transport_reports_non_json_body() {
    let base = serve_once("200 OK", "<html>not json</html>").await;

    let err = local_transport(Duration::from_secs(5))
        .get(&format!("{base}/users"))
        .await
        .expect_err("html body");

    assert!(matches!(err, TransportError::Body { .. }));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn http_error_status_is_reported_with_status_code() {
    let base = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#).await;
    let service = UserService::new(
        local_transport(Duration::from_secs(5)),
        format!("{base}/users"),
    );

    let err = service.fetch_users().await.expect_err("server error");

    match err {
        PlaygroundError::Transport(TransportError::Status { status, url }) => {
            assert_eq!(status, 500);
            assert!(url.ends_with("/users"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn unresponsive_server_times_out() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        let (_socket, _) = listener.accept().await.expect("accept");
        tokio::time::sleep(Duration::from_secs(5)).await;
    });

    let transport = local_transport(Duration::from_millis(150));
    let err = transport
        .get(&format!("http://{addr}/users"))
        .await
        .expect_err("timeout");

    match err {
        TransportError::Timeout { timeout_ms, .. } => assert_eq!(timeout_ms, 150),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn connection_refused_is_an_http_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let transport = local_transport(Duration::from_secs(2));
    let err = transport
        .get(&format!("http://{addr}/users"))
        .await
        .expect_err("refused");

    assert!(matches!(err, TransportError::Http(_)));
    assert_eq!(err.status(), None);
}

#[test]
fn from_config_uses_configured_timeout() {
    let config = PlaygroundConfig::default().with_request_timeout_ms(2_500);
    let transport = HttpTransport::from_config(&config).expect("transport");
    assert_eq!(transport.timeout(), Duration::from_millis(2_500));
}

#[test]
fn from_config_rejects_zero_timeout() {
    let config = PlaygroundConfig::default().with_request_timeout_ms(0);
    let err = HttpTransport::from_config(&config).expect_err("zero timeout");
    assert!(matches!(err, PlaygroundError::Config(_)));
}
