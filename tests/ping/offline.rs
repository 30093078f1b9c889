use gecko_gateway::GeckoError;
use httpmock::Method::GET;

use crate::common::{fixture, mock_failure, provider_for, setup_server};

#[tokio::test]
async fn ping_returns_upstream_greeting() {
    let server = setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/ping");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("ping", "all", "json"));
    });

    let ping = provider_for(&server).ping().await.unwrap();

    mock.assert();
    assert_eq!(ping.gecko_says, "(V3) To the Moon!");
}

#[tokio::test]
async fn ping_error_status_is_reported() {
    let server = setup_server();
    let mock = mock_failure(&server, "/ping", 500);

    let err = provider_for(&server).ping().await.unwrap_err();

    mock.assert();
    assert!(matches!(err, GeckoError::Status { status: 500, .. }));
}
