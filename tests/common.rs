#![allow(dead_code)]

use gecko_gateway::{GeckoClient, Provider};
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path, time::Duration};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key, ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> GeckoClient {
    GeckoClient::builder()
        .base_url(Url::parse(&server.base_url()).unwrap())
        .request_timeout(Duration::from_secs(5))
        .list_timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

pub fn provider_for(server: &MockServer) -> Provider {
    Provider::new(client_for(server))
}

pub fn mock_coin_list(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/coins/list");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("coins_list", "all", "json"));
    })
}

pub fn mock_markets<'a>(server: &'a MockServer, id: &'a str, currency: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/coins/markets")
            .query_param("vs_currency", currency)
            .query_param("ids", id)
            .query_param("order", "market_cap_desc");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("coins_markets", id, "json"));
    })
}

pub fn mock_simple_price<'a>(server: &'a MockServer, id: &'a str, currency: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/simple/price")
            .query_param("ids", id)
            .query_param("vs_currencies", currency)
            .query_param("include_24hr_vol", "true");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("simple_price", id, "json"));
    })
}

pub fn mock_global(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/global");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("global", "all", "json"));
    })
}

pub fn mock_description<'a>(server: &'a MockServer, id: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/coins/{id}"))
            .query_param("localization", "false")
            .query_param("market_data", "false");
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("coin_detail", id, "json"));
    })
}

/// Any GET on `path` answers with `status` and a small JSON error body.
pub fn mock_failure<'a>(server: &'a MockServer, path: &'a str, status: u16) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status)
            .header("content-type", "application/json")
            .body(r#"{"status":{"error_code":500,"error_message":"upstream exploded"}}"#);
    })
}
