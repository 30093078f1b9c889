use gecko_gateway::{ErrorKind, GeckoError};
use httpmock::Method::GET;

use crate::common::{fixture, mock_coin_list, mock_failure, provider_for, setup_server};

const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";

fn contract_path() -> String {
    format!("/coins/ethereum/contract/{USDC}")
}

#[tokio::test]
async fn token_price_is_picked_in_requested_currency() {
    let server = setup_server();
    let list = mock_coin_list(&server);
    let contract = server.mock(|when, then| {
        when.method(GET).path(contract_path());
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("coin_contract", "usdc", "json"));
    });

    let provider = provider_for(&server);
    let usd = provider.defi_token("ethereum", USDC, "usd").await.unwrap();
    let eur = provider.defi_token("ethereum", USDC, "eur").await.unwrap();

    contract.assert_calls(2);
    // contract lookups never consult the coin list
    list.assert_calls(0);
    assert_eq!(usd.name, "USDC");
    assert_eq!(usd.symbol, "usdc");
    assert_eq!(usd.current_price, 0.999912);
    assert_eq!(eur.current_price, 0.925731);
    assert!(usd.image.thumb.ends_with("/thumb/usdc.png"));
    assert!(usd.image.large.ends_with("/large/usdc.png"));
}

#[tokio::test]
async fn missing_currency_gives_zero_price() {
    let server = setup_server();
    let _contract = server.mock(|when, then| {
        when.method(GET).path(contract_path());
        then.status(200)
            .header("content-type", "application/json")
            .body(fixture("coin_contract", "usdc", "json"));
    });

    let token = provider_for(&server)
        .defi_token("ethereum", USDC, "jpy")
        .await
        .unwrap();

    assert_eq!(token.name, "USDC");
    assert_eq!(token.current_price, 0.0);
}

#[tokio::test]
async fn unknown_contract_is_fatal() {
    let server = setup_server();
    let contract = mock_failure(&server, "/coins/ethereum/contract/0xdead", 404);

    let err = provider_for(&server)
        .defi_token("ethereum", "0xdead", "usd")
        .await
        .unwrap_err();

    contract.assert();
    assert!(matches!(err, GeckoError::Status { status: 404, .. }));
    assert_eq!(err.kind(), ErrorKind::Transport);
}
