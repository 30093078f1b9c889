use gecko_gateway::GeckoError;
use httpmock::Method::GET;

use crate::common::{
    mock_coin_list, mock_description, mock_global, mock_markets, mock_simple_price, provider_for,
    setup_server,
};

#[tokio::test]
async fn coin_info_merges_market_data_and_all_enrichments() {
    let server = setup_server();
    let list = mock_coin_list(&server);
    let markets = mock_markets(&server, "bitcoin", "usd");
    let volume = mock_simple_price(&server, "bitcoin", "usd");
    let global = mock_global(&server);
    let about = mock_description(&server, "bitcoin");

    let info = provider_for(&server).coin_info("btc", "usd").await.unwrap();

    list.assert();
    markets.assert();
    volume.assert();
    global.assert();
    about.assert();

    assert_eq!(info.name, "Bitcoin");
    assert_eq!(info.current_price, 70744.95);
    assert_eq!(info.market_cap_rank, 1);
    assert_eq!(info.max_supply, 21_000_000.0);
    assert_eq!(info.volume_24h, 21_876_543_210.5);
    assert_eq!(info.market_cap_percentage, 52.41);
    assert!(info.about["en"].starts_with("Bitcoin is the first"));
    // null descriptions are dropped
    assert!(!info.about.contains_key("de"));
    assert!(info.is_complete());
}

#[tokio::test]
async fn resolved_name_overrides_market_name() {
    let server = setup_server();
    let _list = mock_coin_list(&server);
    let _markets = server.mock(|when, then| {
        when.method(GET).path("/coins/markets").query_param("ids", "bitcoin");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"[{"name": "MARKETS-NAME", "current_price": 1.0, "max_supply": null}]"#);
    });
    let _volume = mock_simple_price(&server, "bitcoin", "usd");
    let _global = mock_global(&server);
    let _about = mock_description(&server, "bitcoin");

    let info = provider_for(&server).coin_info("btc", "usd").await.unwrap();
    assert_eq!(info.name, "Bitcoin");
    assert_eq!(info.max_supply, 0.0);
}

#[tokio::test]
async fn missing_currency_key_yields_zero_volume_without_error() {
    let server = setup_server();
    let _list = mock_coin_list(&server);
    let _markets = server.mock(|when, then| {
        when.method(GET)
            .path("/coins/markets")
            .query_param("vs_currency", "eur");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("coins_markets", "bitcoin", "json"));
    });
    // body only carries usd keys
    let volume = server.mock(|when, then| {
        when.method(GET)
            .path("/simple/price")
            .query_param("vs_currencies", "eur");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("simple_price", "bitcoin", "json"));
    });
    let _global = mock_global(&server);
    let _about = mock_description(&server, "bitcoin");

    let info = provider_for(&server).coin_info("btc", "eur").await.unwrap();

    volume.assert();
    assert_eq!(info.volume_24h, 0.0);
    assert!(info.is_complete(), "a missing key is not a failed enrichment");
}

#[tokio::test]
async fn symbol_missing_from_global_shares_gives_zero_percentage() {
    let server = setup_server();
    let _list = mock_coin_list(&server);
    let _markets = server.mock(|when, then| {
        when.method(GET).path("/coins/markets").query_param("ids", "wrapped-bitcoin");
        then.status(200)
            .header("content-type", "application/json")
            .body(crate::common::fixture("coins_markets", "bitcoin", "json"));
    });
    let _volume = server.mock(|when, then| {
        when.method(GET).path("/simple/price");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"wrapped-bitcoin": {"usd": 70700.0, "usd_24h_vol": 250000000.0}}"#);
    });
    let _global = mock_global(&server);
    let _about = server.mock(|when, then| {
        when.method(GET).path("/coins/wrapped-bitcoin");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"description": {"en": "WBTC"}}"#);
    });

    let info = provider_for(&server).coin_info("wbtc", "usd").await.unwrap();
    assert_eq!(info.name, "Wrapped Bitcoin");
    assert_eq!(info.market_cap_percentage, 0.0);
    assert_eq!(info.volume_24h, 250_000_000.0);
    assert!(info.is_complete());
}

#[tokio::test]
async fn unknown_symbol_fails_before_any_market_call() {
    let server = setup_server();
    let list = mock_coin_list(&server);
    let markets = mock_markets(&server, "bitcoin", "usd");

    let err = provider_for(&server).coin_info("nope", "usd").await.unwrap_err();

    list.assert();
    markets.assert_calls(0);
    assert!(matches!(err, GeckoError::NotFound { .. }));
}

#[tokio::test]
async fn cached_symbol_skips_coin_list_on_later_operations() {
    let server = setup_server();
    let list = mock_coin_list(&server);
    let _markets = mock_markets(&server, "bitcoin", "usd");
    let _volume = mock_simple_price(&server, "bitcoin", "usd");
    let _global = mock_global(&server);
    let _about = mock_description(&server, "bitcoin");

    let provider = provider_for(&server);
    provider.coin_info("btc", "usd").await.unwrap();
    provider.coin_info("btc", "usd").await.unwrap();

    list.assert_calls(1);
}
