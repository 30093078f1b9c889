use gecko_gateway::{Enrichment, ErrorKind};

use crate::common::{
    mock_coin_list, mock_description, mock_failure, mock_global, mock_markets, mock_simple_price,
    provider_for, setup_server,
};

#[tokio::test]
async fn failed_volume_leaves_zero_and_no_error() {
    let server = setup_server();
    let _list = mock_coin_list(&server);
    let _markets = mock_markets(&server, "bitcoin", "usd");
    let volume = mock_failure(&server, "/simple/price", 500);
    let _global = mock_global(&server);
    let _about = mock_description(&server, "bitcoin");

    let info = provider_for(&server).coin_info("btc", "usd").await.unwrap();

    volume.assert();
    assert!(info.current_price > 0.0);
    assert!(info.market_cap > 0.0);
    assert_eq!(info.volume_24h, 0.0);
    assert_eq!(info.market_cap_percentage, 52.41);
    assert!(!info.about.is_empty());
    assert_eq!(info.missing, vec![Enrichment::Volume24h]);
}

#[tokio::test]
async fn failed_share_and_description_are_swallowed_like_volume() {
    let server = setup_server();
    let _list = mock_coin_list(&server);
    let _markets = mock_markets(&server, "bitcoin", "usd");
    let _volume = mock_simple_price(&server, "bitcoin", "usd");
    let global = mock_failure(&server, "/global", 502);
    let about = mock_failure(&server, "/coins/bitcoin", 500);

    let info = provider_for(&server).coin_info("btc", "usd").await.unwrap();

    global.assert();
    about.assert();
    assert_eq!(info.volume_24h, 21_876_543_210.5);
    assert_eq!(info.market_cap_percentage, 0.0);
    assert!(info.about.is_empty());
    assert_eq!(
        info.missing,
        vec![Enrichment::MarketCapShare, Enrichment::Description]
    );
}

#[tokio::test]
async fn every_enrichment_failing_still_returns_market_data() {
    let server = setup_server();
    let _list = mock_coin_list(&server);
    let _markets = mock_markets(&server, "bitcoin", "usd");
    let _volume = mock_failure(&server, "/simple/price", 429);
    let _global = mock_failure(&server, "/global", 500);
    let _about = mock_failure(&server, "/coins/bitcoin", 404);

    // sequential and concurrent fan-out must agree
    for fan_out in [1, 3] {
        let info = provider_for(&server)
            .fan_out(fan_out)
            .coin_info("btc", "usd")
            .await
            .unwrap();
        assert_eq!(info.name, "Bitcoin");
        assert_eq!(info.current_price, 70744.95);
        assert_eq!(
            info.missing,
            vec![
                Enrichment::Volume24h,
                Enrichment::MarketCapShare,
                Enrichment::Description
            ],
            "fan_out = {fan_out}"
        );
    }
}

#[tokio::test]
async fn primary_market_failure_is_fatal() {
    let server = setup_server();
    let _list = mock_coin_list(&server);
    let markets = mock_failure(&server, "/coins/markets", 500);
    let volume = mock_simple_price(&server, "bitcoin", "usd");

    let err = provider_for(&server).coin_info("btc", "usd").await.unwrap_err();

    markets.assert();
    volume.assert_calls(0);
    assert_eq!(err.kind(), ErrorKind::Transport);
}

#[tokio::test]
async fn empty_market_list_is_not_found() {
    let server = setup_server();
    let _list = mock_coin_list(&server);
    let _markets = server.mock(|when, then| {
        when.method(httpmock::Method::GET).path("/coins/markets");
        then.status(200)
            .header("content-type", "application/json")
            .body("[]");
    });

    let err = provider_for(&server).coin_info("eth", "usd").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}
