use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;

use super::AppState;
use super::envelope::{ApiError, Envelope};
use super::params::{
    CoinChartQuery, CoinChartRequest, CoinInfoQuery, CoinInfoRequest, TokenInfoQuery,
    TokenInfoRequest,
};
use crate::{chart::ChartSeries, info::CoinInfo, ping::Ping, token::DefiToken};

type ApiResult<T> = Result<Json<Envelope<T>>, ApiError>;

// ── Route definitions ────────────────────────────────────────────────────

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping_gecko", get(ping_gecko))
        .route("/coin/info", get(coin_info))
        .route("/coin/chart", get(coin_chart))
        .route("/token/info", get(token_info))
}

/// Bind a query string and validate it into a request.
fn bind<Q, R>(query: Result<Query<Q>, QueryRejection>) -> Result<R, ApiError>
where
    R: TryFrom<Q, Error = crate::GeckoError> + std::fmt::Debug,
{
    let Query(raw) = query.map_err(|e| {
        tracing::error!("can't bind query string: {e}");
        ApiError::bad_request()
    })?;
    let req = R::try_from(raw).map_err(|e| {
        tracing::error!("missing parameter(s) in url: {e}");
        ApiError::bad_request()
    })?;
    tracing::info!("parse request successfully");
    tracing::debug!(request = ?req);
    Ok(req)
}

// ── Handlers ─────────────────────────────────────────────────────────────

async fn ping_gecko(State(state): State<Arc<AppState>>) -> ApiResult<Ping> {
    tracing::info!("start ping gecko");
    let ping = state.provider.ping().await.map_err(|e| {
        tracing::error!("upstream ping failed: {e}");
        ApiError::internal()
    })?;
    Ok(Json(Envelope::ok(ping)))
}

async fn coin_info(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CoinInfoQuery>, QueryRejection>,
) -> ApiResult<CoinInfo> {
    tracing::info!("start get coin info");
    let req: CoinInfoRequest = bind(query)?;

    let info = state
        .provider
        .coin_info(&req.coin, &req.conversion)
        .await
        .map_err(|e| {
            tracing::error!(coin = %req.coin, conversion = %req.conversion, "can't get coin info: {e}");
            ApiError::not_found(format!(
                "failed to get coin info for {} with {} conversion",
                req.coin, req.conversion
            ))
        })?;

    tracing::info!(missing = ?info.missing, "get coin info successfully");
    Ok(Json(Envelope::ok(info)))
}

async fn coin_chart(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CoinChartQuery>, QueryRejection>,
) -> ApiResult<ChartSeries> {
    tracing::info!("start get coin chart");
    let req: CoinChartRequest = bind(query)?;

    let chart = state
        .provider
        .coin_chart(
            &req.coin,
            &req.conversion,
            req.range_start.as_deref(),
            req.range_end.as_deref(),
        )
        .await
        .map_err(|e| {
            tracing::error!(coin = %req.coin, conversion = %req.conversion, "can't get coin chart: {e}");
            ApiError::not_found(format!(
                "failed to get market chart for {} in {}",
                req.coin, req.conversion
            ))
        })?;

    tracing::info!("get coin chart successfully");
    Ok(Json(Envelope::ok(chart)))
}

async fn token_info(
    State(state): State<Arc<AppState>>,
    query: Result<Query<TokenInfoQuery>, QueryRejection>,
) -> ApiResult<DefiToken> {
    tracing::info!("start get defi token info");
    let req: TokenInfoRequest = bind(query)?;

    let token = state
        .provider
        .defi_token(&req.network, &req.address, &req.conversion)
        .await
        .map_err(|e| {
            tracing::error!(network = %req.network, address = %req.address, "can't get token info: {e}");
            ApiError::not_found(format!(
                "failed to get token info for {} {} in {}",
                req.network, req.address, req.conversion
            ))
        })?;

    tracing::info!("get defi token info successfully");
    Ok(Json(Envelope::ok(token)))
}
