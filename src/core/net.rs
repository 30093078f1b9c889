use url::Url;

use crate::core::GeckoError;

/// Read the whole response body and map any non-2xx status to [`GeckoError::Status`].
///
/// The body is drained on every path.
pub(crate) async fn read_body(resp: reqwest::Response, url: &Url) -> Result<Vec<u8>, GeckoError> {
    let status = resp.status();
    let body = resp.bytes().await.map_err(|e| {
        tracing::error!(url = %url, "can't read upstream response: {e}");
        GeckoError::Http(e)
    })?;

    if status.is_success() {
        tracing::trace!(url = %url, bytes = body.len(), "upstream response read");
        return Ok(body.to_vec());
    }

    let text = String::from_utf8_lossy(&body).into_owned();
    tracing::error!(url = %url, status = status.as_u16(), "wrong status code from upstream");
    match serde_json::from_slice::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
    {
        Some(pretty) => tracing::error!("error json response: {pretty}"),
        None => tracing::error!("error response body: {text}"),
    }

    Err(GeckoError::Status {
        status: status.as_u16(),
        url: url.to_string(),
        body: text,
    })
}
