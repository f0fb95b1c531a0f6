//! Shared HTTP plumbing for provider transports.
//!
//! Several upstreams reject default HTTP clients, so every request goes out
//! with a desktop-browser user agent. Calls are single-attempt with a fixed
//! timeout; retry scheduling is explicitly out of scope.

use std::time::Duration;

use serde_json::Value;
use url::Url;

use crate::VarsityError;

/// Desktop-browser user agent presented to every upstream.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Build the shared client: browser user agent, fixed timeout, no retries.
#[must_use]
pub fn client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .user_agent(BROWSER_USER_AGENT)
        .timeout(timeout)
        .build()
        .unwrap_or_default()
}

fn check_status(resp: reqwest::Response, url: &Url) -> Result<reqwest::Response, VarsityError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        Err(VarsityError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        })
    }
}

/// GET a JSON document with `Accept: application/json` and an optional
/// `Referer` (some endpoints behave differently without one).
pub async fn get_json(
    client: &reqwest::Client,
    url: &Url,
    referer: Option<&str>,
) -> Result<Value, VarsityError> {
    let mut req = client.get(url.clone()).header("Accept", "application/json");
    if let Some(referer) = referer {
        req = req.header("Referer", referer);
    }
    let resp = check_status(req.send().await?, url)?;
    let body = resp.json::<Value>().await.map_err(|e| {
        VarsityError::schema(format!("non-JSON response from {url}: {e}"))
    })?;
    Ok(body)
}

/// GET a page as text, for the scraping sources.
pub async fn get_text(client: &reqwest::Client, url: &Url) -> Result<String, VarsityError> {
    let resp = check_status(client.get(url.clone()).send().await?, url)?;
    Ok(resp.text().await?)
}
