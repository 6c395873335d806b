//! Browser HTTP helpers for the manifest and image metadata.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs that report failure, since these requests are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The manifest fetch returns a typed error so the resolver can pick the
//! fallback branch. The size fetch returns `None` on any failure; a missing
//! size just leaves the viewer's metadata line blank.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ManifestError;
use super::types::ManifestDocument;

#[cfg(not(feature = "csr"))]
const UNAVAILABLE: &str = "not available outside the browser";

/// Parse a `Content-Length` header value. Blank or non-numeric values yield `None`.
#[cfg(any(test, feature = "csr"))]
fn parse_content_length(header: Option<&str>) -> Option<f64> {
    let value = header?.trim();
    if value.is_empty() {
        return None;
    }
    value.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Fetch and parse the manifest at `url`, bypassing the HTTP cache.
///
/// # Errors
///
/// Returns [`ManifestError::Network`] if the request fails,
/// [`ManifestError::Status`] for a non-OK response, and
/// [`ManifestError::Parse`] for an unusable body.
pub async fn fetch_manifest(url: String) -> Result<ManifestDocument, ManifestError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .cache(web_sys::RequestCache::NoStore)
            .send()
            .await
            .map_err(|e| ManifestError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ManifestError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| ManifestError::Network(e.to_string()))?;
        ManifestDocument::from_json_str(&body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ManifestError::Network(UNAVAILABLE.to_owned()))
    }
}

/// Issue a `HEAD` request for `url` and return its `Content-Length`.
pub async fn fetch_content_length(url: &str) -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        let resp = match gloo_net::http::Request::get(url)
            .method(gloo_net::http::Method::HEAD)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(err) => {
                log::debug!("HEAD {url} failed: {err}");
                return None;
            }
        };
        if !resp.ok() {
            log::debug!("HEAD {url} returned {}", resp.status());
            return None;
        }
        parse_content_length(resp.headers().get("content-length").as_deref())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        None
    }
}
