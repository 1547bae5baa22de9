//! Content-service base URL resolution.
//!
//! Order: `<meta name="api-endpoint">` in the rendered page, then the
//! build-time `SCRIBBLED_CANVAS_API_ENDPOINT` value, then [`DEFAULT_API_ENDPOINT`].

#[cfg(test)]
#[path = "endpoint_test.rs"]
mod endpoint_test;

pub const DEFAULT_API_ENDPOINT: &str = "https://api.scribbledcanvas.com";

/// Name of the meta tag the host server injects into the page head.
pub const META_TAG_NAME: &str = "api-endpoint";

/// Resolve the base URL for the current page.
pub fn api_endpoint() -> String {
    resolve(meta_endpoint().as_deref(), option_env!("SCRIBBLED_CANVAS_API_ENDPOINT"))
}

/// Pick the first non-blank candidate and normalize it.
pub fn resolve(meta: Option<&str>, build_time: Option<&str>) -> String {
    [meta, build_time]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(DEFAULT_API_ENDPOINT)
        .trim_end_matches('/')
        .to_owned()
}

/// Join a content path like `/content/homepage` onto a base URL.
pub fn join(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn meta_endpoint() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()?.document()?;
        let selector = format!("meta[name=\"{META_TAG_NAME}\"]");
        let meta = document.query_selector(&selector).ok().flatten()?;
        meta.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
