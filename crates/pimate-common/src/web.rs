//! URL checks shared by config validation, the HTTP client, and the link opener.

pub use url::Url;

/// Parse `raw` as an absolute `http`/`https` URL with a host.
pub fn parse_http_url(raw: &str) -> Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| format!("'{raw}': {e}"))?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("'{raw}': unsupported scheme '{other}'")),
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(format!("'{raw}': missing host"));
    }
    Ok(url)
}
