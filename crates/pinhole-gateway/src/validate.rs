/// Validates that a URL has a usable shape: a http/https scheme and a host.
///
/// Request-shape validation belongs to this boundary; the core treats the
/// URL as an opaque string.
pub fn validate_url(url: &str) -> Result<(), String> {
    if url.is_empty() {
        return Err("url cannot be empty".to_string());
    }

    let Some((scheme, rest)) = url.split_once("://") else {
        return Err(format!("url must have a scheme and host: {url}"));
    };
    if scheme.is_empty() || rest.is_empty() {
        return Err(format!("url must have a scheme and host: {url}"));
    }

    let scheme = scheme.to_lowercase();
    if scheme != "http" && scheme != "https" {
        return Err(format!("url scheme must be http or https: {scheme}"));
    }

    Ok(())
}
