//! Remote endpoint URL checks

use url::Url;

/// Check that `value` is an absolute http(s) URL with a host
pub fn validate_endpoint(value: &str, context: &str) -> Result<Url, String> {
    let url = Url::parse(value).map_err(|e| format!("{} has invalid URL format: {}", context, e))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(format!(
                "{} must use http:// or https:// scheme, got: {}",
                context, scheme
            ));
        }
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(format!("{} URL must have a valid host", context));
    }

    Ok(url)
}
