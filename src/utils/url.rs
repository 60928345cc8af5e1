//! URL validation and security utilities.
//!
//! Provides URL validation with domain whitelisting for links opened
//! from script (skill tiles use `window.open`).

use crate::config::ALLOWED_REDIRECT_DOMAINS;

/// Errors that can occur during URL validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UrlValidationError {
    /// URL is empty
    #[error("URL is empty")]
    Empty,
    /// URL doesn't start with http:// or https://
    #[error("URL must start with http:// or https://")]
    InvalidProtocol,
    /// URL has no host/domain
    #[error("URL has no host")]
    NoHost,
    /// Domain is not in the allowed list
    #[error("Domain '{0}' is not allowed")]
    DomainNotAllowed(String),
}

/// Validate a URL for safe redirect
///
/// Checks:
/// 1. URL is not empty
/// 2. URL starts with http:// or https://
/// 3. URL has a valid host
/// 4. Host is in the allowed domains list
pub fn validate_redirect_url(url: &str) -> Result<String, UrlValidationError> {
    let url = url.trim();

    if url.is_empty() {
        return Err(UrlValidationError::Empty);
    }

    // Check protocol
    let url_lower = url.to_lowercase();
    if !url_lower.starts_with("http://") && !url_lower.starts_with("https://") {
        return Err(UrlValidationError::InvalidProtocol);
    }

    // Extract host from URL
    let host = extract_host(url).ok_or(UrlValidationError::NoHost)?;

    // Check if host is in allowed list
    if !is_domain_allowed(&host) {
        return Err(UrlValidationError::DomainNotAllowed(host));
    }

    Ok(url.to_string())
}

/// Extract host from a URL
fn extract_host(url: &str) -> Option<String> {
    // Remove protocol
    let without_protocol = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .or_else(|| url.strip_prefix("HTTPS://"))
        .or_else(|| url.strip_prefix("HTTP://"))?;

    // Get the host part (before first /, ? or # or end of string)
    let host_part = without_protocol.split(['/', '?', '#']).next()?;

    // Remove port if present
    let host = host_part.split(':').next()?;

    // Remove www. prefix for matching
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        return None;
    }

    Some(host.to_lowercase())
}

/// Check if a domain is in the allowed list
fn is_domain_allowed(host: &str) -> bool {
    let host_lower = host.to_lowercase();

    ALLOWED_REDIRECT_DOMAINS.iter().any(|allowed| {
        // Exact match, or subdomain match ("open.spotify.com" matches "spotify.com")
        host_lower == *allowed || host_lower.ends_with(&format!(".{}", allowed))
    })
}
