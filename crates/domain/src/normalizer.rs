//! Domain normalization, in two explicit modes.
//!
//! Canonical mode runs at ingestion and produces the value stored in a
//! record's `url` column — the string every blocklist match is computed
//! against. Display mode runs at read time and never mutates stored data:
//! it only rescues rows whose stored domain is a sentinel by re-extracting
//! a host from the raw original URL.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Stored in place of a domain when nothing usable could be extracted.
pub const UNKNOWN_DOMAIN: &str = "unknown";

/// Stored in place of a client IP when no source could provide one.
pub const UNKNOWN_IP: &str = "unknown";

/// Rendered wherever a displayable value is absent.
pub const PLACEHOLDER: &str = "—";

/// Stored-domain values that carry no real host and trigger re-extraction.
const NON_DOMAIN_SENTINELS: &[&str] = &[
    UNKNOWN_DOMAIN,
    "unparsable_url",
    "internal_page",
    "unknown_app",
    "about:blank",
    "",
];

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").unwrap());

static HOST_FALLBACK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)([a-z0-9.-]+\.[a-z]{2,})").unwrap());

/// Canonical (storage) mode: reduce a raw URL to the bare host it names.
///
/// Lowercases, drops everything up to `://`, cuts at the first `/`, strips a
/// leading `www.`. A port is kept. Empty results and `about:blank` collapse
/// to [`UNKNOWN_DOMAIN`].
pub fn canonical_domain(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let after_scheme = match lowered.split_once("://") {
        Some((_, rest)) => rest,
        None => lowered.as_str(),
    };
    let host = after_scheme.split('/').next().unwrap_or("");
    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() || host == "about:blank" {
        UNKNOWN_DOMAIN.to_string()
    } else {
        host.to_string()
    }
}

/// Display (read) mode: produce a human-displayable domain for a stored row.
///
/// A stored domain that is not a sentinel is returned unchanged. Sentinel
/// rows fall back to parsing `original_url`, then to a best-effort
/// `label.label` regex, then to the raw original URL, then to the
/// placeholder.
pub fn display_domain(stored: &str, original_url: &str) -> String {
    if !NON_DOMAIN_SENTINELS.contains(&stored) {
        return stored.to_string();
    }

    if original_url.is_empty() {
        return PLACEHOLDER.to_string();
    }

    let candidate = if SCHEME_RE.is_match(original_url) {
        original_url.to_string()
    } else {
        format!("http://{original_url}")
    };

    match Url::parse(&candidate) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("");
            let host = if host.len() >= 4 && host[..4].eq_ignore_ascii_case("www.") {
                &host[4..]
            } else {
                host
            };
            if host.is_empty() {
                original_url.to_string()
            } else {
                host.to_string()
            }
        }
        Err(_) => match HOST_FALLBACK_RE.captures(original_url) {
            Some(caps) => caps[1].to_string(),
            None => original_url.to_string(),
        },
    }
}

/// Normalize a stored client IP for display. Loopback, the unknown sentinel,
/// and `0.0.0.0` render as the placeholder; an IPv4-mapped IPv6 prefix is
/// stripped.
pub fn display_ip(raw: Option<&str>) -> String {
    let value = raw.unwrap_or("").trim();
    if value.is_empty()
        || value == UNKNOWN_IP
        || value == "127.0.0.1"
        || value == "::1"
        || value == "0.0.0.0"
    {
        return PLACEHOLDER.to_string();
    }
    value.strip_prefix("::ffff:").unwrap_or(value).to_string()
}
