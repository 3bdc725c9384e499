use crate::ports::{DomainBlocklistRepository, RecordRepository};
use chrono::{DateTime, NaiveDateTime, Utc};
use classwatch_domain::normalizer::{canonical_domain, UNKNOWN_IP};
use classwatch_domain::{BrowsingRecord, DomainError};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, info, instrument};

const STORED_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Incoming report, as deserialized by the transport layer. All fields are
/// optional at this level; validation happens in the use case so transports
/// stay dumb.
#[derive(Debug, Clone, Default)]
pub struct ReportPayload {
    pub student_id: Option<String>,
    pub student_ip: Option<String>,
    pub url: Option<String>,
    pub original_url: Option<String>,
    /// Client-declared domain; trusted verbatim when present.
    pub domain: Option<String>,
    pub title: Option<String>,
    pub timestamp: Option<String>,
}

/// Transport facts the payload itself cannot carry.
#[derive(Debug, Clone, Default)]
pub struct ReportContext {
    /// Raw forwarded-for header value, possibly a comma-separated chain.
    pub forwarded_for: Option<String>,
    pub peer_addr: Option<IpAddr>,
}

#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub ok: bool,
    pub blacklisted: bool,
    pub message: String,
}

pub struct SubmitReportUseCase {
    records: Arc<dyn RecordRepository>,
    domain_blocklist: Arc<dyn DomainBlocklistRepository>,
}

impl SubmitReportUseCase {
    pub fn new(
        records: Arc<dyn RecordRepository>,
        domain_blocklist: Arc<dyn DomainBlocklistRepository>,
    ) -> Self {
        Self {
            records,
            domain_blocklist,
        }
    }

    /// Validate, resolve domain/IP/timestamp, classify, and write exactly one
    /// record. The classification is returned to the caller but never stored;
    /// reads recompute it against the blocklist of their moment.
    #[instrument(skip(self, payload, ctx), fields(student_id))]
    pub async fn execute(
        &self,
        payload: ReportPayload,
        ctx: ReportContext,
    ) -> Result<ReportOutcome, DomainError> {
        let student_id = payload
            .student_id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DomainError::MissingField("student_id"))?
            .to_string();
        tracing::Span::current().record("student_id", student_id.as_str());

        let final_url = payload
            .url
            .as_deref()
            .filter(|s| !s.is_empty())
            .or(payload.original_url.as_deref().filter(|s| !s.is_empty()))
            .ok_or(DomainError::MissingField("url"))?
            .to_string();

        let domain = match payload.domain.as_deref().filter(|s| !s.is_empty()) {
            Some(declared) => declared.to_string(),
            None => canonical_domain(&final_url),
        };

        let student_ip = resolve_student_ip(payload.student_ip.as_deref(), &ctx);
        let timestamp = payload
            .timestamp
            .as_deref()
            .and_then(parse_client_timestamp);

        let matched = self.domain_blocklist.find_match(&domain).await?;
        let blacklisted = matched.is_some();

        let record = BrowsingRecord {
            id: None,
            student_id,
            student_ip: Some(student_ip),
            url: domain.clone(),
            original_url: Some(final_url),
            title: Some(
                payload
                    .title
                    .as_deref()
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .unwrap_or("untitled")
                    .to_string(),
            ),
            timestamp,
        };

        let id = self.records.insert(&record).await?;
        if blacklisted {
            info!(record_id = id, domain = %domain, "Blocklisted visit recorded");
        } else {
            debug!(record_id = id, domain = %domain, "Visit recorded");
        }

        Ok(ReportOutcome {
            ok: true,
            blacklisted,
            message: if blacklisted {
                "Visit recorded (domain is blocklisted)".to_string()
            } else {
                "Visit recorded".to_string()
            },
        })
    }
}

/// Precedence: payload value, first forwarded-for hop, transport peer,
/// unknown sentinel.
fn resolve_student_ip(payload_ip: Option<&str>, ctx: &ReportContext) -> String {
    if let Some(ip) = payload_ip.map(str::trim).filter(|s| !s.is_empty()) {
        return ip.to_string();
    }
    if let Some(forwarded) = ctx.forwarded_for.as_deref() {
        if let Some(first) = forwarded.split(',').next().map(str::trim).filter(|s| !s.is_empty()) {
            return first.to_string();
        }
    }
    if let Some(peer) = ctx.peer_addr {
        return peer.to_string();
    }
    UNKNOWN_IP.to_string()
}

/// Accept RFC 3339 or the stored `%Y-%m-%d %H:%M:%S` form; anything else
/// falls back to the column default at insert time.
fn parse_client_timestamp(raw: &str) -> Option<String> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(
            parsed
                .with_timezone(&Utc)
                .format(STORED_TIMESTAMP_FORMAT)
                .to_string(),
        );
    }
    NaiveDateTime::parse_from_str(raw, STORED_TIMESTAMP_FORMAT)
        .ok()
        .map(|naive| naive.format(STORED_TIMESTAMP_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ip_precedence_prefers_payload() {
        let ctx = ReportContext {
            forwarded_for: Some("10.0.0.2, 10.0.0.3".to_string()),
            peer_addr: Some("10.0.0.9".parse().unwrap()),
        };
        assert_eq!(resolve_student_ip(Some("10.0.0.1"), &ctx), "10.0.0.1");
        assert_eq!(resolve_student_ip(None, &ctx), "10.0.0.2");
        assert_eq!(
            resolve_student_ip(None, &ReportContext {
                forwarded_for: None,
                peer_addr: Some("10.0.0.9".parse().unwrap()),
            }),
            "10.0.0.9"
        );
        assert_eq!(
            resolve_student_ip(None, &ReportContext::default()),
            UNKNOWN_IP
        );
    }

    #[test]
    fn timestamp_accepts_both_formats() {
        assert_eq!(
            parse_client_timestamp("2026-03-01T08:30:00Z").as_deref(),
            Some("2026-03-01 08:30:00")
        );
        assert_eq!(
            parse_client_timestamp("2026-03-01 08:30:00").as_deref(),
            Some("2026-03-01 08:30:00")
        );
        assert_eq!(parse_client_timestamp("yesterday-ish"), None);
    }
}
