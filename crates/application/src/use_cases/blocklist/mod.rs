mod add_domain_block;
mod add_ip_block;
mod check_blacklist;
mod get_domain_blocks;
mod get_ip_blocks;
mod remove_domain_block;
mod remove_ip_block;

pub use add_domain_block::AddDomainBlockUseCase;
pub use add_ip_block::AddIpBlockUseCase;
pub use check_blacklist::CheckBlacklistUseCase;
pub use get_domain_blocks::GetDomainBlocksUseCase;
pub use get_ip_blocks::GetIpBlocksUseCase;
pub use remove_domain_block::RemoveDomainBlockUseCase;
pub use remove_ip_block::RemoveIpBlockUseCase;

use regex::Regex;
use std::sync::LazyLock;

/// Non-error outcome of a blocklist mutation. A duplicate add or a delete
/// that touched zero rows is policy, not failure: `ok` goes false and the
/// message says why, but no error is raised.
#[derive(Debug, Clone)]
pub struct BlocklistMutation {
    pub ok: bool,
    pub message: String,
}

static DOTTED_QUAD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{1,3}\.\d{1,3}\.\d{1,3}\.\d{1,3}$").unwrap());

/// Syntactic dotted-quad test, used both for IPv4 validation and to
/// disambiguate delete-by-ip from delete-by-id.
pub(crate) fn is_dotted_quad(value: &str) -> bool {
    DOTTED_QUAD_RE.is_match(value)
}

#[cfg(test)]
mod tests {
    use super::is_dotted_quad;

    #[test]
    fn dotted_quad_syntax() {
        assert!(is_dotted_quad("192.168.1.1"));
        assert!(is_dotted_quad("8.8.8.8"));
        assert!(!is_dotted_quad("42"));
        assert!(!is_dotted_quad("qq.com"));
        assert!(!is_dotted_quad("1.2.3"));
        assert!(!is_dotted_quad("1.2.3.4.5"));
    }
}
