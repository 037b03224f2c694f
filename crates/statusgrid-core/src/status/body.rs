//! Upstream response-body acceptance.
//!
//! An endpoint is expected to answer a bare decimal integer as plain
//! text. Acceptance rules:
//! - trim surrounding whitespace
//! - non-empty, ASCII decimal digits only (no sign, no decimal point,
//!   no exponent)
//! - must fit in `u64`
//!
//! Anything else is not a count and the server classifies as Offline.

/// Parse a response body as an online-user count.
pub fn parse_online_count(body: &str) -> Option<u64> {
    let s = body.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}
