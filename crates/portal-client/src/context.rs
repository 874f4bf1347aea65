use std::net::IpAddr;

/// Per-request forwarding context extracted from the inbound page request.
///
/// Lives for exactly one page render and is never persisted. Carries the
/// pre-existing credential-free parts of the request the backend needs to
/// see: where the visitor actually came from.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// Verbatim value of the inbound `X-Forwarded-For` header, if any.
    /// Multi-hop proxy chains are forwarded as-is, not re-parsed.
    pub forwarded_for: Option<String>,
    /// Transport-level peer address of the inbound connection.
    pub peer_addr: Option<IpAddr>,
}

impl RequestContext {
    pub fn new(forwarded_for: Option<String>, peer_addr: Option<IpAddr>) -> Self {
        Self {
            forwarded_for,
            peer_addr,
        }
    }

    /// Best-known originating client address.
    ///
    /// Resolution order: an inbound `X-Forwarded-For` value wins over the
    /// transport peer; with neither available there is nothing to forward
    /// and the outbound header is omitted.
    pub fn client_ip(&self) -> Option<String> {
        match self.forwarded_for.as_deref() {
            Some(value) if !value.is_empty() => Some(value.to_string()),
            _ => self.peer_addr.map(|addr| addr.to_string()),
        }
    }
}
