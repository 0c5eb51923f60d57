use reqwest::Client;
use std::time::Duration;

/// Overall deadline for one provider call. Kept under the gateway's request
/// timeout so a stalled provider surfaces as a 502 from `/brief`, not a
/// gateway timeout.
pub const PROVIDER_TIMEOUT_SECS: u64 = 20;

/// HTTP client for provider calls. A briefing is one short completion per
/// request, so the deadline stays tight and the pool small.
pub fn build_provider_client() -> Client {
    Client::builder()
        .timeout(Duration::from_secs(PROVIDER_TIMEOUT_SECS))
        .connect_timeout(Duration::from_secs(10))
        .pool_max_idle_per_host(2)
        .build()
        .unwrap_or_else(|_| Client::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::REQUEST_TIMEOUT_SECS;

    #[test]
    fn provider_deadline_stays_under_the_gateway_deadline() {
        let _client = build_provider_client();
        assert!(PROVIDER_TIMEOUT_SECS < REQUEST_TIMEOUT_SECS);
    }
}
