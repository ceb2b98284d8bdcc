pub mod safe_browsing;

use async_trait::async_trait;

use crate::errors::GuardError;

pub use safe_browsing::SafeBrowsingClient;

/// External service answering whether a URL appears on a maintained list
/// of known-malicious URLs. Injectable so the decision logic can be
/// tested with fakes.
#[async_trait]
pub trait ReputationOracle: Send + Sync {
    /// One lookup, no retries. The caller decides what a failure means.
    async fn check(&self, url: &str) -> Result<bool, GuardError>;
}
