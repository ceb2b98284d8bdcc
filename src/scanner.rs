use std::sync::Arc;

use tracing::warn;

use crate::analysis::{aggregate, ClassifierOutcome};
use crate::classifier::{Classifier, GeminiClassifier, ScanInput};
use crate::config::GuardConfig;
use crate::errors::GuardError;
use crate::models::{ReputationSignal, RiskAssessment};
use crate::reputation::{ReputationOracle, SafeBrowsingClient};

/// Runs one request-scoped scan: both outbound calls issued concurrently,
/// joined, then resolved by the aggregator. Holds no per-request state,
/// so a single instance serves concurrent requests.
#[derive(Clone)]
pub struct Scanner {
    oracle: Arc<dyn ReputationOracle>,
    classifier: Arc<dyn Classifier>,
}

impl Scanner {
    pub fn new(oracle: Arc<dyn ReputationOracle>, classifier: Arc<dyn Classifier>) -> Self {
        Self { oracle, classifier }
    }

    /// Produce the final risk object for one submitted artifact.
    /// Infallible: both upstream calls degrade soft.
    pub async fn scan(&self, input: &ScanInput) -> RiskAssessment {
        let reputation = async {
            match input.url_candidate() {
                Some(url) => ReputationSignal {
                    listed: self.lookup(url).await,
                },
                // No URL candidate, no oracle call at all.
                None => ReputationSignal::default(),
            }
        };

        let classification = async {
            match self.classifier.classify(input).await {
                Ok(text) => ClassifierOutcome::from_raw(&text),
                Err(e) => {
                    warn!(error = %e, "classifier unreachable, degrading");
                    ClassifierOutcome::Unavailable
                }
            }
        };

        let (signal, outcome) = tokio::join!(reputation, classification);
        aggregate(outcome, signal)
    }

    /// Single attempt, fail-soft: any oracle failure reads as "not listed"
    /// so an outage never blocks a verdict.
    async fn lookup(&self, url: &str) -> bool {
        match self.oracle.check(url).await {
            Ok(listed) => listed,
            Err(e) => {
                warn!(error = %e, "reputation lookup failed, treating as not listed");
                false
            }
        }
    }
}

/// Wire the production oracle and classifier from startup configuration.
pub fn build_scanner(config: &GuardConfig) -> Result<Scanner, GuardError> {
    let timeout = config.request_timeout();
    let oracle = SafeBrowsingClient::new(config.safe_browsing_api_key()?, timeout)?;
    let classifier = GeminiClassifier::new(config.gemini_api_key()?, Some(config.model()), timeout)?;
    Ok(Scanner::new(Arc::new(oracle), Arc::new(classifier)))
}
